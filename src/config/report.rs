use std::path::Path;

use serde::Deserialize;

use crate::lib::errors::ConfigError;

pub const DEFAULT_TITLE: &str = "AI Image Generator - Deployment Instructions";
pub const DEFAULT_APP_KIND: &str = "React/Vite";

/// Presentation settings for the rendered report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub title: String,
    pub app_kind: String,
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            app_kind: DEFAULT_APP_KIND.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawReportSection {
    pub title: Option<String>,
    pub app_kind: Option<String>,
}

pub fn parse_report_section(
    raw: Option<RawReportSection>,
    path: &Path,
) -> Result<ReportSection, ConfigError> {
    let defaults = ReportSection::default();
    let report_raw = raw.unwrap_or_default();

    let title = report_raw
        .title
        .map(|title| title.trim().to_string())
        .unwrap_or(defaults.title);
    if title.is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "report.title",
            message: "Title must not be blank".into(),
        });
    }

    let app_kind = report_raw
        .app_kind
        .map(|app_kind| app_kind.trim().to_string())
        .filter(|app_kind| !app_kind.is_empty())
        .unwrap_or(defaults.app_kind);

    Ok(ReportSection { title, app_kind })
}
