//! CLI entrypoint module structure.
use anyhow::{Context, Result};

use crate::{
    config::ReporterConfig,
    lib::{errors::RenderError, telemetry},
    report::{render_json, render_text, BuildReport},
};

pub mod args;
pub mod exit;
pub mod profile;

pub use args::ReportArgs;
pub use exit::{RuntimeExit, BUILD_MISSING_EXIT_CODE};
pub use profile::{OutputFormat, ReportProfile};

/// Rendered report plus what the caller needs to pick an exit status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOutcome {
    pub output: String,
    pub build_found: bool,
}

/// Load configuration, inspect the build directory, and render the report.
pub fn execute_report(profile: &ReportProfile) -> Result<ReportOutcome> {
    let mut config = ReporterConfig::load(&profile.config).with_context(|| {
        format!(
            "failed to load configuration from {}",
            profile.config.path.display()
        )
    })?;
    if let Some(dist_dir) = profile.dist_override.clone() {
        config = config.with_dist_dir(dist_dir)?;
    }

    telemetry::emit_run_settings(
        &config.build.dist_dir,
        config.source_path.as_deref(),
        profile.format.as_str(),
    );

    let report = BuildReport::collect(&config).map_err(RenderError::from)?;
    let output = match profile.format {
        OutputFormat::Text => render_text(&report),
        OutputFormat::Json => render_json(&report)?,
    };

    Ok(ReportOutcome {
        output,
        build_found: report.status().is_found(),
    })
}
