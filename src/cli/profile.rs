//! ReportProfile and output format resolution.
use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::ConfigLocation;

/// Report output format.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub const fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

/// Resolved settings for one report run.
#[derive(Debug, Clone)]
pub struct ReportProfile {
    pub config: ConfigLocation,
    pub dist_override: Option<PathBuf>,
    pub format: OutputFormat,
    pub require_build: bool,
}
