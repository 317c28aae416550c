//! CLI argument definitions and `ReportProfile` construction.
use std::path::PathBuf;

use clap::Parser;

use super::{OutputFormat, ReportProfile};
use crate::config::ConfigLocation;

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dist-status",
    author,
    version,
    about = "Report whether a static build output directory is ready to deploy",
    long_about = None,
    after_help = "Hint: run `npm run build` first if the build directory is reported missing."
)]
pub struct ReportArgs {
    /// Path to a TOML config file (overrides DIST_STATUS_CONFIG).
    #[arg(long = "config", value_name = "PATH")]
    pub config_override: Option<PathBuf>,
    /// Build output directory to inspect (overrides `build.dist_dir`).
    #[arg(long = "dist", value_name = "PATH")]
    pub dist_override: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Exit with status 3 when the build directory is missing.
    #[arg(long, default_value_t = false)]
    pub require_build: bool,
}

impl ReportArgs {
    /// Build a `ReportProfile` from CLI args and environment variables.
    pub fn into_profile(self) -> ReportProfile {
        ReportProfile {
            config: ConfigLocation::resolve(self.config_override),
            dist_override: self.dist_override,
            format: self.format,
            require_build: self.require_build,
        }
    }
}
