//! Load and validate reporter configuration.
use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::error;

use crate::lib::errors::ConfigError;

pub mod build;
pub mod report;
pub mod telemetry;

pub use build::{
    parse_build_section, validate_dist_dir, BuildSection, RawBuildSection, DEFAULT_BUILD_COMMAND,
    DEFAULT_DIST_DIR, DEFAULT_KEY_ENTRIES,
};
pub use report::{
    parse_report_section, RawReportSection, ReportSection, DEFAULT_APP_KIND, DEFAULT_TITLE,
};

pub const CONFIG_ENV_KEY: &str = "DIST_STATUS_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "dist-status.toml";

/// Where the configuration path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOrigin {
    Cli,
    Env,
    Default,
}

/// Resolved configuration file location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    pub path: PathBuf,
    pub origin: ConfigOrigin,
}

impl ConfigLocation {
    /// Resolve in the order: CLI override → `DIST_STATUS_CONFIG` → `dist-status.toml`.
    pub fn resolve(override_path: Option<PathBuf>) -> Self {
        Self::resolve_from(override_path, env::var_os(CONFIG_ENV_KEY))
    }

    fn resolve_from(override_path: Option<PathBuf>, env_value: Option<OsString>) -> Self {
        if let Some(path) = override_path {
            return Self {
                path,
                origin: ConfigOrigin::Cli,
            };
        }

        match env_value {
            Some(value) if !value.to_string_lossy().trim().is_empty() => Self {
                path: PathBuf::from(value),
                origin: ConfigOrigin::Env,
            },
            _ => Self {
                path: PathBuf::from(DEFAULT_CONFIG_PATH),
                origin: ConfigOrigin::Default,
            },
        }
    }

    /// Only the implicit default file may be absent.
    pub fn is_optional(&self) -> bool {
        self.origin == ConfigOrigin::Default
    }
}

/// Top-level configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReporterConfig {
    pub build: BuildSection,
    pub report: ReportSection,
    /// `None` when built-in defaults were used.
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawReporterConfig {
    build: Option<RawBuildSection>,
    report: Option<RawReportSection>,
}

impl ReporterConfig {
    /// Load from a resolved location, falling back to defaults when the optional file is absent.
    pub fn load(location: &ConfigLocation) -> Result<Self, ConfigError> {
        telemetry::log_source(location);

        if !location.path.exists() {
            if location.is_optional() {
                telemetry::log_defaults(&location.path);
                return Ok(Self::default());
            }
            let error = ConfigError::NotFound {
                path: location.path.clone(),
            };
            error!(
                target: "dist_status::config",
                path = %location.path.display(),
                reason = %error,
                "Configuration file is missing"
            );
            return Err(error);
        }

        Self::load_from_path(location.path.clone())
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::from(path.clone()).format(config::FileFormat::Toml));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "dist_status::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawReporterConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "dist_status::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "dist_status::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    /// Replace the build directory, e.g. from `--dist`.
    pub fn with_dist_dir(mut self, dist_dir: PathBuf) -> Result<Self, ConfigError> {
        validate_dist_dir(&dist_dir, Path::new("--dist"))?;
        self.build.dist_dir = dist_dir;
        Ok(self)
    }

    fn from_raw(raw: RawReporterConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let build = parse_build_section(raw.build, &path)?;
        let report = parse_report_section(raw.report, &path)?;

        Ok(Self {
            build,
            report,
            source_path: Some(path),
        })
    }
}
