use std::path::Path;

use tracing::{debug, info};

use super::{
    ConfigLocation, ConfigOrigin, ReporterConfig, CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH,
};

pub fn log_source(location: &ConfigLocation) {
    let path = location.path.display();
    match location.origin {
        ConfigOrigin::Cli => info!(
            target: "dist_status::config",
            path = %path,
            "{}",
            source_message(location.origin)
        ),
        ConfigOrigin::Env => info!(
            target: "dist_status::config",
            path = %path,
            env = CONFIG_ENV_KEY,
            "{}",
            source_message(location.origin)
        ),
        ConfigOrigin::Default => debug!(
            target: "dist_status::config",
            path = %path,
            env = CONFIG_ENV_KEY,
            default = DEFAULT_CONFIG_PATH,
            "{}",
            source_message(location.origin)
        ),
    }
}

fn source_message(origin: ConfigOrigin) -> &'static str {
    match origin {
        ConfigOrigin::Cli => "Loading configuration from --config",
        ConfigOrigin::Env => "Loading configuration using DIST_STATUS_CONFIG environment variable",
        ConfigOrigin::Default => "DIST_STATUS_CONFIG not set; using default dist-status.toml",
    }
}

pub fn log_defaults(path: &Path) {
    debug!(
        target: "dist_status::config",
        path = %path.display(),
        "No configuration file found; using built-in defaults"
    );
}

pub fn log_loaded(config: &ReporterConfig) {
    let source = config
        .source_path
        .as_deref()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    info!(
        target: "dist_status::config",
        path = %source,
        dist_dir = %config.build.dist_dir.display(),
        key_entries = config.build.key_entries.len(),
        build_command = %config.build.build_command,
        "Configuration file loaded successfully"
    );
}
