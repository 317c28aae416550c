use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::lib::{
    errors::ConfigError,
    paths::{is_blank, is_single_component},
};

pub const DEFAULT_DIST_DIR: &str = "dist";
pub const DEFAULT_KEY_ENTRIES: &[&str] = &["index.html", "assets"];
pub const DEFAULT_BUILD_COMMAND: &str = "npm run build";

/// Where the build output lives and what a complete build contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSection {
    pub dist_dir: PathBuf,
    pub key_entries: Vec<String>,
    pub build_command: String,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            dist_dir: PathBuf::from(DEFAULT_DIST_DIR),
            key_entries: DEFAULT_KEY_ENTRIES.iter().map(|s| s.to_string()).collect(),
            build_command: DEFAULT_BUILD_COMMAND.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawBuildSection {
    pub dist_dir: Option<PathBuf>,
    pub key_entries: Option<Vec<String>>,
    pub build_command: Option<String>,
}

pub fn parse_build_section(
    raw: Option<RawBuildSection>,
    path: &Path,
) -> Result<BuildSection, ConfigError> {
    let defaults = BuildSection::default();
    let build_raw = raw.unwrap_or_default();

    let dist_dir = build_raw.dist_dir.unwrap_or(defaults.dist_dir);
    validate_dist_dir(&dist_dir, path)?;

    let key_entries = build_raw.key_entries.unwrap_or(defaults.key_entries);
    validate_key_entries(&key_entries, path)?;

    let build_command = build_raw
        .build_command
        .map(|command| command.trim().to_string())
        .unwrap_or(defaults.build_command);
    if build_command.is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "build.build_command",
            message: "Provide the command that produces the build directory".into(),
        });
    }

    Ok(BuildSection {
        dist_dir,
        key_entries,
        build_command,
    })
}

/// Reject an empty build directory path. `origin` names where the value came from.
pub fn validate_dist_dir(dist_dir: &Path, origin: &Path) -> Result<(), ConfigError> {
    if is_blank(dist_dir) {
        return Err(ConfigError::InvalidField {
            path: origin.to_path_buf(),
            field: "build.dist_dir",
            message: "Build directory path must not be empty".into(),
        });
    }
    Ok(())
}

fn validate_key_entries(entries: &[String], path: &Path) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for entry in entries {
        if !is_single_component(entry) {
            return Err(ConfigError::InvalidField {
                path: path.to_path_buf(),
                field: "build.key_entries",
                message: format!("`{entry}` must be a single entry name without separators"),
            });
        }
        if !seen.insert(entry.as_str()) {
            return Err(ConfigError::InvalidField {
                path: path.to_path_buf(),
                field: "build.key_entries",
                message: format!("`{entry}` is listed more than once"),
            });
        }
    }
    Ok(())
}
