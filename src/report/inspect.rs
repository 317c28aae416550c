use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::lib::{
    fs::{count_regular_files, entry_exists},
    telemetry::InspectSpan,
};

/// Presence of one named entry directly under the build directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyEntryStatus {
    pub name: String,
    pub present: bool,
}

/// What was observed at the build directory path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum BuildStatus {
    Missing {
        path: PathBuf,
    },
    Found {
        path: PathBuf,
        file_count: usize,
        key_entries: Vec<KeyEntryStatus>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        unreadable_dirs: Vec<PathBuf>,
    },
}

impl BuildStatus {
    pub fn is_found(&self) -> bool {
        matches!(self, BuildStatus::Found { .. })
    }

    pub fn path(&self) -> &Path {
        match self {
            BuildStatus::Missing { path } | BuildStatus::Found { path, .. } => path,
        }
    }

    pub fn file_count(&self) -> Option<usize> {
        match self {
            BuildStatus::Missing { .. } => None,
            BuildStatus::Found { file_count, .. } => Some(*file_count),
        }
    }

    pub fn missing_key_entries(&self) -> impl Iterator<Item = &str> {
        let entries: &[KeyEntryStatus] = match self {
            BuildStatus::Missing { .. } => &[],
            BuildStatus::Found { key_entries, .. } => key_entries,
        };
        entries
            .iter()
            .filter(|entry| !entry.present)
            .map(|entry| entry.name.as_str())
    }
}

/// Observe the build directory at `root` without modifying anything.
///
/// A missing directory is an ordinary outcome, not an error. Key entries are
/// checked independently of each other and of the file count.
pub fn inspect_build_dir(root: &Path, key_entries: &[String]) -> BuildStatus {
    let span = InspectSpan::start(root);

    if !root.exists() {
        span.finish(false, 0);
        return BuildStatus::Missing {
            path: root.to_path_buf(),
        };
    }

    let tally = count_regular_files(root);
    let key_entries = key_entries
        .iter()
        .map(|name| KeyEntryStatus {
            name: name.clone(),
            present: entry_exists(root, name),
        })
        .collect();

    span.finish(true, tally.regular_files);
    BuildStatus::Found {
        path: root.to_path_buf(),
        file_count: tally.regular_files,
        key_entries,
        unreadable_dirs: tally.unreadable_dirs,
    }
}
