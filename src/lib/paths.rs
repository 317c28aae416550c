//! Shared helpers reused across modules (e.g., path validation).

use std::path::Path;

/// Returns true if the path is empty or only whitespace.
pub fn is_blank(path: &Path) -> bool {
    path.as_os_str().to_string_lossy().trim().is_empty()
}

/// Returns true if `name` is a single non-blank path component (no separators, not `.`/`..`).
pub fn is_single_component(name: &str) -> bool {
    !name.trim().is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
}
