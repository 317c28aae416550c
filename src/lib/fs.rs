//! Read-only filesystem helpers for inspecting build output directories.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::warn;

/// Outcome of walking a directory tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileTally {
    /// Regular files found at any depth.
    pub regular_files: usize,
    /// Directories whose entries could not be listed.
    pub unreadable_dirs: Vec<PathBuf>,
}

/// Count regular files below `root`.
///
/// Symlinks are resolved for the file check, so a link to a regular file counts.
/// Symlinked directories are never descended, which keeps link cycles finite.
/// Directories that cannot be read are skipped and reported in
/// [`FileTally::unreadable_dirs`] instead of failing the walk.
pub fn count_regular_files(root: &Path) -> FileTally {
    let mut tally = FileTally::default();
    if root.is_dir() {
        walk_inner(root, &mut tally);
    }
    tally.unreadable_dirs.sort();
    tally
}

fn walk_inner(dir: &Path, tally: &mut FileTally) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            record_unreadable(dir, &err, tally);
            return;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                record_unreadable(dir, &err, tally);
                continue;
            }
        };
        let path = entry.path();
        let ty = match entry.file_type() {
            Ok(ty) => ty,
            Err(err) => {
                warn!(
                    target: "dist_status::inspect",
                    path = %path.display(),
                    reason = %err,
                    "Skipping entry with unreadable file type"
                );
                continue;
            }
        };

        if ty.is_dir() {
            walk_inner(&path, tally);
        } else if ty.is_file() || (ty.is_symlink() && path.is_file()) {
            tally.regular_files += 1;
        }
    }
}

fn record_unreadable(dir: &Path, err: &io::Error, tally: &mut FileTally) {
    warn!(
        target: "dist_status::inspect",
        path = %dir.display(),
        reason = %err,
        "Skipping unreadable directory"
    );
    if !tally.unreadable_dirs.iter().any(|p| p == dir) {
        tally.unreadable_dirs.push(dir.to_path_buf());
    }
}

/// Returns true if `root/name` exists as any kind of entry.
pub fn entry_exists(root: &Path, name: &str) -> bool {
    root.is_dir() && root.join(name).exists()
}
