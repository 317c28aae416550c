use crate::repo;
use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

const SAMPLE_FILES: &[(&str, &str)] = &[
    ("index.html", "<!doctype html>"),
    ("assets/index.js", "console.log('smoke')"),
];

pub fn run(dist: Option<PathBuf>) -> Result<()> {
    let root = repo::repo_root()?;
    let binary = root.join("target/release/dist-status");
    if !binary.is_file() {
        anyhow::bail!(
            "{} not found; run `cargo build --release` first",
            repo::rel_from(&root, &binary).display()
        );
    }

    let dist = match dist {
        Some(dist) => dist,
        None => {
            let scratch = root.join("target/xtask-smoke/dist");
            write_sample_build(&scratch)?;
            scratch
        }
    };

    let output = Command::new(&binary)
        .args(["--format", "json", "--require-build", "--dist"])
        .arg(&dist)
        .current_dir(&root)
        .output()
        .with_context(|| format!("failed to run {}", binary.display()))?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    if !output.status.success() {
        anyhow::bail!(
            "dist-status reported {} as not deployable (status {}):\n{stdout}",
            dist.display(),
            output.status
        );
    }
    if !stdout.contains("\"state\": \"found\"") {
        anyhow::bail!("unexpected report for {}:\n{stdout}", dist.display());
    }

    eprintln!("smoke: {} looks deployable", dist.display());
    Ok(())
}

fn write_sample_build(dist: &Path) -> Result<()> {
    for (relative, content) in SAMPLE_FILES {
        let path = dist.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content).with_context(|| format!("failed to write {}", path.display()))?;
    }
    Ok(())
}
