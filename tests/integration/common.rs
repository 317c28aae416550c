use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_dist-status");

/// Run the binary inside `cwd` with a clean config environment.
pub fn run_in(cwd: &Path, args: &[&str]) -> Output {
    Command::new(BINARY_PATH)
        .args(args)
        .current_dir(cwd)
        .env_remove("DIST_STATUS_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .expect("dist-status should run")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn fixture(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

/// Lay out a typical Vite build: `index.html`, hashed bundles under `assets/`.
pub fn write_vite_build(dist: &Path) {
    fs::create_dir_all(dist.join("assets")).expect("can create assets");
    fs::write(dist.join("index.html"), "<!doctype html>").expect("can write index");
    fs::write(dist.join("assets/index-4b1f.js"), "console.log(1)").expect("can write js");
    fs::write(dist.join("assets/index-8e2c.css"), "body{}").expect("can write css");
    fs::write(dist.join("vite.svg"), "<svg/>").expect("can write svg");
}
