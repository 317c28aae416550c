use std::fs;

use tempfile::tempdir;

use crate::common::{run_in, stdout_of, write_vite_build};

#[test]
fn missing_build_prints_remediation_and_exits_zero() {
    let temp = tempdir().expect("can create temp directory");

    let output = run_in(temp.path(), &[]);
    let stdout = stdout_of(&output);

    assert!(output.status.success(), "status: {:?}", output.status);
    assert!(stdout.contains("❌ Build directory not found"), "{stdout}");
    assert!(stdout.contains("npm run build"), "{stdout}");
    assert!(!stdout.contains("✅ Build directory found"), "{stdout}");
}

#[test]
fn present_build_reports_exact_file_count() {
    let temp = tempdir().expect("can create temp directory");
    write_vite_build(&temp.path().join("dist"));

    let output = run_in(temp.path(), &[]);
    let stdout = stdout_of(&output);

    assert!(output.status.success(), "status: {:?}", output.status);
    assert!(stdout.contains("✅ Build directory found"), "{stdout}");
    assert!(stdout.contains("Found 4 files ready for deployment"), "{stdout}");
    assert!(stdout.contains("✅ index.html"), "{stdout}");
    assert!(stdout.contains("✅ assets"), "{stdout}");
}

#[test]
fn missing_assets_is_marked_independently() {
    let temp = tempdir().expect("can create temp directory");
    let dist = temp.path().join("dist");
    fs::create_dir_all(&dist).expect("can create dist");
    fs::write(dist.join("index.html"), "").expect("can write index");

    let stdout = stdout_of(&run_in(temp.path(), &[]));

    assert!(stdout.contains("✅ index.html"), "{stdout}");
    assert!(stdout.contains("❌ assets"), "{stdout}");
    assert!(stdout.contains("Found 1 files ready for deployment"), "{stdout}");
}

#[test]
fn repeated_runs_produce_identical_output() {
    let temp = tempdir().expect("can create temp directory");
    write_vite_build(&temp.path().join("dist"));

    let first = run_in(temp.path(), &[]);
    let second = run_in(temp.path(), &[]);

    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn require_build_exits_with_dedicated_code() {
    let temp = tempdir().expect("can create temp directory");

    let output = run_in(temp.path(), &["--require-build"]);

    assert_eq!(output.status.code(), Some(3));
    assert!(stdout_of(&output).contains("Build directory not found"));
}

#[test]
fn require_build_passes_when_present() {
    let temp = tempdir().expect("can create temp directory");
    write_vite_build(&temp.path().join("dist"));

    let output = run_in(temp.path(), &["--require-build"]);

    assert!(output.status.success(), "status: {:?}", output.status);
}

#[test]
fn json_format_is_machine_readable() {
    let temp = tempdir().expect("can create temp directory");
    write_vite_build(&temp.path().join("dist"));

    let output = run_in(temp.path(), &["--format", "json"]);
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");

    assert_eq!(value["status"]["state"], "found");
    assert_eq!(value["status"]["file_count"], 4);
    assert_eq!(value["next_steps"]["kind"], "deploy");
}

#[test]
fn dist_flag_points_at_another_directory() {
    let temp = tempdir().expect("can create temp directory");
    write_vite_build(&temp.path().join("out"));

    let stdout = stdout_of(&run_in(temp.path(), &["--dist", "out"]));

    assert!(stdout.contains("Found 4 files ready for deployment"), "{stdout}");
    assert!(stdout.contains("contents of the 'out' folder"), "{stdout}");
}
