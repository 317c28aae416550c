use std::{fs, process::Command};

use tempfile::tempdir;

use crate::common::{fixture, run_in, stdout_of, write_vite_build, BINARY_PATH};

#[test]
fn default_config_file_in_working_directory_is_picked_up() {
    let temp = tempdir().expect("can create temp directory");
    fs::write(
        temp.path().join("dist-status.toml"),
        "[build]\ndist_dir = \"public\"\nbuild_command = \"yarn build\"\n",
    )
    .expect("can write config");

    let stdout = stdout_of(&run_in(temp.path(), &[]));

    assert!(stdout.contains("yarn build"), "{stdout}");
    assert!(stdout.contains("create the `public` folder"), "{stdout}");
}

#[test]
fn config_from_environment_variable() {
    let temp = tempdir().expect("can create temp directory");
    write_vite_build(&temp.path().join("build/web"));

    let output = Command::new(BINARY_PATH)
        .current_dir(temp.path())
        .env("DIST_STATUS_CONFIG", fixture("tests/fixtures/config_valid.toml"))
        .output()
        .expect("dist-status should run");
    let stdout = stdout_of(&output);

    assert!(output.status.success(), "status: {:?}", output.status);
    assert!(stdout.starts_with("Gallery - Deployment Instructions"), "{stdout}");
    assert!(stdout.contains("❌ static"), "{stdout}");
    assert!(stdout.contains("❌ robots.txt"), "{stdout}");
    assert!(stdout.contains("✅ index.html"), "{stdout}");
}

#[test]
fn invalid_config_fails_with_field_name() {
    let temp = tempdir().expect("can create temp directory");
    let config = fixture("tests/fixtures/config_duplicate_entries.toml");

    let output = run_in(temp.path(), &["--config", &config.display().to_string()]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("build.key_entries"), "stderr: {stderr}");
    assert!(output.stdout.is_empty(), "no report should be printed");
}

#[test]
fn missing_explicit_config_fails() {
    let temp = tempdir().expect("can create temp directory");

    let output = run_in(temp.path(), &["--config", "nowhere.toml"]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn app_kind_from_config_reaches_the_report() {
    let temp = tempdir().expect("can create temp directory");
    fs::write(
        temp.path().join("dist-status.toml"),
        "[report]\napp_kind = \"Svelte/Vite\"\n",
    )
    .expect("can write config");

    let stdout = stdout_of(&run_in(temp.path(), &[]));

    assert!(stdout.contains("built with Svelte/Vite."), "{stdout}");
    assert!(stdout.contains("Please build the Svelte/Vite app first:"), "{stdout}");
    assert!(stdout.contains("for the Svelte/Vite application."), "{stdout}");
}
