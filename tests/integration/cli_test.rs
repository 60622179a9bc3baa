//! Integration tests for the crtterm binary

use predicates::prelude::*;

use super::helpers::{crtterm, temp_config};
use crtterm::interpreter::{CLASSIC_BIO, CRT_BIO, NOT_RECOGNIZED};

#[test]
fn snapshot_cli_help() {
    let output = crtterm().arg("--help").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let report = format!(
        "=== crtterm --help ===\nExit code: {}\n\n--- stdout ---\n{}\n--- stderr ---\n{}",
        output.status.code().unwrap_or(-1),
        stdout,
        stderr
    );
    insta::assert_snapshot!(report, @r#"
    === crtterm --help ===
    Exit code: 0

    --- stdout ---
    Retro CRT terminal portfolio showcase with a typed boot sequence

    Usage: crtterm [OPTIONS] [COMMAND]

    Commands:
      run          Open the interactive terminal (default)
      exec         Run commands without a screen and print what they add to the transcript
      config       Inspect or create the config file
      completions  Print shell completions
      help         Print this message or the help of the given subcommand(s)

    Options:
          --config <PATH>    Use this config file instead of the default location
          --log-file <PATH>  Append log output to this file
      -h, --help             Print help
      -V, --version          Print version

    --- stderr ---
    "#);
}

#[test]
fn exec_prints_echo_and_response() {
    let (_dir, config) = temp_config("");
    crtterm()
        .args(["exec", "--variant", "classic", "about"])
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("> about"))
        .stdout(predicate::str::contains(CLASSIC_BIO));
}

#[test]
fn exec_reports_unrecognized_commands() {
    let (_dir, config) = temp_config("");
    crtterm()
        .args(["exec", "xyz"])
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains(NOT_RECOGNIZED));
}

#[test]
fn exec_skips_blank_and_clear() {
    let (_dir, config) = temp_config("");
    crtterm()
        .args(["exec", "  ", "clear"])
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn exec_uses_configured_variant_and_responses() {
    let (_dir, config) = temp_config(
        r#"
[terminal]
variant = "crt"

[responses]
contact = "mail me"
"#,
    );
    crtterm()
        .args(["exec", "about", "contact"])
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains(CRT_BIO))
        .stdout(predicate::str::contains("mail me"));
}

#[test]
fn invalid_config_fails_with_message() {
    let (_dir, config) = temp_config("[terminal]\nvariant = 3\n");
    crtterm()
        .args(["exec", "help"])
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}

#[test]
fn config_init_writes_defaults_and_refuses_to_overwrite() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("sub").join("config.toml");

    crtterm()
        .args(["config", "init"])
        .arg("--config")
        .arg(&path)
        .assert()
        .success();
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("variant = \"boot\""));

    crtterm()
        .args(["config", "init"])
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn config_show_prints_effective_settings() {
    let (_dir, config) = temp_config("[theme]\nname = \"amber\"\n");
    crtterm()
        .args(["config", "show"])
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("name = \"amber\""))
        .stdout(predicate::str::contains("variant = \"boot\""));
}

#[test]
fn config_path_echoes_override() {
    let (_dir, config) = temp_config("");
    crtterm()
        .args(["config", "path"])
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn completions_generate_for_bash() {
    crtterm()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("crtterm"));
}

#[test]
fn log_file_receives_events() {
    let (dir, config) = temp_config("");
    let log = dir.path().join("crtterm.log");
    crtterm()
        .args(["exec", "about"])
        .arg("--config")
        .arg(&config)
        .arg("--log-file")
        .arg(&log)
        .env("CRTTERM_LOG", "debug")
        .assert()
        .success();

    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains("starting"));
    assert!(contents.contains("command submitted"));
}
