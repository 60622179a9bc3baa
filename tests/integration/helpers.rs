//! Shared helpers for integration tests

use std::path::PathBuf;
use std::time::Duration;

use assert_cmd::Command;
use crtterm::{Clock, Console, ConsoleOptions, ManualClock, Variant};
use rand::rngs::mock::StepRng;
use tempfile::TempDir;

/// Console with effects that never trigger, mounted at time zero.
pub fn quiet_console(variant: Variant) -> Console {
    let options = ConsoleOptions::new(variant).rng(Box::new(StepRng::new(u64::MAX, 0)));
    let mut console = Console::new(options);
    console.mount(Duration::ZERO);
    console
}

/// Advance both the clock and the console by `ms` milliseconds.
pub fn tick(clock: &ManualClock, console: &mut Console, ms: u64) {
    clock.advance(Duration::from_millis(ms));
    console.advance_to(clock.now());
}

/// Temp dir with a config file holding `content`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).expect("write config");
    (dir, path)
}

/// The crtterm binary with logging disabled.
pub fn crtterm() -> Command {
    let mut cmd = Command::cargo_bin("crtterm").expect("binary built");
    cmd.env_remove("CRTTERM_LOG_FILE");
    cmd
}
