//! Subcommand handlers

pub mod completions;
pub mod config;
pub mod exec;
pub mod run;

use std::path::{Path, PathBuf};

use anyhow::Result;
use crtterm::Config;

/// The `--config` override, or the default location.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(Config::config_path()?),
    }
}
