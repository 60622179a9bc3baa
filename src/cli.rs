//! Command-line interface definition
//!
//! Lives in the library so the xtask crate can generate man pages from it.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::variant::Variant;

/// Env var that enables file logging when `--log-file` is not given.
pub const LOG_FILE_ENV: &str = "CRTTERM_LOG_FILE";

#[derive(Debug, Parser)]
#[command(name = "crtterm", version, about, long_about = None)]
pub struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Append log output to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the interactive terminal (default)
    Run(RunArgs),

    /// Run commands without a screen and print what they add to the transcript
    Exec {
        /// Terminal variant whose responses to use
        #[arg(long, value_enum)]
        variant: Option<Variant>,

        /// Commands to submit, in order
        #[arg(required = true, value_name = "INPUT")]
        inputs: Vec<String>,
    },

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Default, Args)]
pub struct RunArgs {
    /// Terminal variant
    #[arg(long, value_enum)]
    pub variant: Option<Variant>,

    /// Color theme (phosphor, amber, classic)
    #[arg(long)]
    pub theme: Option<String>,

    /// Start with the boot sequence already finished
    #[arg(long)]
    pub skip_boot: bool,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the config file location
    Path,
}

/// Version string with build metadata, for logs.
pub fn build_info() -> String {
    let sha = option_env!("VERGEN_GIT_SHA").unwrap_or("release");
    format!(
        "{} ({}, built {})",
        env!("CARGO_PKG_VERSION"),
        sha,
        env!("CRTTERM_BUILD_DATE")
    )
}
