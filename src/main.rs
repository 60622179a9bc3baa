//! crtterm binary entry point

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crtterm::cli::{Cli, Commands, ConfigCommands, RunArgs, LOG_FILE_ENV};
use crtterm::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = cli
        .log_file
        .clone()
        .or_else(|| std::env::var_os(LOG_FILE_ENV).map(PathBuf::from));
    if let Some(path) = &log_file {
        logging::init_file_logging(path)?;
    }
    tracing::info!(version = %crtterm::cli::build_info(), "starting");

    let config_path = commands::resolve_config_path(cli.config.as_deref())?;

    match cli.command {
        None => commands::run::handle_run(&config_path, &RunArgs::default()),
        Some(Commands::Run(args)) => commands::run::handle_run(&config_path, &args),
        Some(Commands::Exec { variant, inputs }) => {
            commands::exec::handle_exec(&config_path, variant, &inputs)
        }
        Some(Commands::Config { action }) => match action {
            ConfigCommands::Show => commands::config::handle_show(&config_path),
            ConfigCommands::Init { force } => commands::config::handle_init(&config_path, force),
            ConfigCommands::Path => commands::config::handle_path(&config_path),
        },
        Some(Commands::Completions { shell }) => {
            commands::completions::handle_completions(shell);
            Ok(())
        }
    }
}
