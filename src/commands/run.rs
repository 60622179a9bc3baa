//! Interactive terminal handler

use std::path::Path;

use anyhow::Result;
use tracing::warn;

use crtterm::cli::RunArgs;
use crtterm::tui::{TerminalApp, Theme};
use crtterm::{Config, Console, ConsoleOptions};

#[cfg(not(tarpaulin_include))]
pub fn handle_run(config_path: &Path, args: &RunArgs) -> Result<()> {
    let mut config = Config::load_from(config_path)?;
    if let Some(variant) = args.variant {
        config.terminal.variant = variant;
    }
    if let Some(theme) = &args.theme {
        config.theme.name = theme.clone();
    }

    let theme = Theme::from_name(&config.theme.name).unwrap_or_else(|| {
        warn!(name = %config.theme.name, "unknown theme, using default");
        Theme::default()
    });

    let options = ConsoleOptions::from_config(&config).skip_boot(args.skip_boot);
    let console = Console::new(options);

    let mut app = TerminalApp::new(console, theme, config.title())?;
    app.run()
}
