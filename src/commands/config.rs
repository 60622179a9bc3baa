//! Config subcommands handler

use std::path::Path;

use anyhow::{bail, Result};

use crtterm::tui::Theme;
use crtterm::Config;

/// Show the effective configuration as TOML.
pub fn handle_show(config_path: &Path) -> Result<()> {
    let config = Config::load_from(config_path)?;
    let toml_str = toml::to_string_pretty(&config)?;
    print!("{}", toml_str);
    Ok(())
}

/// Write the default config file.
pub fn handle_init(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Config file {} already exists (use --force to overwrite)",
            config_path.display()
        );
    }
    Config::default().save_to(config_path)?;

    let theme = Theme::default();
    println!(
        "{}",
        theme.primary_text(&format!("Wrote {}", config_path.display()))
    );
    Ok(())
}

/// Print the config file location.
pub fn handle_path(config_path: &Path) -> Result<()> {
    println!("{}", config_path.display());
    Ok(())
}
