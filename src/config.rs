//! Configuration management
//!
//! Settings live in `<config_dir>/crtterm/config.toml`. Every field has a
//! default, so a missing file or a partial file both load cleanly.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::variant::Variant;

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub terminal: TerminalConfig,
    pub theme: ThemeConfig,
    pub boot: BootConfig,
    /// Responses for commands the builtin table does not handle
    pub responses: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Which revision of the terminal to run
    pub variant: Variant,
    /// Frame title. Empty uses the variant's default.
    pub title: String,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            title: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// phosphor, amber or classic
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "phosphor".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootConfig {
    /// Boot messages. Empty uses the builtin sequence.
    pub messages: Vec<String>,
}

impl Config {
    /// Default location of the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("crtterm").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(io_err)
    }

    /// Frame title, falling back to the variant's default.
    pub fn title(&self) -> &str {
        if self.terminal.title.is_empty() {
            self.terminal.variant.default_title()
        } else {
            &self.terminal.title
        }
    }

    /// Configured boot messages, if any.
    pub fn boot_messages(&self) -> Option<Vec<String>> {
        (!self.boot.messages.is_empty()).then(|| self.boot.messages.clone())
    }
}
