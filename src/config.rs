//! # Configuration Persistence
//!
//! Manages user configuration stored in `~/.config/nordic/config.json`.
//!
//! ## Overview
//!
//! The [`Config`] struct is serialized to / deserialized from a JSON file in
//! the user's XDG config directory. Missing fields fall back to their defaults
//! and unknown fields are rejected.
//!
//! ```json
//! {
//!   "theme": "Nord",
//!   "gum": "gum",
//!   "distribute_evenly": true,
//!   "components": [
//!     { "name": "Polybar", "command": ["sh", "-c", "..."] }
//!   ]
//! }
//! ```
//!
//! Command-line flags take precedence over the file.

use crate::backend::gum::DEFAULT_PROGRAM;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Persisted user configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The name of the selected theme (must match a built-in theme name).
    #[serde(default = "default_theme_name")]
    pub theme: String,

    /// Program used to draw widgets.
    #[serde(default = "default_gum")]
    pub gum: String,

    /// Spread body widgets over the terminal height.
    #[serde(default = "default_distribute_evenly")]
    pub distribute_evenly: bool,

    /// Components offered by the installer, in display order.
    #[serde(default = "default_components")]
    pub components: Vec<ComponentConfig>,
}

/// One installable component and the command that installs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentConfig {
    pub name: String,
    pub command: Vec<String>,
}

impl ComponentConfig {
    fn backup(name: &str, dir: &str) -> Self {
        let script = format!(r#"test ! -e "$HOME/{dir}" || cp -r "$HOME/{dir}" "$HOME/{dir}.bak""#);
        Self {
            name: name.to_string(),
            command: vec!["sh".to_string(), "-c".to_string(), script],
        }
    }
}

fn default_theme_name() -> String {
    "Nord".to_string()
}

fn default_gum() -> String {
    DEFAULT_PROGRAM.to_string()
}

fn default_distribute_evenly() -> bool {
    true
}

/// Back up the existing configuration of every component the dotfiles ship.
fn default_components() -> Vec<ComponentConfig> {
    vec![
        ComponentConfig::backup("Polybar", ".config/polybar"),
        ComponentConfig::backup("GNOME Shell extensions", ".local/share/gnome-shell/extensions"),
        ComponentConfig::backup("VSCodium extensions", ".vscode-oss/extensions"),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            gum: default_gum(),
            distribute_evenly: default_distribute_evenly(),
            components: default_components(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path. Returns `Config::default()` if
    /// the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save the current configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Return the path to the config file.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "nordic")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("config.json"))
    }
}
