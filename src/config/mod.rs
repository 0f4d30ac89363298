//! This module persists the user's language preference to a `settings.toml`
//! file. The store never talks to the filesystem directly; it goes through a
//! [`Preferences`] value, which can be pointed at any path (tests use a
//! temporary directory) or left at the platform default config directory.
//!
//! # Examples
//!
//! ```no_run
//! use lingo::config::{Config, Preferences};
//!
//! let prefs = Preferences::default();
//! let mut config = prefs.load().unwrap_or_default();
//!
//! config.language = Some("ko".to_string());
//! prefs.save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Lingo";

/// Persisted user preferences. Absent fields fall back to their defaults, so
/// a config written by an older version still loads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

/// Handle to the preference file, injectable wherever persistence is needed.
///
/// `Preferences::default()` resolves to `settings.toml` under the platform
/// config directory; [`Preferences::at`] pins an explicit file path instead.
#[derive(Debug, Clone, Default)]
pub struct Preferences {
    path: Option<PathBuf>,
}

impl Preferences {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    fn resolved_path(&self) -> Option<PathBuf> {
        self.path.clone().or_else(default_config_path)
    }

    /// Reads the preference file, yielding the default config when the file
    /// does not exist or no config directory is available.
    pub fn load(&self) -> Result<Config> {
        if let Some(path) = self.resolved_path() {
            if path.exists() {
                return load_from_path(&path);
            }
        }
        Ok(Config::default())
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(path) = self.resolved_path() {
            return save_to_path(config, &path);
        }
        Ok(())
    }
}
