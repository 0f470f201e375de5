//! User preferences
//!
//! Settings live in a small TOML file under the platform config directory
//! (`<config_dir>/snipvault/settings.toml`). Every change made through
//! [`SettingsStore::update`] is written back immediately.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR: &str = "snipvault";
const SETTINGS_FILE: &str = "settings.toml";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Editor and display preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub theme: Theme,
    pub language: String,
    pub auto_save: bool,
    pub show_line_numbers: bool,
    pub font_size: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            language: "en".to_string(),
            auto_save: true,
            show_line_numbers: true,
            font_size: 14,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("no configuration directory on this platform")]
    NoConfigDir,

    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to encode settings: {0}")]
    Encode(#[from] toml::ser::Error),
}

impl Settings {
    /// `<config_dir>/snipvault/settings.toml`
    pub fn default_path() -> Result<PathBuf, SettingsError> {
        let mut path = dirs::config_dir().ok_or(SettingsError::NoConfigDir)?;
        path.push(APP_DIR);
        path.push(SETTINGS_FILE);
        Ok(path)
    }

    /// Load settings, falling back to defaults when the file does not exist
    ///
    /// Keys missing from the file take their default values.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Ok(toml::from_str(&text)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No settings at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(SettingsError::Read {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    /// Write settings, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let text = toml::to_string_pretty(self)?;
        let write_err = |source| SettingsError::Write {
            path: path.display().to_string(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        std::fs::write(path, text).map_err(write_err)
    }
}

/// Settings bound to the file they are persisted in
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    settings: Settings,
}

impl SettingsStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = path.into();
        let settings = Settings::load(&path)?;
        Ok(Self { path, settings })
    }

    /// Open the settings file in the user's config directory
    pub fn open_default() -> Result<Self, SettingsError> {
        Self::open(Settings::default_path()?)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Change settings and persist them
    ///
    /// The in-memory copy is only replaced once the file is written.
    pub fn update<F>(&mut self, change: F) -> Result<&Settings, SettingsError>
    where
        F: FnOnce(&mut Settings),
    {
        let mut next = self.settings.clone();
        change(&mut next);
        next.save(&self.path)?;
        self.settings = next;
        tracing::debug!("Settings saved to {}", self.path.display());
        Ok(&self.settings)
    }

    pub fn reset(&mut self) -> Result<&Settings, SettingsError> {
        self.update(|s| *s = Settings::default())
    }
}
