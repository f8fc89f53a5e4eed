//! Configuration module for catswipe
//!
//! Manages application configuration: where progress is stored and the
//! tunables of the swipe session.
//! Configuration is stored in the user's config directory.

use crate::media::DEFAULT_DECK_SIZE;
use crate::session::SessionSettings;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

const fn default_deck_size() -> usize {
    DEFAULT_DECK_SIZE
}

const fn default_swipe_threshold() -> i32 {
    70
}

const fn default_fly_out_ms() -> u64 {
    220
}

const fn default_column_scale() -> i32 {
    8
}

const fn default_true() -> bool {
    true
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SwipeConfig {
    /// Database directory; defaults to the system data directory
    #[serde(default)]
    pub database: Option<PathBuf>,

    /// Number of cards in a new deck
    #[serde(default = "default_deck_size")]
    pub deck_size: usize,

    /// Drag distance (in distance units) needed to commit a swipe
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: i32,

    /// Length of the fly-out animation in milliseconds
    #[serde(default = "default_fly_out_ms")]
    pub fly_out_ms: u64,

    /// Distance units per terminal column when dragging with the mouse
    #[serde(default = "default_column_scale")]
    pub column_scale: i32,

    /// Ring the terminal bell on each swipe
    #[serde(default = "default_true")]
    pub haptics: bool,

    /// Fetch every image in the background when a round starts
    #[serde(default = "default_true")]
    pub prefetch: bool,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            database: None,
            deck_size: default_deck_size(),
            swipe_threshold: default_swipe_threshold(),
            fly_out_ms: default_fly_out_ms(),
            column_scale: default_column_scale(),
            haptics: true,
            prefetch: true,
            quiet: false,
        }
    }
}

impl SwipeConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("catswipe").join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        Self::load_from(config_path)
    }

    /// Load configuration from a specific TOML file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_from(path: PathBuf) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        fs::write(&config_path, self.to_toml()?)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Render the configuration as pretty TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }

    /// Directory holding the progress database
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no database is configured and the system data
    /// directory cannot be determined.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.database {
            return Ok(path.clone());
        }
        let data_dir = dirs::data_local_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine data directory".to_string()))?;
        Ok(data_dir.join("catswipe").join("db"))
    }

    /// Session tunables derived from this configuration
    #[must_use]
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            threshold: self.swipe_threshold,
            fly_out: Duration::from_millis(self.fly_out_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SwipeConfig::default();
        assert!(config.database.is_none());
        assert_eq!(config.deck_size, 14);
        assert_eq!(config.session_settings(), SessionSettings::default());
        assert!(config.haptics);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "swipe_threshold = 40\nhaptics = false\n").unwrap();

        let config = SwipeConfig::load_from(path).unwrap();
        assert_eq!(config.swipe_threshold, 40);
        assert!(!config.haptics);
        assert_eq!(config.fly_out_ms, 220);
        assert_eq!(config.deck_size, 14);
    }

    #[test]
    fn test_toml_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let config = SwipeConfig {
            database: Some(PathBuf::from("/tmp/cats")),
            deck_size: 3,
            ..SwipeConfig::default()
        };
        fs::write(&path, config.to_toml().unwrap()).unwrap();

        assert_eq!(SwipeConfig::load_from(path).unwrap(), config);
    }

    #[test]
    fn test_configured_database_path() {
        let config = SwipeConfig {
            database: Some(PathBuf::from("/tmp/cats")),
            ..SwipeConfig::default()
        };
        assert_eq!(config.database_path().unwrap(), PathBuf::from("/tmp/cats"));
    }
}
