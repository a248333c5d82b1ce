//! Configuration management

use crate::domain::timer::DEFAULT_MINUTES;
use crate::error::{LoungeError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_minutes() -> u32 {
    DEFAULT_MINUTES
}

fn default_sound() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Timer duration used when no preset or custom time is given
    #[serde(default = "default_minutes")]
    pub default_minutes: u32,
    /// Play the completion chime
    #[serde(default = "default_sound")]
    pub sound: bool,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            default_minutes: DEFAULT_MINUTES,
            sound: true,
            created: Utc::now(),
        }
    }

    /// Load config from .lounge/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".lounge").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LoungeError::NotLoungeDirectory(path.to_path_buf())
            } else {
                LoungeError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| LoungeError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .lounge/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let lounge_dir = path.join(".lounge");
        let config_path = lounge_dir.join("config.toml");

        if !lounge_dir.exists() {
            fs::create_dir(&lounge_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| LoungeError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config() {
        let config = Config::new();
        assert_eq!(config.default_minutes, 10);
        assert!(config.sound);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::new();
        config.default_minutes = 20;
        config.sound = false;

        config.save_to_dir(temp.path()).unwrap();

        assert!(temp.path().join(".lounge").exists());
        assert!(temp.path().join(".lounge/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();

        assert_eq!(loaded.default_minutes, 20);
        assert!(!loaded.sound);
        assert_eq!(loaded.created, config.created);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".lounge")).unwrap();
        fs::write(
            temp.path().join(".lounge/config.toml"),
            "created = \"2025-01-17T10:00:00Z\"\n",
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.default_minutes, 10);
        assert!(loaded.sound);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        assert!(result.is_err());
        match result.unwrap_err() {
            LoungeError::NotLoungeDirectory(_) => {}
            _ => panic!("Expected NotLoungeDirectory error"),
        }
    }

    #[test]
    fn test_load_garbage_config() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".lounge")).unwrap();
        fs::write(temp.path().join(".lounge/config.toml"), "not = [valid").unwrap();

        match Config::load_from_dir(temp.path()).unwrap_err() {
            LoungeError::Config(msg) => assert!(msg.contains("config.toml")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
