//! Config management use case

use crate::domain::timer::validate_custom_minutes;
use crate::error::{LoungeError, Result};
use crate::infrastructure::{Config, FileSystemRepository, LoungeRepository};

/// Service for managing lounge configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "default_minutes" => Ok(config.default_minutes.to_string()),
            "sound" => Ok(config.sound.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(LoungeError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: default_minutes, sound, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "default_minutes" => {
                let minutes: u32 = value.trim().parse().map_err(|_| {
                    LoungeError::Config(format!(
                        "Invalid value for default_minutes: '{}'. Expected a whole number",
                        value
                    ))
                })?;
                config.default_minutes = validate_custom_minutes(minutes)?;
            }
            "sound" => {
                config.sound = match value.trim().to_lowercase().as_str() {
                    "true" | "on" | "yes" => true,
                    "false" | "off" | "no" => false,
                    _ => {
                        return Err(LoungeError::Config(format!(
                            "Invalid value for sound: '{}'. Expected true or false",
                            value
                        )))
                    }
                };
            }
            "created" => {
                return Err(LoungeError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(LoungeError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: default_minutes, sound",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
