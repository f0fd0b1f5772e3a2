//! Config management use case

use crate::error::{MoodmixError, Result};
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};

/// Service for managing journal configuration
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
            "playlist_length" => Ok(config.playlist_length.to_string()),
            "editor" => Ok(config.editor.clone()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(MoodmixError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: playlist_length, editor, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "playlist_length" => {
                config.playlist_length = Config::parse_playlist_length(value)?;
            }
            "editor" => {
                config.editor = value.to_string();
            }
            "created" => {
                return Err(MoodmixError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(MoodmixError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: playlist_length, editor",
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
