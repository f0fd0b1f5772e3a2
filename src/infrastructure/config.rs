//! Configuration management

use crate::domain::DEFAULT_PLAYLIST_LENGTH;
use crate::error::{MoodmixError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the journal metadata directory
pub const MOODMIX_DIR: &str = ".moodmix";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_playlist_length")]
    pub playlist_length: usize,
    pub editor: String,
    pub created: DateTime<Utc>,
}

fn default_playlist_length() -> usize {
    DEFAULT_PLAYLIST_LENGTH
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            playlist_length: DEFAULT_PLAYLIST_LENGTH,
            editor: Self::detect_default_editor(),
            created: Utc::now(),
        }
    }

    /// Load config from .moodmix/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(MOODMIX_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MoodmixError::NotMoodmixDirectory(path.to_path_buf())
            } else {
                MoodmixError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| MoodmixError::Config(format!("Failed to parse config.toml: {}", e)))?;
        Self::validate_playlist_length(config.playlist_length)?;

        Ok(config)
    }

    /// Save config to .moodmix/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let moodmix_dir = path.join(MOODMIX_DIR);
        let config_path = moodmix_dir.join("config.toml");

        if !moodmix_dir.exists() {
            fs::create_dir(&moodmix_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| MoodmixError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Parse and validate a playlist length
    pub fn parse_playlist_length(value: &str) -> Result<usize> {
        let n = value.trim().parse::<usize>().map_err(|_| {
            MoodmixError::Config(format!("Invalid playlist_length: '{}'", value))
        })?;
        Self::validate_playlist_length(n)?;
        Ok(n)
    }

    fn validate_playlist_length(n: usize) -> Result<()> {
        if n == 0 {
            return Err(MoodmixError::Config(
                "Invalid playlist_length: must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the editor command, checking environment variables first
    pub fn get_editor(&self) -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| self.editor.clone())
    }

    /// Detect default editor from environment or system
    fn detect_default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(windows) {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
