//! Error types for moodmix

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for moodmix application
#[derive(Debug, Error)]
pub enum MoodmixError {
    #[error("Not a moodmix directory: {0}")]
    NotMoodmixDirectory(PathBuf),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Entry {id} cannot be read: {reason}")]
    UnreadableEntry { id: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MoodmixError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodmixError::NotMoodmixDirectory(_) => 2,
            MoodmixError::EntryNotFound(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodmixError::NotMoodmixDirectory(path) => {
                format!(
                    "Not a moodmix directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'moodmix init' in this directory to start a journal\n\
                    • Navigate to an existing moodmix directory\n\
                    • Set MOODMIX_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            MoodmixError::EntryNotFound(id) => {
                format!(
                    "No entry found with id: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'moodmix list' to see your entries and their ids\n\
                    • Entries are private to their owner; check MOODMIX_OWNER",
                    id
                )
            }
            MoodmixError::UnreadableEntry { id, reason } => {
                format!(
                    "Entry '{}' cannot be read and its owner is unknown: {}\n\n\
                    Suggestions:\n\
                    • Repair .moodmix/entries/{}.toml by hand\n\
                    • Remove it anyway: moodmix delete --force {}",
                    id, reason, id, id
                )
            }
            MoodmixError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Configure editor: moodmix config editor 'vim'\n\
                    • Skip the editor: moodmix new --title '...' --content '...'",
                    msg
                )
            }
            MoodmixError::Config(msg) => {
                if msg.contains("playlist_length") {
                    format!(
                        "{}\n\n\
                        playlist_length must be a whole number of at least 1\n\
                        Example: moodmix config playlist_length 5",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodmixError
pub type Result<T> = std::result::Result<T, MoodmixError>;
