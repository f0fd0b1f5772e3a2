//! Editor integration for composing entry bodies

use crate::error::{MoodmixError, Result};
use std::fs;
use std::path::Path;
use std::process::Command;

/// Session for writing a draft in an external editor
pub struct EditorSession {
    command: String,
}

impl EditorSession {
    /// Create a new editor session with the given command
    pub fn new(editor_command: String) -> Self {
        EditorSession {
            command: editor_command,
        }
    }

    /// Seed `draft_path` with `initial`, open it in the editor, wait for the
    /// editor to exit and return what was saved. The draft file is removed
    /// afterwards.
    pub fn compose(&self, draft_path: &Path, initial: &str) -> Result<String> {
        fs::write(draft_path, initial)?;

        let result = self.wait_for(draft_path).and_then(|_| {
            fs::read_to_string(draft_path).map_err(MoodmixError::Io)
        });

        if draft_path.exists() {
            fs::remove_file(draft_path)?;
        }

        result
    }

    fn wait_for(&self, file_path: &Path) -> Result<()> {
        let (program, mut args) = self.parse_command();
        args.push(file_path.to_string_lossy().to_string());

        // On Windows, use cmd /c to ensure .bat and .cmd files are found
        #[cfg(windows)]
        let status = Command::new("cmd")
            .arg("/C")
            .arg(&program)
            .args(&args)
            .status();

        #[cfg(not(windows))]
        let status = Command::new(&program).args(&args).status();

        let status = status.map_err(|e| {
            MoodmixError::Editor(format!("Failed to launch editor '{}': {}", program, e))
        })?;

        if !status.success() {
            return Err(MoodmixError::Editor(format!(
                "Editor '{}' exited with {}",
                program, status
            )));
        }

        Ok(())
    }

    /// Parse command into program and arguments
    fn parse_command(&self) -> (String, Vec<String>) {
        let parts: Vec<&str> = self.command.split_whitespace().collect();

        if parts.is_empty() {
            return ("notepad".to_string(), vec![]);
        }

        let program = parts[0].to_string();
        let args = parts[1..].iter().map(|s| s.to_string()).collect();

        (program, args)
    }
}
