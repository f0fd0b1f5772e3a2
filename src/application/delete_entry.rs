//! Delete entry use cases

use crate::error::{MoodmixError, Result};
use crate::infrastructure::{EntryRepository, FileSystemRepository, Removal};

/// Service for removing entries
pub struct DeleteEntryService {
    repository: FileSystemRepository,
}

impl DeleteEntryService {
    pub fn new(repository: FileSystemRepository) -> Self {
        DeleteEntryService { repository }
    }

    /// Delete one of `owner`'s entries.
    ///
    /// A file that no longer parses is still removed when its owner line
    /// names `owner`. With `force`, one whose owner cannot be recovered at all
    /// is removed too.
    pub fn delete(&self, owner: &str, id: &str, force: bool) -> Result<()> {
        let owned = match self.repository.find(id) {
            Ok(found) => found.is_some_and(|entry| entry.owner == owner),
            Err(e) if is_damaged(&e) => match self.repository.recover_owner(id)? {
                Some(stored) => stored == owner,
                None if force => true,
                None => {
                    return Err(MoodmixError::UnreadableEntry {
                        id: id.to_string(),
                        reason: e.to_string(),
                    });
                }
            },
            Err(e) => return Err(e),
        };

        if !owned || !self.repository.delete(id)? {
            return Err(MoodmixError::EntryNotFound(id.to_string()));
        }

        Ok(())
    }

    /// Delete all of `owner`'s entries. Unreadable files with no owner are
    /// left in place and reported.
    pub fn clear(&self, owner: &str) -> Result<Removal> {
        self.repository.delete_by_owner(owner)
    }
}

/// The entry file exists but its contents are not a valid entry
fn is_damaged(err: &MoodmixError) -> bool {
    match err {
        MoodmixError::TomlDeserialize(_) => true,
        MoodmixError::Io(e) => e.kind() == std::io::ErrorKind::InvalidData,
        _ => false,
    }
}
