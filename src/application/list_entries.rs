//! List entries use case

use crate::domain::JournalEntry;
use crate::error::Result;
use crate::infrastructure::{EntryRepository, FileSystemRepository};

/// Entries of `owner`, newest first, optionally limited.
pub fn list_entries(
    repository: &FileSystemRepository,
    owner: &str,
    limit: Option<usize>,
) -> Result<Vec<JournalEntry>> {
    let mut entries = repository.list_by_owner(owner)?;
    if let Some(n) = limit {
        entries.truncate(n);
    }
    Ok(entries)
}
