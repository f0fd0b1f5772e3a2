//! Mood trend use case

use crate::domain::{mood_trend, TrendPoint};
use crate::error::Result;
use crate::infrastructure::{EntryRepository, FileSystemRepository};

/// Mood trend of `owner`'s entries, oldest first.
pub fn mood_stats(repository: &FileSystemRepository, owner: &str) -> Result<Vec<TrendPoint>> {
    let entries = repository.list_by_owner(owner)?;
    Ok(mood_trend(&entries))
}
