//! Owner key resolution
//!
//! An explicit identity comes from `MOODMIX_OWNER`. Without one, the journal
//! keeps a guest id in `.moodmix/guest_id`, generated on first use.

use crate::error::Result;
use crate::infrastructure::FileSystemRepository;
use std::fs;
use uuid::Uuid;

/// Environment variable holding an authenticated owner key
pub const OWNER_ENV: &str = "MOODMIX_OWNER";

const GUEST_ID_FILE: &str = "guest_id";

/// Owner key for the current session
pub fn resolve_owner(repository: &FileSystemRepository) -> Result<String> {
    if let Ok(owner) = std::env::var(OWNER_ENV) {
        let owner = owner.trim();
        if !owner.is_empty() {
            return Ok(owner.to_string());
        }
    }

    guest_id(repository)
}

/// The journal's persistent guest id, created if missing
pub fn guest_id(repository: &FileSystemRepository) -> Result<String> {
    let path = repository.meta_path(GUEST_ID_FILE);

    if path.is_file() {
        let existing = fs::read_to_string(&path)?;
        let existing = existing.trim();
        if !existing.is_empty() {
            return Ok(existing.to_string());
        }
    }

    let id = Uuid::new_v4().to_string();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, &id)?;
    tracing::debug!(%id, "created guest session");

    Ok(id)
}
