//! Show entry use case (the now-playing view)

use crate::domain::{GradientPalette, JournalEntry};
use crate::error::{MoodmixError, Result};
use crate::infrastructure::{EntryRepository, FileSystemRepository};

/// Service for looking up entries to display
pub struct ShowEntryService {
    repository: FileSystemRepository,
    palette: GradientPalette,
}

impl ShowEntryService {
    pub fn new(repository: FileSystemRepository) -> Self {
        Self::with_palette(repository, GradientPalette::builtin())
    }

    pub fn with_palette(repository: FileSystemRepository, palette: GradientPalette) -> Self {
        ShowEntryService {
            repository,
            palette,
        }
    }

    pub fn palette(&self) -> &GradientPalette {
        &self.palette
    }

    /// Entry `id` of `owner`, or the owner's latest entry when `id` is None.
    ///
    /// Entries of other owners are reported as not found.
    pub fn execute(&self, owner: &str, id: Option<&str>) -> Result<JournalEntry> {
        match id {
            Some(id) => self
                .repository
                .find(id)?
                .filter(|entry| entry.owner == owner)
                .ok_or_else(|| MoodmixError::EntryNotFound(id.to_string())),
            None => self
                .repository
                .list_by_owner(owner)?
                .into_iter()
                .next()
                .ok_or_else(|| MoodmixError::EntryNotFound("latest".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MoodLabel, NewEntry};
    use crate::infrastructure::JournalRepository;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileSystemRepository) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        (temp, repo)
    }

    fn store(repo: &FileSystemRepository, owner: &str, mood: MoodLabel) -> JournalEntry {
        repo.create(NewEntry {
            owner: owner.to_string(),
            title: "t".to_string(),
            content: "c".to_string(),
            mood,
            playlist: vec![],
        })
        .unwrap()
    }

    #[test]
    fn test_show_by_id() {
        let (_temp, repo) = setup();
        let entry = store(&repo, "me", MoodLabel::Dreamy);
        let service = ShowEntryService::new(repo);

        let shown = service.execute("me", Some(&entry.id)).unwrap();
        assert_eq!(shown, entry);

        let view = shown.view(service.palette());
        assert_eq!(
            &view.gradient,
            service.palette().gradient_for(MoodLabel::Dreamy, &entry.id)
        );
    }

    #[test]
    fn test_show_latest() {
        let (_temp, repo) = setup();
        store(&repo, "me", MoodLabel::Sad);
        let service = ShowEntryService::new(repo.clone());

        let latest = service.execute("me", None).unwrap();
        assert_eq!(latest, repo.list_by_owner("me").unwrap()[0]);
    }

    #[test]
    fn test_other_owner_is_not_found() {
        let (_temp, repo) = setup();
        let entry = store(&repo, "me", MoodLabel::Sad);
        let service = ShowEntryService::new(repo);

        assert!(matches!(
            service.execute("you", Some(&entry.id)),
            Err(MoodmixError::EntryNotFound(_))
        ));
        assert!(matches!(
            service.execute("you", None),
            Err(MoodmixError::EntryNotFound(_))
        ));
    }
}
