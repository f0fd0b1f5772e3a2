//! Create entry use case: the only place mood and playlist are generated

use crate::domain::{Draft, JournalEntry, MoodCatalog, MoodClassifier};
use crate::error::Result;
use crate::infrastructure::{
    EditorSession, EntryRepository, FileSystemRepository, JournalRepository,
};
use rand::Rng;

/// Service turning drafts into stored entries
pub struct CreateEntryService {
    repository: FileSystemRepository,
    classifier: MoodClassifier,
    catalog: MoodCatalog,
}

impl CreateEntryService {
    /// Create a service backed by the built-in keyword groups and catalog
    pub fn new(repository: FileSystemRepository) -> Self {
        Self::with_core(repository, MoodClassifier::builtin(), MoodCatalog::builtin())
    }

    pub fn with_core(
        repository: FileSystemRepository,
        classifier: MoodClassifier,
        catalog: MoodCatalog,
    ) -> Self {
        CreateEntryService {
            repository,
            classifier,
            catalog,
        }
    }

    /// Write the entry body in the configured editor
    pub fn compose_in_editor(&self) -> Result<String> {
        let config = self.repository.load_config()?;
        let editor = EditorSession::new(config.get_editor());
        editor.compose(&self.repository.meta_path("DRAFT.md"), "")
    }

    /// Generate the mix for `draft` and store it under `owner`
    pub fn execute(&self, owner: &str, draft: Draft) -> Result<JournalEntry> {
        self.execute_with(owner, draft, &mut rand::thread_rng())
    }

    pub fn execute_with<R: Rng + ?Sized>(
        &self,
        owner: &str,
        draft: Draft,
        rng: &mut R,
    ) -> Result<JournalEntry> {
        let config = self.repository.load_config()?;

        let new_entry = draft.compose(
            owner,
            &self.classifier,
            &self.catalog,
            config.playlist_length,
            rng,
        );

        self.repository.create(new_entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{KeywordGroup, MoodLabel, Track};
    use crate::infrastructure::Config;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn setup(playlist_length: usize) -> (TempDir, FileSystemRepository) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        let mut config = Config::new();
        config.playlist_length = playlist_length;
        repo.save_config(&config).unwrap();
        (temp, repo)
    }

    #[test]
    fn test_creates_entry_with_mood_and_playlist() {
        let (_temp, repo) = setup(5);
        let service = CreateEntryService::new(repo.clone());

        let entry = service
            .execute("me", Draft::new("Sunday", "I feel so sad and tired today"))
            .unwrap();

        assert_eq!(entry.mood, MoodLabel::Sad);
        assert_eq!(entry.playlist.len(), 5);
        assert_eq!(repo.find(&entry.id).unwrap().unwrap(), entry);
    }

    #[test]
    fn test_uses_configured_playlist_length() {
        let (_temp, repo) = setup(2);
        let service = CreateEntryService::new(repo);

        let entry = service
            .execute("me", Draft::new("Party", "dance all night"))
            .unwrap();
        assert_eq!(entry.playlist.len(), 2);
    }

    #[test]
    fn test_seeded_creation_is_reproducible() {
        let (_temp, repo) = setup(5);
        let service = CreateEntryService::new(repo);

        let a = service
            .execute_with("me", Draft::new("", "nothing matches"), &mut StdRng::seed_from_u64(9))
            .unwrap();
        let b = service
            .execute_with("me", Draft::new("", "nothing matches"), &mut StdRng::seed_from_u64(9))
            .unwrap();

        assert_eq!(a.mood, b.mood);
        assert_eq!(a.playlist, b.playlist);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_injected_catalog_and_classifier() {
        let (_temp, repo) = setup(5);

        let mut buckets = BTreeMap::new();
        buckets.insert(
            MoodLabel::Default,
            vec![Track::new("Resonance", "Home", "https://example.com/resonance")],
        );
        let catalog = MoodCatalog::new(buckets).unwrap();
        let classifier =
            MoodClassifier::new(vec![KeywordGroup::new(MoodLabel::Floating, ["orbit"])]).unwrap();

        let service = CreateEntryService::with_core(repo, classifier, catalog);
        let entry = service
            .execute("me", Draft::new("Orbit", "around the sun"))
            .unwrap();

        assert_eq!(entry.mood, MoodLabel::Floating);
        assert_eq!(entry.playlist.len(), 1);
        assert_eq!(entry.playlist[0].title, "Resonance");
    }

    #[test]
    fn test_requires_initialized_journal() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        let service = CreateEntryService::new(repo);

        assert!(service.execute("me", Draft::new("a", "b")).is_err());
    }
}
