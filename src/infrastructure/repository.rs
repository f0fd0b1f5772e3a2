//! File system repository

use crate::domain::{JournalEntry, NewEntry};
use crate::error::{MoodmixError, Result};
use crate::infrastructure::config::MOODMIX_DIR;
use crate::infrastructure::Config;
use chrono::Utc;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;
use walkdir::WalkDir;

/// Journal setup operations
pub trait JournalRepository {
    /// Load configuration from .moodmix/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .moodmix/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Create .moodmix directory structure
    fn initialize(&self) -> Result<()>;
}

/// Entry storage, scoped by owner key
pub trait EntryRepository {
    /// Store a new entry, assigning its id and creation time
    fn create(&self, entry: NewEntry) -> Result<JournalEntry>;

    /// Entries of one owner, newest first
    fn list_by_owner(&self, owner: &str) -> Result<Vec<JournalEntry>>;

    /// Look up an entry by id
    fn find(&self, id: &str) -> Result<Option<JournalEntry>>;

    /// Owner recorded in an entry file that no longer parses as a whole
    fn recover_owner(&self, id: &str) -> Result<Option<String>>;

    /// Delete one entry. Returns false when it did not exist.
    fn delete(&self, id: &str) -> Result<bool>;

    /// Delete every entry of an owner, including unreadable files that still
    /// name that owner
    fn delete_by_owner(&self, owner: &str) -> Result<Removal>;
}

/// Outcome of a bulk delete
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Removal {
    pub removed: usize,
    /// Ids of unreadable entries whose owner could not be recovered
    pub skipped: Vec<String>,
}

/// An entry file that exists but does not parse
#[derive(Debug, Clone, PartialEq, Eq)]
struct Unreadable {
    id: String,
    owner: Option<String>,
}

#[derive(Debug, Default)]
struct Scan {
    entries: Vec<JournalEntry>,
    unreadable: Vec<Unreadable>,
}

#[derive(Deserialize)]
struct OwnerLine {
    owner: String,
}

/// Find the top-level `owner = "..."` line of a damaged entry file
fn owner_line(contents: &str) -> Option<String> {
    contents
        .lines()
        .take_while(|line| !line.trim_start().starts_with('['))
        .filter(|line| line.trim_start().starts_with("owner"))
        .find_map(|line| toml::from_str::<OwnerLine>(line).ok())
        .map(|line| line.owner)
}

/// File system implementation: one TOML file per entry in .moodmix/entries
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks MOODMIX_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("MOODMIX_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_moodmix_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(MoodmixError::Config(format!(
                    "MOODMIX_ROOT is set to '{}' but no .moodmix directory found. \
                    Run 'moodmix init' in that directory or unset MOODMIX_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_moodmix_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(MoodmixError::NotMoodmixDirectory(start.to_path_buf()));
                }
            }
        }
    }

    fn has_moodmix_dir(path: &Path) -> bool {
        path.join(MOODMIX_DIR).is_dir()
    }

    /// Path of a file inside the .moodmix directory
    pub fn meta_path(&self, name: &str) -> PathBuf {
        self.root.join(MOODMIX_DIR).join(name)
    }

    fn entries_dir(&self) -> PathBuf {
        self.meta_path("entries")
    }

    /// Ids are generated UUIDs; anything else cannot name a stored entry
    fn is_valid_id(id: &str) -> bool {
        !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    }

    fn entry_path(&self, id: &str) -> PathBuf {
        self.entries_dir().join(format!("{}.toml", id))
    }

    /// Write through a temp file in the same directory, then rename into place
    fn write_atomic(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.moodmix-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("entry.toml"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, content)?;

        // rename replaces an existing destination in one step
        if let Err(e) = fs::rename(&tmp_path, path) {
            if let Err(cleanup) = fs::remove_file(&tmp_path) {
                tracing::warn!(path = %tmp_path.display(), error = %cleanup, "could not remove temp file");
            }
            return Err(e.into());
        }
        Ok(())
    }

    fn read_entry(path: &Path) -> Result<JournalEntry> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Every entry file, split into parsed entries and files that do not
    /// parse. I/O failures abort the scan.
    fn scan(&self) -> Result<Scan> {
        let dir = self.entries_dir();
        if !dir.is_dir() {
            return Ok(Scan::default());
        }

        let mut scan = Scan::default();
        for item in WalkDir::new(&dir).min_depth(1).max_depth(1) {
            let item = item.map_err(|e| MoodmixError::Io(e.into()))?;
            let path = item.path();
            if !item.file_type().is_file() || path.extension().is_none_or(|ext| ext != "toml") {
                continue;
            }

            let bytes = fs::read(path)?;
            let parsed = std::str::from_utf8(&bytes)
                .map_err(|e| e.to_string())
                .and_then(|text| toml::from_str::<JournalEntry>(text).map_err(|e| e.to_string()));

            match parsed {
                Ok(entry) => scan.entries.push(entry),
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "skipping unreadable entry");
                    let id = path
                        .file_stem()
                        .map(|stem| stem.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    scan.unreadable.push(Unreadable {
                        id,
                        owner: owner_line(&String::from_utf8_lossy(&bytes)),
                    });
                }
            }
        }

        Ok(scan)
    }
}

impl JournalRepository for FileSystemRepository {
    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let moodmix_dir = self.root.join(MOODMIX_DIR);

        if moodmix_dir.exists() {
            return Err(MoodmixError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&moodmix_dir)?;
        fs::create_dir(self.entries_dir())?;
        Ok(())
    }
}

impl EntryRepository for FileSystemRepository {
    fn create(&self, entry: NewEntry) -> Result<JournalEntry> {
        let entry = JournalEntry::from_new(entry, Uuid::new_v4().to_string(), Utc::now());
        let contents = toml::to_string_pretty(&entry)?;
        Self::write_atomic(&self.entry_path(&entry.id), &contents)?;

        tracing::info!(id = %entry.id, mood = %entry.mood, "entry created");
        Ok(entry)
    }

    fn list_by_owner(&self, owner: &str) -> Result<Vec<JournalEntry>> {
        let mut entries: Vec<JournalEntry> = self
            .scan()?
            .entries
            .into_iter()
            .filter(|e| e.owner == owner)
            .collect();

        entries.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        Ok(entries)
    }

    fn find(&self, id: &str) -> Result<Option<JournalEntry>> {
        if !Self::is_valid_id(id) {
            return Ok(None);
        }

        let path = self.entry_path(id);
        if !path.is_file() {
            return Ok(None);
        }

        Self::read_entry(&path).map(Some)
    }

    fn recover_owner(&self, id: &str) -> Result<Option<String>> {
        if !Self::is_valid_id(id) {
            return Ok(None);
        }

        let path = self.entry_path(id);
        if !path.is_file() {
            return Ok(None);
        }

        let bytes = fs::read(&path)?;
        Ok(owner_line(&String::from_utf8_lossy(&bytes)))
    }

    fn delete(&self, id: &str) -> Result<bool> {
        if !Self::is_valid_id(id) {
            return Ok(false);
        }

        let path = self.entry_path(id);
        if !path.is_file() {
            return Ok(false);
        }

        fs::remove_file(&path)?;
        tracing::info!(%id, "entry deleted");
        Ok(true)
    }

    fn delete_by_owner(&self, owner: &str) -> Result<Removal> {
        let scan = self.scan()?;
        let owned = scan
            .entries
            .iter()
            .filter(|e| e.owner == owner)
            .map(|e| e.id.as_str())
            .chain(
                scan.unreadable
                    .iter()
                    .filter(|u| u.owner.as_deref() == Some(owner))
                    .map(|u| u.id.as_str()),
            );

        let mut removal = Removal::default();
        for id in owned {
            if self.delete(id)? {
                removal.removed += 1;
            }
        }

        removal.skipped = scan
            .unreadable
            .into_iter()
            .filter(|u| u.owner.is_none())
            .map(|u| u.id)
            .collect();
        if !removal.skipped.is_empty() {
            tracing::warn!(count = removal.skipped.len(), "left unreadable entries with no owner");
        }

        Ok(removal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MoodLabel, Track};
    use std::ffi::OsString;
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    fn env_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvVarRestore {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvVarRestore {
        fn capture(key: &'static str) -> Self {
            Self {
                key,
                previous: std::env::var_os(key),
            }
        }
    }

    impl Drop for EnvVarRestore {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                std::env::set_var(self.key, value);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    fn initialized_repo() -> (TempDir, FileSystemRepository) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        (temp, repo)
    }

    fn new_entry(owner: &str, title: &str, mood: MoodLabel) -> NewEntry {
        NewEntry {
            owner: owner.to_string(),
            title: title.to_string(),
            content: "body".to_string(),
            mood,
            playlist: vec![Track::new(
                "Holocene",
                "Bon Iver",
                "https://www.youtube.com/watch?v=TWcyIpul8OE",
            )],
        }
    }

    fn temp_files(dir: &Path) -> Vec<String> {
        fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name.contains(".moodmix-tmp-"))
            .collect()
    }

    #[test]
    fn test_initialize_creates_layout() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        assert!(FileSystemRepository::discover_from(temp.path()).is_err());
        repo.initialize().unwrap();
        assert!(temp.path().join(".moodmix").is_dir());
        assert!(temp.path().join(".moodmix/entries").is_dir());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let (_temp, repo) = initialized_repo();
        assert!(repo.initialize().is_err());
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".moodmix")).unwrap();

        let subdir = temp.path().join("sub").join("deep");
        fs::create_dir_all(&subdir).unwrap();

        let repo = FileSystemRepository::discover_from(&subdir).unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_fails_when_no_moodmix() {
        let temp = TempDir::new().unwrap();

        match FileSystemRepository::discover_from(temp.path()).unwrap_err() {
            MoodmixError::NotMoodmixDirectory(_) => {}
            _ => panic!("Expected NotMoodmixDirectory error"),
        }
    }

    #[test]
    fn test_create_assigns_id_and_persists() {
        let (temp, repo) = initialized_repo();

        let entry = repo
            .create(new_entry("guest-1", "Rain", MoodLabel::Sad))
            .unwrap();

        assert!(Uuid::parse_str(&entry.id).is_ok());
        let path = temp
            .path()
            .join(".moodmix/entries")
            .join(format!("{}.toml", entry.id));
        assert!(path.exists());

        let found = repo.find(&entry.id).unwrap().unwrap();
        assert_eq!(found, entry);
        assert_eq!(found.playlist.len(), 1);
    }

    #[test]
    fn test_list_by_owner_newest_first_and_scoped() {
        let (_temp, repo) = initialized_repo();

        let first = repo.create(new_entry("me", "one", MoodLabel::Sad)).unwrap();
        let second = repo
            .create(new_entry("me", "two", MoodLabel::Dreamy))
            .unwrap();
        repo.create(new_entry("someone-else", "three", MoodLabel::Floating))
            .unwrap();

        let mine = repo.list_by_owner("me").unwrap();
        assert_eq!(mine.len(), 2);
        assert!(mine[0].created_at >= mine[1].created_at);
        let ids: Vec<&str> = mine.iter().map(|e| e.id.as_str()).collect();
        assert!(ids.contains(&first.id.as_str()));
        assert!(ids.contains(&second.id.as_str()));

        assert!(repo.list_by_owner("nobody").unwrap().is_empty());
    }

    #[test]
    fn test_list_skips_unreadable_files() {
        let (temp, repo) = initialized_repo();
        repo.create(new_entry("me", "ok", MoodLabel::Sad)).unwrap();
        fs::write(temp.path().join(".moodmix/entries/broken.toml"), "not = [valid").unwrap();
        fs::write(temp.path().join(".moodmix/entries/notes.txt"), "ignored").unwrap();

        assert_eq!(repo.list_by_owner("me").unwrap().len(), 1);
    }

    #[test]
    fn test_list_without_entries_dir() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        assert!(repo.list_by_owner("me").unwrap().is_empty());
    }

    #[test]
    fn test_find_rejects_path_like_ids() {
        let (_temp, repo) = initialized_repo();
        assert_eq!(repo.find("../config").unwrap(), None);
        assert_eq!(repo.find("").unwrap(), None);
        assert!(!repo.delete("../config").unwrap());
    }

    #[test]
    fn test_delete_single_entry() {
        let (_temp, repo) = initialized_repo();
        let entry = repo.create(new_entry("me", "x", MoodLabel::Sad)).unwrap();

        assert!(repo.delete(&entry.id).unwrap());
        assert!(!repo.delete(&entry.id).unwrap());
        assert_eq!(repo.find(&entry.id).unwrap(), None);
    }

    #[test]
    fn test_delete_by_owner_leaves_others() {
        let (_temp, repo) = initialized_repo();
        repo.create(new_entry("me", "a", MoodLabel::Sad)).unwrap();
        repo.create(new_entry("me", "b", MoodLabel::Sad)).unwrap();
        repo.create(new_entry("you", "c", MoodLabel::Sad)).unwrap();

        let removal = repo.delete_by_owner("me").unwrap();
        assert_eq!(removal.removed, 2);
        assert!(removal.skipped.is_empty());
        assert!(repo.list_by_owner("me").unwrap().is_empty());
        assert_eq!(repo.list_by_owner("you").unwrap().len(), 1);
    }

    #[test]
    fn test_owner_line_reads_damaged_file() {
        assert_eq!(owner_line("owner = \"me\"\nmood = ["), Some("me".to_string()));
        assert_eq!(
            owner_line("id = \"x\"\n  owner = 'you'  \ntitle = \"\"\"\n"),
            Some("you".to_string())
        );
        assert_eq!(owner_line("mood = [\n[[playlist]]\nowner = \"me\""), None);
        assert_eq!(owner_line("owner = [broken"), None);
    }

    #[test]
    fn test_recover_owner_of_damaged_entry() {
        let (temp, repo) = initialized_repo();
        let id = Uuid::new_v4().to_string();
        fs::write(
            temp.path().join(".moodmix/entries").join(format!("{}.toml", id)),
            "owner = \"me\"\nmood = [",
        )
        .unwrap();

        assert!(repo.find(&id).is_err());
        assert_eq!(repo.recover_owner(&id).unwrap(), Some("me".to_string()));
        assert_eq!(repo.recover_owner("missing").unwrap(), None);
    }

    #[test]
    fn test_delete_by_owner_removes_damaged_owned_file() {
        let (temp, repo) = initialized_repo();
        repo.create(new_entry("me", "ok", MoodLabel::Sad)).unwrap();
        let damaged = temp
            .path()
            .join(".moodmix/entries")
            .join(format!("{}.toml", Uuid::new_v4()));
        fs::write(&damaged, "owner = \"me\"\nmood = [").unwrap();

        let removal = repo.delete_by_owner("me").unwrap();

        assert_eq!(removal.removed, 2);
        assert!(removal.skipped.is_empty());
        assert!(!damaged.exists());
    }

    #[test]
    fn test_delete_by_owner_reports_ownerless_files() {
        let (temp, repo) = initialized_repo();
        let entries = temp.path().join(".moodmix/entries");
        fs::write(entries.join("garbled.toml"), "\u{0}\u{1} = =").unwrap();
        fs::write(entries.join("theirs.toml"), "owner = \"you\"\nmood = [").unwrap();

        let removal = repo.delete_by_owner("me").unwrap();

        assert_eq!(removal.removed, 0);
        assert_eq!(removal.skipped, vec!["garbled".to_string()]);
        assert!(entries.join("garbled.toml").exists());
        assert!(entries.join("theirs.toml").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_entries_dir_is_an_error() {
        use std::os::unix::fs::PermissionsExt;

        let (temp, repo) = initialized_repo();
        repo.create(new_entry("me", "ok", MoodLabel::Sad)).unwrap();
        let entries = temp.path().join(".moodmix/entries");
        fs::set_permissions(&entries, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users read through the mode bits
        let blocked = fs::read_dir(&entries).is_err();
        let listed = repo.list_by_owner("me");
        let cleared = repo.delete_by_owner("me");
        fs::set_permissions(&entries, fs::Permissions::from_mode(0o755)).unwrap();

        if blocked {
            assert!(matches!(listed, Err(MoodmixError::Io(_))));
            assert!(matches!(cleared, Err(MoodmixError::Io(_))));
        }
    }

    #[test]
    fn test_write_atomic_replaces_without_leftovers() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("entries").join("a.toml");

        FileSystemRepository::write_atomic(&path, "first").unwrap();
        FileSystemRepository::write_atomic(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        assert!(temp_files(&temp.path().join("entries")).is_empty());
    }

    #[test]
    fn test_write_atomic_removes_temp_file_on_failure() {
        let temp = TempDir::new().unwrap();
        // A non-empty directory in the way makes the rename fail
        let path = temp.path().join("a.toml");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        assert!(FileSystemRepository::write_atomic(&path, "body").is_err());
        assert!(temp_files(temp.path()).is_empty());
        assert!(path.join("keep").exists());
    }

    #[test]
    fn test_save_and_load_config() {
        let (_temp, repo) = initialized_repo();

        let mut config = Config::new();
        config.playlist_length = 8;
        repo.save_config(&config).unwrap();

        assert_eq!(repo.load_config().unwrap().playlist_length, 8);
    }

    #[test]
    fn test_discover_with_moodmix_root_env() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("MOODMIX_ROOT");

        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".moodmix")).unwrap();

        std::env::set_var("MOODMIX_ROOT", temp.path());

        let repo = FileSystemRepository::discover().unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_moodmix_root_not_initialized() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("MOODMIX_ROOT");

        let temp = TempDir::new().unwrap();
        std::env::set_var("MOODMIX_ROOT", temp.path());

        match FileSystemRepository::discover().unwrap_err() {
            MoodmixError::Config(msg) => {
                assert!(msg.contains("no .moodmix directory"));
            }
            _ => panic!("Expected Config error"),
        }
    }
}
