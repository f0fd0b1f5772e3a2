//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod editor;
pub mod identity;
pub mod repository;

pub use config::Config;
pub use editor::EditorSession;
pub use identity::resolve_owner;
pub use repository::{EntryRepository, FileSystemRepository, JournalRepository, Removal};
