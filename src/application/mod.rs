//! Application layer - Use cases and orchestration

pub mod create_entry;
pub mod delete_entry;
pub mod init;
pub mod list_entries;
pub mod manage_config;
pub mod mood_stats;
pub mod show_entry;

pub use create_entry::CreateEntryService;
pub use delete_entry::DeleteEntryService;
pub use list_entries::list_entries;
pub use manage_config::ConfigService;
pub use mood_stats::mood_stats;
pub use show_entry::ShowEntryService;
