//! Domain layer - Mood inference and mix generation

pub mod catalog;
pub mod classifier;
pub mod entry;
pub mod gradient;
pub mod mood;
pub mod playlist;
pub mod trend;

pub use catalog::{MoodCatalog, Track};
pub use classifier::{KeywordGroup, MoodClassifier};
pub use entry::{Draft, EntryView, JournalEntry, NewEntry};
pub use gradient::{GradientPalette, GradientToken};
pub use mood::MoodLabel;
pub use playlist::{select_playlist, select_playlist_with, DEFAULT_PLAYLIST_LENGTH};
pub use trend::{band_label, mood_trend, TrendPoint};
