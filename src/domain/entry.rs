//! Journal entry lifecycle
//!
//! `Draft` (being written) becomes a `NewEntry` once its mood and playlist are
//! generated, and a `JournalEntry` once the store assigns it an id. Mood and
//! playlist are fixed from then on. Viewing an entry only derives its
//! gradient; it never re-runs classification or selection.

use crate::domain::{
    playlist, GradientPalette, GradientToken, MoodCatalog, MoodClassifier, MoodLabel, Track,
};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Unsaved entry text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub content: String,
}

impl Draft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Draft {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Text fed to the classifier: title and body joined by a space
    pub fn text(&self) -> String {
        format!("{} {}", self.title, self.content)
    }

    /// Generate mood and playlist for this draft
    pub fn compose<R: Rng + ?Sized>(
        self,
        owner: &str,
        classifier: &MoodClassifier,
        catalog: &MoodCatalog,
        playlist_length: usize,
        rng: &mut R,
    ) -> NewEntry {
        let mood = classifier.classify_with(&self.text(), rng);
        let playlist = playlist::select_playlist_with(mood, catalog, playlist_length, rng);

        NewEntry {
            owner: owner.to_string(),
            title: self.title,
            content: self.content,
            mood,
            playlist,
        }
    }
}

/// Entry with its generated mix, not yet stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub owner: String,
    pub title: String,
    pub content: String,
    pub mood: MoodLabel,
    pub playlist: Vec<Track>,
}

/// Stored entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub owner: String,
    pub title: String,
    pub content: String,
    pub mood: MoodLabel,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub playlist: Vec<Track>,
}

impl JournalEntry {
    pub fn from_new(entry: NewEntry, id: String, created_at: DateTime<Utc>) -> Self {
        JournalEntry {
            id,
            owner: entry.owner,
            title: entry.title,
            content: entry.content,
            mood: entry.mood,
            created_at,
            playlist: entry.playlist,
        }
    }

    /// Derive the display form of this entry
    pub fn view(&self, palette: &GradientPalette) -> EntryView<'_> {
        EntryView {
            entry: self,
            gradient: palette.gradient_for(self.mood, &self.id).clone(),
        }
    }
}

/// An entry as displayed, with its derived gradient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView<'a> {
    pub entry: &'a JournalEntry,
    pub gradient: GradientToken,
}
