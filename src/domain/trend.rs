//! Mood trend over time

use crate::domain::{JournalEntry, MoodLabel};
use chrono::{DateTime, Local, NaiveDate, Utc};

/// One point of the mood trend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub mood: MoodLabel,
    pub value: u8,
}

/// Build the trend for entries listed newest first; points come out oldest
/// first.
pub fn mood_trend(entries: &[JournalEntry]) -> Vec<TrendPoint> {
    entries
        .iter()
        .rev()
        .map(|entry| TrendPoint {
            date: entry.created_at.with_timezone(&Local).date_naive(),
            created_at: entry.created_at,
            mood: entry.mood,
            value: entry.mood.energy(),
        })
        .collect()
}

/// Axis band for an energy value
pub fn band_label(value: u8) -> &'static str {
    match value {
        0..=25 => "Low",
        26..=50 => "Mellow",
        51..=75 => "Flow",
        _ => "High",
    }
}
