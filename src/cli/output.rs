//! Output formatting utilities

use crate::domain::{band_label, EntryView, GradientPalette, JournalEntry, TrendPoint};
use chrono::Local;

fn display_title(title: &str) -> &str {
    if title.trim().is_empty() {
        "(untitled)"
    } else {
        title
    }
}

/// Format the playlist and gradient of an entry
pub fn format_entry(view: &EntryView<'_>) -> String {
    let entry = view.entry;
    let mut output = String::new();

    output.push_str(&format!("{}\n", display_title(&entry.title)));
    output.push_str(&format!(
        "{}\n",
        entry
            .created_at
            .with_timezone(&Local)
            .format("%B %d, %Y %H:%M")
    ));
    output.push_str(&format!(
        "Mood: {} ({})\n",
        entry.mood,
        entry.mood.energy_label()
    ));
    output.push_str(&format!("Gradient: {}\n", view.gradient));
    output.push_str(&format!("Id: {}\n", entry.id));

    if entry.playlist.is_empty() {
        output.push_str("\nNo tracks\n");
        return output;
    }

    output.push_str("\nPlaylist:\n");
    for (i, track) in entry.playlist.iter().enumerate() {
        output.push_str(&format!(
            "{:>3}. {} - {}\n     {}\n",
            i + 1,
            track.title,
            track.artist,
            track.url
        ));
    }

    output
}

/// Format the timeline of entries, one per line
pub fn format_timeline(entries: &[JournalEntry], palette: &GradientPalette) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{}  [{}]  {}  {}  ({})\n",
            entry.created_at.with_timezone(&Local).format("%d-%m-%Y"),
            entry.mood.initial(),
            entry.id,
            display_title(&entry.title),
            palette.gradient_for(entry.mood, &entry.id)
        ));
    }
    output
}

/// Format the mood trend, oldest first
pub fn format_trend(points: &[TrendPoint]) -> String {
    if points.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for point in points {
        output.push_str(&format!(
            "{}  {:<9} {:>3}  {:<6} {}\n",
            point.date.format("%b %d"),
            point.mood,
            point.value,
            band_label(point.value),
            point.mood.energy_label()
        ));
    }
    output
}
