//! Mood labels shared by the classifier, catalog and palette

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Emotional tone of a journal entry
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum MoodLabel {
    Dreamy,
    Sad,
    Energetic,
    Floating,
    /// Fallback bucket for catalog and palette lookups; never produced by
    /// classification.
    #[default]
    Default,
}

impl MoodLabel {
    /// Every label, including the `Default` bucket
    pub const ALL: [MoodLabel; 5] = [
        MoodLabel::Dreamy,
        MoodLabel::Sad,
        MoodLabel::Energetic,
        MoodLabel::Floating,
        MoodLabel::Default,
    ];

    /// Labels the classifier may return
    pub const CLASSIFIABLE: [MoodLabel; 4] = [
        MoodLabel::Dreamy,
        MoodLabel::Sad,
        MoodLabel::Energetic,
        MoodLabel::Floating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodLabel::Dreamy => "Dreamy",
            MoodLabel::Sad => "Sad",
            MoodLabel::Energetic => "Energetic",
            MoodLabel::Floating => "Floating",
            MoodLabel::Default => "Default",
        }
    }

    /// First letter of the label, used as the timeline badge
    pub fn initial(&self) -> char {
        self.as_str().chars().next().unwrap_or('?')
    }

    /// Energy level on a 0-100 scale
    pub fn energy(&self) -> u8 {
        match self {
            MoodLabel::Sad => 20,
            MoodLabel::Dreamy => 50,
            MoodLabel::Floating => 75,
            MoodLabel::Energetic => 100,
            MoodLabel::Default => 50,
        }
    }

    /// Human label for the energy level
    pub fn energy_label(&self) -> &'static str {
        match self {
            MoodLabel::Sad => "Low Energy",
            MoodLabel::Dreamy => "Mellow",
            MoodLabel::Floating => "Flow State",
            MoodLabel::Energetic => "High Energy",
            MoodLabel::Default => self.as_str(),
        }
    }
}

impl fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for MoodLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dreamy" => Ok(MoodLabel::Dreamy),
            "sad" => Ok(MoodLabel::Sad),
            "energetic" => Ok(MoodLabel::Energetic),
            "floating" => Ok(MoodLabel::Floating),
            "default" => Ok(MoodLabel::Default),
            _ => Err(format!(
                "Invalid mood: '{}'. Valid moods are: dreamy, sad, energetic, floating, default",
                s
            )),
        }
    }
}
