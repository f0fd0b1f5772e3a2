//! Keyword-based mood classification
//!
//! Text is lowercased and checked against an ordered list of keyword groups.
//! The first group with a keyword contained anywhere in the text decides the
//! mood. Matching is plain substring containment, so "strained" lands in the
//! Sad group through "rain". When nothing matches, a mood is drawn uniformly
//! at random from [`MoodLabel::CLASSIFIABLE`].

use crate::domain::MoodLabel;
use crate::error::{MoodmixError, Result};
use rand::Rng;

/// Keyword groups in priority order. Earlier groups win ties.
pub const KEYWORD_GROUPS: [(MoodLabel, &[&str]); 4] = [
    (
        MoodLabel::Sad,
        &[
            "sad", "tired", "rain", "cry", "lonely", "hurt", "pain", "miss", "grief", "lost",
        ],
    ),
    (
        MoodLabel::Energetic,
        &[
            "happy", "excited", "run", "dance", "party", "fun", "great", "amazing", "win",
        ],
    ),
    (
        MoodLabel::Dreamy,
        &[
            "sleep", "dream", "night", "star", "love", "memory", "remember", "soft", "calm",
        ],
    ),
    (
        MoodLabel::Floating,
        &[
            "focus", "work", "study", "space", "think", "mind", "universe", "deep",
        ],
    ),
];

/// A set of keywords that map to one mood
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordGroup {
    pub mood: MoodLabel,
    pub keywords: Vec<String>,
}

impl KeywordGroup {
    pub fn new<I, S>(mood: MoodLabel, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        KeywordGroup {
            mood,
            keywords: keywords
                .into_iter()
                .map(|k| k.into().to_lowercase())
                .collect(),
        }
    }

    fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|k| normalized.contains(k.as_str()))
    }
}

/// Maps free text to a mood
#[derive(Debug, Clone)]
pub struct MoodClassifier {
    groups: Vec<KeywordGroup>,
}

impl MoodClassifier {
    /// Build a classifier from groups listed in priority order.
    ///
    /// Groups may not target the `Default` bucket and keywords may not be
    /// empty (an empty keyword would match every input).
    pub fn new(groups: Vec<KeywordGroup>) -> Result<Self> {
        for group in &groups {
            if group.mood == MoodLabel::Default {
                return Err(MoodmixError::Config(
                    "Keyword groups cannot map to the Default mood".to_string(),
                ));
            }
            if group.keywords.iter().any(|k| k.is_empty()) {
                return Err(MoodmixError::Config(format!(
                    "Empty keyword in {} group",
                    group.mood
                )));
            }
        }

        Ok(MoodClassifier { groups })
    }

    /// Classifier using the built-in keyword groups
    pub fn builtin() -> Self {
        MoodClassifier {
            groups: KEYWORD_GROUPS
                .iter()
                .map(|(mood, keywords)| KeywordGroup::new(*mood, keywords.iter().copied()))
                .collect(),
        }
    }

    pub fn groups(&self) -> &[KeywordGroup] {
        &self.groups
    }

    /// Deterministic part of classification: the first matching group, if any
    pub fn keyword_mood(&self, text: &str) -> Option<MoodLabel> {
        let normalized = text.to_lowercase();
        self.groups
            .iter()
            .find(|group| group.matches(&normalized))
            .map(|group| group.mood)
    }

    /// Classify text using the thread-local random source for the fallback
    pub fn classify(&self, text: &str) -> MoodLabel {
        self.classify_with(text, &mut rand::thread_rng())
    }

    /// Classify text, drawing the fallback mood from `rng`
    pub fn classify_with<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> MoodLabel {
        if let Some(mood) = self.keyword_mood(text) {
            return mood;
        }

        let pool = &MoodLabel::CLASSIFIABLE;
        let mood = pool[rng.gen_range(0..pool.len())];
        tracing::debug!(%mood, "no keyword matched, picked a random mood");
        mood
    }
}

impl Default for MoodClassifier {
    fn default() -> Self {
        Self::builtin()
    }
}
