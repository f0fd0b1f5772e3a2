//! Deterministic gradient selection
//!
//! An entry's gradient is never stored. It is recomputed from the entry id
//! with a 32-bit rolling hash, so the same id always lands on the same
//! palette slot in any process.

use crate::domain::MoodLabel;
use crate::error::{MoodmixError, Result};
use std::collections::BTreeMap;
use std::fmt;

/// A visual style descriptor (Tailwind gradient classes)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GradientToken(String);

impl GradientToken {
    pub fn new(token: impl Into<String>) -> Self {
        GradientToken(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GradientToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GradientToken {
    fn from(token: &str) -> Self {
        GradientToken::new(token)
    }
}

/// `hash = unit + ((hash << 5) - hash)` over UTF-16 code units, wrapping at
/// 32 bits.
pub fn id_hash(id: &str) -> i32 {
    id.encode_utf16().fold(0i32, |hash, unit| {
        i32::from(unit).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash))
    })
}

/// `|hash| mod len`, with `|i32::MIN|` taken as 2^31
pub fn palette_index(hash: i32, len: usize) -> usize {
    hash.unsigned_abs() as usize % len
}

/// Per-mood rows of gradient tokens. Rows may differ in length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientPalette {
    rows: BTreeMap<MoodLabel, Vec<GradientToken>>,
}

impl GradientPalette {
    /// Build a palette. Requires a Default row and no empty rows.
    pub fn new(rows: BTreeMap<MoodLabel, Vec<GradientToken>>) -> Result<Self> {
        if !rows.contains_key(&MoodLabel::Default) {
            return Err(MoodmixError::Catalog(
                "palette is missing a Default row".to_string(),
            ));
        }
        if let Some((mood, _)) = rows.iter().find(|(_, tokens)| tokens.is_empty()) {
            return Err(MoodmixError::Catalog(format!(
                "palette row for {} is empty",
                mood
            )));
        }

        Ok(GradientPalette { rows })
    }

    /// The compiled-in palette
    pub fn builtin() -> Self {
        let row = |tokens: &[&str]| -> Vec<GradientToken> {
            tokens.iter().copied().map(GradientToken::from).collect()
        };

        let mut rows = BTreeMap::new();
        rows.insert(MoodLabel::Dreamy, row(DREAMY));
        rows.insert(MoodLabel::Sad, row(SAD));
        rows.insert(MoodLabel::Energetic, row(ENERGETIC));
        rows.insert(MoodLabel::Floating, row(FLOATING));
        rows.insert(MoodLabel::Default, row(DEFAULT));

        GradientPalette { rows }
    }

    /// Row for `mood`, or the Default row
    pub fn row(&self, mood: MoodLabel) -> &[GradientToken] {
        self.rows
            .get(&mood)
            .or_else(|| self.rows.get(&MoodLabel::Default))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Stable gradient for an entity id. An empty id gets the row's first slot.
    pub fn gradient_for(&self, mood: MoodLabel, id: &str) -> &GradientToken {
        let row = self.row(mood);
        let index = if id.is_empty() {
            0
        } else {
            palette_index(id_hash(id), row.len())
        };
        &row[index]
    }
}

impl Default for GradientPalette {
    fn default() -> Self {
        Self::builtin()
    }
}

const DREAMY: &[&str] = &[
    "bg-gradient-to-br from-indigo-500 to-purple-500",
    "bg-gradient-to-br from-purple-500 to-fuchsia-500",
    "bg-gradient-to-br from-fuchsia-500 to-pink-500",
    "bg-gradient-to-br from-pink-500 to-rose-500",
    "bg-gradient-to-br from-purple-900 to-black",
    "bg-gradient-to-tr from-indigo-500 to-rose-500",
];

const SAD: &[&str] = &[
    "bg-gradient-to-br from-slate-500 to-slate-800",
    "bg-gradient-to-br from-blue-800 to-black",
    "bg-gradient-to-br from-sky-500 to-blue-500",
    "bg-gradient-to-br from-blue-600 to-indigo-600",
    "bg-gradient-to-br from-zinc-700 to-zinc-900",
];

const ENERGETIC: &[&str] = &[
    "bg-gradient-to-br from-red-500 to-orange-500",
    "bg-gradient-to-br from-orange-500 to-amber-500",
    "bg-gradient-to-br from-amber-500 to-yellow-500",
    "bg-gradient-to-br from-lime-500 to-green-500",
    "bg-gradient-to-br from-rose-500 to-red-600",
    "bg-gradient-to-br from-pink-500 to-rose-500",
    "bg-gradient-to-br from-fuchsia-500 to-pink-500",
];

const FLOATING: &[&str] = &[
    "bg-gradient-to-br from-emerald-500 to-teal-500",
    "bg-gradient-to-br from-teal-500 to-cyan-500",
    "bg-gradient-to-br from-sky-500 to-blue-500",
    "bg-gradient-to-br from-blue-800 to-black",
];

const DEFAULT: &[&str] = &[
    "bg-gradient-to-br from-red-500 to-orange-500",
    "bg-gradient-to-br from-orange-500 to-amber-500",
    "bg-gradient-to-br from-amber-500 to-yellow-500",
    "bg-gradient-to-br from-lime-500 to-green-500",
    "bg-gradient-to-br from-emerald-500 to-teal-500",
    "bg-gradient-to-br from-teal-500 to-cyan-500",
    "bg-gradient-to-br from-sky-500 to-blue-500",
    "bg-gradient-to-br from-blue-600 to-indigo-600",
    "bg-gradient-to-br from-indigo-500 to-purple-500",
    "bg-gradient-to-br from-purple-500 to-fuchsia-500",
    "bg-gradient-to-br from-fuchsia-500 to-pink-500",
    "bg-gradient-to-br from-pink-500 to-rose-500",
    "bg-gradient-to-br from-rose-500 to-red-600",
    "bg-gradient-to-br from-slate-500 to-slate-800",
    "bg-gradient-to-br from-blue-800 to-black",
    "bg-gradient-to-br from-purple-900 to-black",
];
