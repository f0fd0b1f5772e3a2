//! moodmix - Terminal mood journal
//!
//! Each entry is classified into a mood from its text, given a shuffled
//! playlist drawn from a mood-indexed catalog, and displayed with a gradient
//! derived deterministically from its id.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MoodmixError;
