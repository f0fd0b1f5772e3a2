//! Playlist selection

use crate::domain::{MoodCatalog, MoodLabel, Track};
use rand::seq::SliceRandom;
use rand::Rng;

/// Number of tracks in a generated mix unless configured otherwise
pub const DEFAULT_PLAYLIST_LENGTH: usize = 5;

/// Pick up to `n` tracks for `mood` in random order.
///
/// Shuffles a copy of the mood's bucket (or the Default bucket) and keeps the
/// first `n`. The catalog itself is left untouched.
pub fn select_playlist(mood: MoodLabel, catalog: &MoodCatalog, n: usize) -> Vec<Track> {
    select_playlist_with(mood, catalog, n, &mut rand::thread_rng())
}

/// Same as [`select_playlist`], ordering with the given random source
pub fn select_playlist_with<R: Rng + ?Sized>(
    mood: MoodLabel,
    catalog: &MoodCatalog,
    n: usize,
    rng: &mut R,
) -> Vec<Track> {
    let mut tracks = catalog.tracks_for(mood).to_vec();
    tracks.shuffle(rng);
    tracks.truncate(n);
    tracks
}
