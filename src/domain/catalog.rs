//! Mood-indexed track catalog

use crate::domain::MoodLabel;
use crate::error::{MoodmixError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A playable track. `url` points at an externally hosted video/audio page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub url: String,
}

impl Track {
    pub fn new(title: impl Into<String>, artist: impl Into<String>, url: impl Into<String>) -> Self {
        Track {
            title: title.into(),
            artist: artist.into(),
            url: url.into(),
        }
    }
}

/// Mapping from mood to an ordered list of tracks.
///
/// Always holds a `Default` bucket, and every other bucket it holds is
/// non-empty. Lookups for a mood without a bucket fall back to `Default`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodCatalog {
    buckets: BTreeMap<MoodLabel, Vec<Track>>,
}

impl MoodCatalog {
    /// Build a catalog, rejecting maps that break the bucket invariant
    pub fn new(buckets: BTreeMap<MoodLabel, Vec<Track>>) -> Result<Self> {
        if !buckets.contains_key(&MoodLabel::Default) {
            return Err(MoodmixError::Catalog(
                "missing Default bucket".to_string(),
            ));
        }

        if let Some((mood, _)) = buckets
            .iter()
            .find(|(mood, tracks)| **mood != MoodLabel::Default && tracks.is_empty())
        {
            return Err(MoodmixError::Catalog(format!("{} bucket is empty", mood)));
        }

        Ok(MoodCatalog { buckets })
    }

    /// The compiled-in catalog
    pub fn builtin() -> Self {
        let bucket = |rows: &[(&str, &str, &str)]| -> Vec<Track> {
            rows.iter()
                .map(|(title, artist, url)| Track::new(*title, *artist, *url))
                .collect()
        };

        let mut buckets = BTreeMap::new();
        buckets.insert(MoodLabel::Dreamy, bucket(DREAMY));
        buckets.insert(MoodLabel::Sad, bucket(SAD));
        buckets.insert(MoodLabel::Energetic, bucket(ENERGETIC));
        buckets.insert(MoodLabel::Floating, bucket(FLOATING));
        buckets.insert(MoodLabel::Default, bucket(DEFAULT));

        MoodCatalog { buckets }
    }

    /// Tracks stored for exactly this mood
    pub fn get(&self, mood: MoodLabel) -> Option<&[Track]> {
        self.buckets.get(&mood).map(Vec::as_slice)
    }

    /// Tracks for `mood`, or the Default bucket when the mood has none
    pub fn tracks_for(&self, mood: MoodLabel) -> &[Track] {
        match self.get(mood) {
            Some(tracks) => tracks,
            None => {
                tracing::debug!(%mood, "no catalog bucket, using Default");
                self.buckets
                    .get(&MoodLabel::Default)
                    .map(Vec::as_slice)
                    .unwrap_or_default()
            }
        }
    }

    pub fn moods(&self) -> impl Iterator<Item = MoodLabel> + '_ {
        self.buckets.keys().copied()
    }
}

impl Default for MoodCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

const DREAMY: &[(&str, &str, &str)] = &[
    ("Weightless", "Marconi Union", "https://www.youtube.com/watch?v=qYnA9wWFHLI"),
    ("Daydreaming", "Radiohead", "https://www.youtube.com/watch?v=TTAU7lLDZYU"),
    ("Space Song", "Beach House", "https://www.youtube.com/watch?v=RBtlPT23PTM"),
    ("Cherry", "Chromatics", "https://www.youtube.com/watch?v=CjQMZEJbXno"),
    ("Mystery of Love", "Sufjan Stevens", "https://www.youtube.com/watch?v=4WJ30C66rKs"),
    ("Apocalypse", "Cigarettes After Sex", "https://www.youtube.com/watch?v=sElE_BfQ67s"),
    ("Fade Into You", "Mazzy Star", "https://www.youtube.com/watch?v=ImKY6TZEyrI"),
    ("Silver Springs", "Fleetwood Mac", "https://www.youtube.com/watch?v=eDmwFhDxh-Q"),
    ("Dreams", "Fleetwood Mac", "https://www.youtube.com/watch?v=GwZlpPr751A"),
    ("Heroes", "David Bowie", "https://www.youtube.com/watch?v=lXgkuM2NhYI"),
];

const SAD: &[(&str, &str, &str)] = &[
    ("Gymnopédie No.1", "Erik Satie", "https://www.youtube.com/watch?v=S-Xm7s9eGxU"),
    ("Holocene", "Bon Iver", "https://www.youtube.com/watch?v=TWcyIpul8OE"),
    ("Liability", "Lorde", "https://www.youtube.com/watch?v=BtvJaNeELic"),
    ("Skinny Love", "Bon Iver", "https://www.youtube.com/watch?v=ssdgFoHLwnk"),
    ("Fourth of July", "Sufjan Stevens", "https://www.youtube.com/watch?v=JTeKpWp8Psw"),
    ("Fix You", "Coldplay", "https://www.youtube.com/watch?v=k4V3Mo61fJM"),
    (
        "I Will Follow You Into The Dark",
        "Death Cab for Cutie",
        "https://www.youtube.com/watch?v=NDHY1D0tKRA",
    ),
    ("Between The Bars", "Elliott Smith", "https://www.youtube.com/watch?v=hPD-a1FjUtU"),
    ("Exile", "Taylor Swift ft. Bon Iver", "https://www.youtube.com/watch?v=osdoLjUNFnA"),
    (
        "Slow Dancing in a Burning Room",
        "John Mayer",
        "https://www.youtube.com/watch?v=32GZ3suxRn4",
    ),
];

const ENERGETIC: &[(&str, &str, &str)] = &[
    ("Midnight City", "M83", "https://www.youtube.com/watch?v=dX3k_QDnzHE"),
    ("Can't Stop", "Red Hot Chili Peppers", "https://www.youtube.com/watch?v=BfOdWSiyWQA"),
    ("D.A.N.C.E", "Justice", "https://www.youtube.com/watch?v=sy1dYFGkPUE"),
    ("Lisztomania", "Phoenix", "https://www.youtube.com/watch?v=4BJDNw7o6so"),
    ("Electric Feel", "MGMT", "https://www.youtube.com/watch?v=MmZexg8sxyk"),
    ("Tongue Tied", "Grouplove", "https://www.youtube.com/watch?v=1x1wjGKHjBI"),
    ("Walking On A Dream", "Empire of the Sun", "https://www.youtube.com/watch?v=eimgRedLkkU"),
    ("Mr. Brightside", "The Killers", "https://www.youtube.com/watch?v=gGdGFtwCNBE"),
    (
        "Dog Days Are Over",
        "Florence + The Machine",
        "https://www.youtube.com/watch?v=iWOyfLBYtuU",
    ),
    ("Kids", "MGMT", "https://www.youtube.com/watch?v=fe4EK4HSPkI"),
];

const FLOATING: &[(&str, &str, &str)] = &[
    ("Cornfield Chase", "Hans Zimmer", "https://www.youtube.com/watch?v=1V_xRb0x9aw"),
    ("Intro", "The xx", "https://www.youtube.com/watch?v=hhnZkNj7kAo"),
    ("An Ending (Ascent)", "Brian Eno", "https://www.youtube.com/watch?v=aKw5mbcE7EY"),
    ("Xtal", "Aphex Twin", "https://www.youtube.com/watch?v=Nevnq7MvVTI"),
    ("Time", "Hans Zimmer", "https://www.youtube.com/watch?v=RxabLA7UQ9k"),
    (
        "On The Nature of Daylight",
        "Max Richter",
        "https://www.youtube.com/watch?v=rVN1B-tUpgs",
    ),
    ("Avril 14th", "Aphex Twin", "https://www.youtube.com/watch?v=PeLuQ6X2ixI"),
    ("Clair de Lune", "Debussy", "https://www.youtube.com/watch?v=CvFH_6DNRCY"),
    ("Experience", "Ludovico Einaudi", "https://www.youtube.com/watch?v=_VONMkKkdf4"),
    ("Opus", "Eric Prydz", "https://www.youtube.com/watch?v=iRA82xLsb_w"),
];

const DEFAULT: &[(&str, &str, &str)] = &[
    ("Resonance", "Home", "https://www.youtube.com/watch?v=8GW6sLrK40k"),
    ("After Dark", "Mr. Kitty", "https://www.youtube.com/watch?v=s51VEr2Nhss"),
    ("SimpsonWave", "Lofi", "https://www.youtube.com/watch?v=aWIE0PX1uXk"),
    ("Sunset Lover", "Petit Biscuit", "https://www.youtube.com/watch?v=wuCK-7RQMZ0"),
];
