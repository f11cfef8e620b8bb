use std::hash::{Hash, Hasher};

/// An artist as returned by a catalog lookup.
///
/// Two artists are the same artist when their `id` matches, even if the
/// remaining fields disagree (e.g. follower counts fetched at different times).
#[derive(Debug, Clone)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub genres: Vec<String>,
    pub followers: u64,
    pub popularity: u8,
}

impl PartialEq for Artist {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Artist {}

impl Hash for Artist {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// An artist that passed the follower threshold of a discovery run,
/// together with the score it was ranked by.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveredArtist {
    pub artist: Artist,
    pub discovery_score: f64,
}
