mod artist;

pub use artist::{Artist, DiscoveredArtist};
