pub mod catalog;
pub mod configuration;
pub mod discovery;
pub mod emergence;
pub mod foundation;
pub mod startup;

pub use catalog::{ArtistCatalog, CatalogError, FixtureCatalog, RemoteCatalog, SpotifyCredentials};
pub use configuration::*;
pub use discovery::{DiscoveryEngine, DiscoveryOutcome, DiscoveryParams};
pub use foundation::models::{Artist, DiscoveredArtist};
