//! Artist catalogs.
//!
//! The discovery pipeline only needs three lookups, captured by [`ArtistCatalog`].
//! Two catalogs implement it: [`RemoteCatalog`] talks to the Spotify Web API and
//! [`FixtureCatalog`] answers from a small embedded table, which makes the tool
//! usable (and testable) without credentials.

mod catalog_error;
mod fixture;
mod fixture_data;
mod remote;

pub use catalog_error::CatalogError;
pub use fixture::FixtureCatalog;
pub use remote::{RemoteCatalog, SpotifyCredentials, DEFAULT_API_BASE_URL, DEFAULT_AUTH_URL};

use crate::foundation::models::Artist;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// Source of artist data for a discovery run.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ArtistCatalog: Send + Sync {
    /// Finds the best match for a free-text artist name.
    async fn search_artist(&self, name: &str) -> Result<Option<Artist>, CatalogError>;

    /// Lists artists related to the artist with the given id, in catalog order.
    async fn related_artists(&self, id: &str) -> Result<Vec<Artist>, CatalogError>;

    /// Looks an artist up by id.
    async fn artist_details(&self, id: &str) -> Result<Option<Artist>, CatalogError>;
}
