use super::fixture_data::{FixtureArtist, ARTISTS, RELATED_ARTISTS};
use super::{ArtistCatalog, CatalogError};
use crate::foundation::models::Artist;
use crate::foundation::utils::{fold_text, to_fixture_key};
use async_trait::async_trait;
use tracing::debug;

/// Catalog backed by the embedded fixture table.
///
/// Lookups never fail and are fully deterministic: the same query always
/// yields the same artists in the same order.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCatalog;

impl FixtureCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Returns the first row, in table order, whose key or folded name
    /// contains the normalized query.
    fn find_by_name(name: &str) -> Option<&'static FixtureArtist> {
        let query = to_fixture_key(name);
        ARTISTS
            .iter()
            .find(|row| row.key.contains(&query) || fold_text(row.name).contains(&query))
    }

    fn find_by_id(id: &str) -> Option<&'static FixtureArtist> {
        ARTISTS.iter().find(|row| row.id == id)
    }

    fn find_by_key(key: &str) -> Option<&'static FixtureArtist> {
        ARTISTS.iter().find(|row| row.key == key)
    }
}

#[async_trait]
impl ArtistCatalog for FixtureCatalog {
    async fn search_artist(&self, name: &str) -> Result<Option<Artist>, CatalogError> {
        let found = Self::find_by_name(name);
        debug!(query = name, found = found.is_some(), "fixture search");
        Ok(found.map(FixtureArtist::to_artist))
    }

    async fn related_artists(&self, id: &str) -> Result<Vec<Artist>, CatalogError> {
        let Some(seed) = Self::find_by_id(id) else {
            return Ok(Vec::new());
        };

        let Some((_, related_keys)) = RELATED_ARTISTS.iter().find(|(key, _)| *key == seed.key)
        else {
            return Ok(Vec::new());
        };

        let related: Vec<Artist> = related_keys
            .iter()
            .filter_map(|key| Self::find_by_key(key))
            .map(FixtureArtist::to_artist)
            .collect();

        debug!(seed = seed.key, count = related.len(), "fixture related artists");
        Ok(related)
    }

    async fn artist_details(&self, id: &str) -> Result<Option<Artist>, CatalogError> {
        Ok(Self::find_by_id(id).map(FixtureArtist::to_artist))
    }
}
