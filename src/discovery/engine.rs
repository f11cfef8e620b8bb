//! The discovery pipeline.
//!
//! seed search -> related artists -> follower filter -> score -> sort -> limit

use crate::catalog::{ArtistCatalog, CatalogError};
use crate::foundation::models::{Artist, DiscoveredArtist};
use tracing::{debug, info};

/// Default number of artists returned by a discovery run.
pub const DEFAULT_LIMIT: usize = 10;

/// Default follower threshold when running against the fixture table.
pub const DEFAULT_MAX_FOLLOWERS: u64 = 500_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscoveryParams {
    /// Artists with this many followers or more are not "undiscovered".
    pub max_followers: u64,
    pub limit: usize,
}

impl Default for DiscoveryParams {
    fn default() -> Self {
        Self {
            max_followers: DEFAULT_MAX_FOLLOWERS,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// What a discovery run found, including why it came back empty.
#[derive(Debug, Clone, PartialEq)]
pub enum DiscoveryOutcome {
    SeedNotFound,
    NoRelatedArtists {
        seed: Artist,
    },
    Ranked {
        seed: Artist,
        related_count: usize,
        artists: Vec<DiscoveredArtist>,
    },
}

impl DiscoveryOutcome {
    pub fn artists(&self) -> &[DiscoveredArtist] {
        match self {
            DiscoveryOutcome::Ranked { artists, .. } => artists,
            _ => &[],
        }
    }

    pub fn into_artists(self) -> Vec<DiscoveredArtist> {
        match self {
            DiscoveryOutcome::Ranked { artists, .. } => artists,
            _ => Vec::new(),
        }
    }
}

/// Runs discovery against any [`ArtistCatalog`].
pub struct DiscoveryEngine<C> {
    catalog: C,
}

impl<C: ArtistCatalog> DiscoveryEngine<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Returns the best-ranked undiscovered artists related to `seed_name`.
    ///
    /// An unknown seed or a seed without related artists yields an empty list.
    /// Catalog failures are returned as-is; nothing is retried.
    pub async fn discover(
        &self,
        seed_name: &str,
        params: &DiscoveryParams,
    ) -> Result<Vec<DiscoveredArtist>, CatalogError> {
        Ok(self.explore(seed_name, params).await?.into_artists())
    }

    /// Same as [`discover`](Self::discover), but keeps track of why a run
    /// produced no artists.
    pub async fn explore(
        &self,
        seed_name: &str,
        params: &DiscoveryParams,
    ) -> Result<DiscoveryOutcome, CatalogError> {
        info!(seed = seed_name, "Searching seed artist");
        match self.catalog.search_artist(seed_name).await? {
            Some(seed) => self.explore_from(seed, params).await,
            None => Ok(DiscoveryOutcome::SeedNotFound),
        }
    }

    /// Runs the pipeline for a seed that has already been resolved.
    pub async fn explore_from(
        &self,
        seed: Artist,
        params: &DiscoveryParams,
    ) -> Result<DiscoveryOutcome, CatalogError> {
        let related = self.catalog.related_artists(&seed.id).await?;
        if related.is_empty() {
            return Ok(DiscoveryOutcome::NoRelatedArtists { seed });
        }

        let related_count = related.len();
        let artists = rank(related, params);
        info!(
            seed = %seed.name,
            related_count,
            kept = artists.len(),
            "Ranked related artists"
        );

        Ok(DiscoveryOutcome::Ranked {
            seed,
            related_count,
            artists,
        })
    }
}

/// Filters, scores, sorts and truncates a list of candidates.
///
/// Only candidates with strictly fewer than `max_followers` followers are
/// kept. Sorting is stable, so equal scores keep their catalog order.
pub fn rank(candidates: Vec<Artist>, params: &DiscoveryParams) -> Vec<DiscoveredArtist> {
    let mut discovered: Vec<DiscoveredArtist> = candidates
        .into_iter()
        .filter(|artist| artist.followers < params.max_followers)
        .map(|artist| DiscoveredArtist {
            discovery_score: discovery_score(artist.followers, params.max_followers),
            artist,
        })
        .collect();

    debug!(
        max_followers = params.max_followers,
        kept = discovered.len(),
        "Applied follower threshold"
    );

    discovered.sort_by(|a, b| b.discovery_score.total_cmp(&a.discovery_score));
    discovered.truncate(params.limit);
    discovered
}

/// `100 - followers / max_followers * 100`, rounded to one decimal place
/// with ties going to the even digit (98.25 becomes 98.2).
///
/// Callers only score artists below the threshold, so `max_followers` is
/// never zero here.
pub fn discovery_score(followers: u64, max_followers: u64) -> f64 {
    let score = 100.0 - (followers as f64 / max_followers as f64 * 100.0);
    (score * 10.0).round_ties_even() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FixtureCatalog, MockArtistCatalog};

    fn artist(id: &str, followers: u64) -> Artist {
        Artist {
            id: id.to_string(),
            name: format!("Artist {id}"),
            genres: vec!["indie".to_string()],
            followers,
            popularity: 30,
        }
    }

    fn params(max_followers: u64, limit: usize) -> DiscoveryParams {
        DiscoveryParams {
            max_followers,
            limit,
        }
    }

    fn summary(artists: &[DiscoveredArtist]) -> Vec<(&str, f64)> {
        artists
            .iter()
            .map(|d| (d.artist.name.as_str(), d.discovery_score))
            .collect()
    }

    #[test]
    fn test_discovery_score_exact_values() {
        assert_eq!(discovery_score(0, 500_000), 100.0);
        assert_eq!(discovery_score(250_000, 500_000), 50.0);
        assert_eq!(discovery_score(48_000, 500_000), 90.4);
        assert_eq!(discovery_score(499_999, 500_000), 0.0);
        assert_eq!(discovery_score(1, 3), 66.7);
    }

    #[test]
    fn test_discovery_score_rounds_ties_to_even() {
        assert_eq!(discovery_score(8_750, 500_000), 98.2);
        assert_eq!(discovery_score(43_750, 500_000), 91.2);
        assert_eq!(discovery_score(11_250, 500_000), 97.8);
    }

    #[test]
    fn test_rank_filter_is_strict() {
        let ranked = rank(
            vec![artist("under", 99), artist("equal", 100), artist("over", 101)],
            &params(100, 10),
        );

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].artist.id, "under");
        assert!(ranked.iter().all(|d| d.artist.followers < 100));
    }

    #[test]
    fn test_rank_sorts_descending_and_keeps_ties_in_source_order() {
        let ranked = rank(
            vec![
                artist("a", 300),
                artist("b", 100),
                artist("c", 300),
                artist("d", 0),
                artist("e", 100),
            ],
            &params(1_000, 10),
        );

        let ids: Vec<&str> = ranked.iter().map(|d| d.artist.id.as_str()).collect();
        assert_eq!(ids, vec!["d", "b", "e", "a", "c"]);
        assert!(ranked
            .windows(2)
            .all(|pair| pair[0].discovery_score >= pair[1].discovery_score));
    }

    #[test]
    fn test_rank_limit() {
        let candidates: Vec<Artist> = (0..8).map(|i| artist(&i.to_string(), i * 10)).collect();

        let ranked = rank(candidates.clone(), &params(1_000, 3));
        let ids: Vec<&str> = ranked.iter().map(|d| d.artist.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "1", "2"]);

        assert_eq!(rank(candidates.clone(), &params(1_000, 20)).len(), 8);
        assert!(rank(candidates, &params(1_000, 0)).is_empty());
    }

    #[test]
    fn test_rank_with_zero_threshold_keeps_nothing() {
        assert!(rank(vec![artist("a", 0)], &params(0, 10)).is_empty());
    }

    #[tokio::test]
    async fn test_discover_radiohead_fixture() {
        let engine = DiscoveryEngine::new(FixtureCatalog::new());

        let found = engine
            .discover("Radiohead", &params(500_000, DEFAULT_LIMIT))
            .await
            .unwrap();

        assert_eq!(
            summary(&found),
            vec![
                ("bdrmm", 90.4),
                ("Fazerdaze", 81.6),
                ("Squid", 63.0),
                ("black midi", 52.0),
                ("Black Country, New Road", 38.0),
                ("The Smile", 16.0),
                ("Deerhunter", 9.0),
                ("Daughter", 1.0),
            ]
        );
    }

    #[tokio::test]
    async fn test_discover_is_idempotent_on_fixture() {
        let engine = DiscoveryEngine::new(FixtureCatalog::new());
        let params = DiscoveryParams::default();

        let first = engine.discover("Sigur Ros", &params).await.unwrap();
        let second = engine.discover("Sigur Ros", &params).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(
            summary(&first),
            vec![("amiina", 95.8), ("múm", 80.4), ("Jónsi", 24.0)]
        );
    }

    #[tokio::test]
    async fn test_discover_unknown_seed() {
        let engine = DiscoveryEngine::new(FixtureCatalog::new());

        let outcome = engine
            .explore("Nonexistent Artist", &DiscoveryParams::default())
            .await
            .unwrap();
        assert_eq!(outcome, DiscoveryOutcome::SeedNotFound);
        assert!(outcome.into_artists().is_empty());
    }

    #[tokio::test]
    async fn test_discover_seed_without_related_artists() {
        let engine = DiscoveryEngine::new(FixtureCatalog::new());
        let params = DiscoveryParams::default();

        for seed in ["Boards of Canada", "Aphex Twin"] {
            let outcome = engine.explore(seed, &params).await.unwrap();
            assert!(
                matches!(outcome, DiscoveryOutcome::NoRelatedArtists { .. }),
                "unexpected outcome for {seed}: {outcome:?}"
            );
            assert!(engine.discover(seed, &params).await.unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_discover_all_related_above_threshold() {
        let engine = DiscoveryEngine::new(FixtureCatalog::new());

        let outcome = engine
            .explore("Daft Punk", &DiscoveryParams::default())
            .await
            .unwrap();
        match outcome {
            DiscoveryOutcome::Ranked {
                related_count,
                artists,
                ..
            } => {
                assert_eq!(related_count, 2);
                assert!(artists.is_empty());
            }
            other => panic!("expected a ranked outcome, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_discover_limit_returns_top_three() {
        let engine = DiscoveryEngine::new(FixtureCatalog::new());

        let found = engine
            .discover("Radiohead", &params(500_000, 3))
            .await
            .unwrap();
        assert_eq!(
            summary(&found),
            vec![("bdrmm", 90.4), ("Fazerdaze", 81.6), ("Squid", 63.0)]
        );
    }

    #[tokio::test]
    async fn test_explore_from_resolved_seed() {
        let engine = DiscoveryEngine::new(FixtureCatalog::new());
        let seed = engine
            .catalog()
            .artist_details("4Z8W4fKeB5YxbusRsdQVPb")
            .await
            .unwrap()
            .unwrap();

        let outcome = engine
            .explore_from(seed, &params(500_000, 1))
            .await
            .unwrap();
        assert_eq!(summary(outcome.artists()), vec![("bdrmm", 90.4)]);
    }

    #[tokio::test]
    async fn test_discover_with_mocked_catalog() {
        let mut catalog = MockArtistCatalog::new();
        catalog
            .expect_search_artist()
            .times(1)
            .returning(|_| Ok(Some(artist("seed", 5_000_000))));
        catalog.expect_related_artists().times(1).returning(|_| {
            Ok(vec![
                artist("big", 2_000_000),
                artist("tie-1", 100_000),
                artist("small", 10_000),
                artist("tie-2", 100_000),
            ])
        });

        let engine = DiscoveryEngine::new(catalog);
        let found = engine
            .discover("seed", &params(1_000_000, 10))
            .await
            .unwrap();

        let ids: Vec<(&str, f64)> = found
            .iter()
            .map(|d| (d.artist.id.as_str(), d.discovery_score))
            .collect();
        assert_eq!(ids, vec![("small", 99.0), ("tie-1", 90.0), ("tie-2", 90.0)]);
    }

    #[tokio::test]
    async fn test_discover_skips_related_lookup_for_unknown_seed() {
        let mut catalog = MockArtistCatalog::new();
        catalog.expect_search_artist().returning(|_| Ok(None));
        catalog.expect_related_artists().never();

        let engine = DiscoveryEngine::new(catalog);
        let found = engine
            .discover("nobody", &DiscoveryParams::default())
            .await
            .unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_discover_propagates_catalog_errors() {
        let mut catalog = MockArtistCatalog::new();
        catalog
            .expect_search_artist()
            .returning(|_| Ok(Some(artist("seed", 1))));
        catalog.expect_related_artists().returning(|_| {
            Err(CatalogError::Api {
                status: 429,
                message: "API rate limit exceeded".to_string(),
            })
        });

        let engine = DiscoveryEngine::new(catalog);
        let err = engine
            .discover("seed", &DiscoveryParams::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Api { status: 429, .. }));
    }
}
