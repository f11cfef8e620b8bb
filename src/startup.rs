//! Glue between the command line and the library.
//!
//! Picks the artist source, builds the catalog, runs discovery and prints
//! the results. The engine itself only ever sees a catalog and a set of
//! [`DiscoveryParams`].

use crate::catalog::{ArtistCatalog, CatalogError, FixtureCatalog, RemoteCatalog};
use crate::configuration::{
    credentials_in_environment, get_configuration, ConfigFolder, Settings, SourceMode,
};
use crate::discovery::{
    format_outcome_summary, format_results, DiscoveryEngine, DiscoveryOutcome, DiscoveryParams,
};
use crate::emergence;
use crate::foundation::utils::{format_count, parse_artist_reference};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

/// What the user asked for on the command line.
#[derive(Debug, Clone, Default)]
pub struct DiscoverRequest {
    pub seed: String,
    pub force_remote: bool,
    pub max_followers: Option<u64>,
    pub limit: Option<usize>,
}

/// Loads the settings, falling back to `~/.deepcut/config.yaml` when present.
pub fn load_settings() -> Result<Settings> {
    let cfg_folder = ConfigFolder::new();
    let cfg_file = cfg_folder.as_ref().map(|folder| folder.config_file.as_path());
    if let Some(file) = cfg_file.filter(|file| file.exists()) {
        info!("Loading configuration from {}", file.display());
    }
    get_configuration(cfg_file).context("Unable to load configuration")
}

/// Runs one discovery and prints the outcome.
pub async fn run(request: DiscoverRequest) -> Result<()> {
    let settings = load_settings()?;
    let mode = SourceMode::select(request.force_remote, credentials_in_environment());

    let mut params = settings.discovery_params(mode);
    if let Some(max_followers) = request.max_followers {
        params.max_followers = max_followers;
    }
    if let Some(limit) = request.limit {
        params.limit = limit;
    }

    println!("\x1b[1m\x1b[34mMode: {}\x1b[0m\n", mode.label());

    if mode.use_remote_source() {
        let catalog = RemoteCatalog::new(&settings.spotify)?;
        run_discovery(DiscoveryEngine::new(catalog), &request.seed, &params, true).await
    } else {
        let engine = DiscoveryEngine::new(FixtureCatalog::new());
        run_discovery(engine, &request.seed, &params, false).await
    }
}

async fn run_discovery<C: ArtistCatalog>(
    engine: DiscoveryEngine<C>,
    seed: &str,
    params: &DiscoveryParams,
    show_spinner: bool,
) -> Result<()> {
    println!("🔍 Searching for '{}'...", seed);
    println!(
        "🔎 Looking for related artists with < {} followers...",
        format_count(params.max_followers)
    );

    let spinner = show_spinner.then(|| create_spinner("Querying Spotify..."));
    let outcome = explore(&engine, seed, params).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let outcome = outcome.with_context(|| format!("Discovery for '{}' failed", seed))?;

    print!("{}", format_outcome_summary(seed, &outcome));
    if !matches!(outcome, DiscoveryOutcome::SeedNotFound) {
        println!();
        print!("{}", format_results(outcome.artists()));
    }
    Ok(())
}

/// Resolves Spotify artist URIs/URLs by id and plain names by search.
async fn explore<C: ArtistCatalog>(
    engine: &DiscoveryEngine<C>,
    seed: &str,
    params: &DiscoveryParams,
) -> Result<DiscoveryOutcome, CatalogError> {
    let Some(id) = parse_artist_reference(seed) else {
        return engine.explore(seed, params).await;
    };

    info!(id = %id, "Resolving seed artist by id");
    match engine.catalog().artist_details(&id).await? {
        Some(artist) => engine.explore_from(artist, params).await,
        None => {
            warn!(id = %id, "No artist with this id");
            Ok(DiscoveryOutcome::SeedNotFound)
        }
    }
}

/// Ranks the artists of a weekly-metrics fixture by emergence score.
pub fn run_emergence(fixture: &Path) -> Result<()> {
    println!("\x1b[1m\x1b[34m🎵 Emerging Artist Discovery\x1b[0m\n");

    let artists = emergence::load_artists(fixture)
        .with_context(|| format!("Failed to load {}", fixture.display()))?;
    println!("Loaded {} artists\n", artists.len());

    let ranked = emergence::score_artists(artists);
    println!("📊 Ranked Emerging Artists:\n");
    print!("{}", emergence::format_ranking(&ranked));
    println!("\n\x1b[32m✅ Analysis complete\x1b[0m");
    Ok(())
}

fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
