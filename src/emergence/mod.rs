//! Emergence ranking.
//!
//! Ranks artists by how fast they are growing week over week, using weekly
//! snapshots of streams, playlist adds and listeners loaded from a JSON file.

mod loader;
mod report;
mod scoring;

pub use loader::load_artists;
pub use report::format_ranking;
pub use scoring::{calculate_signals, emergence_score, growth_rate, score_artists};

use chrono::NaiveDate;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// One week of metrics for an artist.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyMetrics {
    pub week: NaiveDate,
    pub streams: u64,
    pub playlist_adds: u64,
    pub listeners: u64,
}

/// An artist together with its metric history.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedArtist {
    pub id: String,
    pub name: String,
    pub genre: String,
    #[serde(default)]
    pub weekly_metrics: Vec<WeeklyMetrics>,
}

/// Growth between the two most recent weeks, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Signals {
    pub stream_growth_rate: f64,
    pub playlist_growth_rate: f64,
    pub listener_growth_rate: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredArtist {
    pub artist: TrackedArtist,
    pub signals: Signals,
    pub emergence_score: f64,
}

#[derive(Debug, Error)]
pub enum EmergenceError {
    #[error("Fixture file not found: {0}")]
    FixtureNotFound(PathBuf),

    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON in fixture file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid fixture format: {0}")]
    InvalidFormat(String),
}
