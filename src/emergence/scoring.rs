use super::{ScoredArtist, Signals, TrackedArtist, WeeklyMetrics};

/// Signal weights of the emergence score.
const STREAM_GROWTH_WEIGHT: f64 = 0.4;
const PLAYLIST_GROWTH_WEIGHT: f64 = 0.3;
const LISTENER_GROWTH_WEIGHT: f64 = 0.3;

/// Percentage growth from `previous` to `current`.
///
/// Growth from zero counts as 100% when anything happened and 0% otherwise.
pub fn growth_rate(current: u64, previous: u64) -> f64 {
    if previous == 0 {
        return if current > 0 { 100.0 } else { 0.0 };
    }
    (current as f64 - previous as f64) / previous as f64 * 100.0
}

/// Compares the two most recent weeks of an artist's metrics.
///
/// Returns `None` when fewer than two weeks are available.
pub fn calculate_signals(artist: &TrackedArtist) -> Option<Signals> {
    let mut weeks: Vec<&WeeklyMetrics> = artist.weekly_metrics.iter().collect();
    if weeks.len() < 2 {
        return None;
    }
    weeks.sort_by(|a, b| b.week.cmp(&a.week));

    let (current, previous) = (weeks[0], weeks[1]);
    Some(Signals {
        stream_growth_rate: growth_rate(current.streams, previous.streams),
        playlist_growth_rate: growth_rate(current.playlist_adds, previous.playlist_adds),
        listener_growth_rate: growth_rate(current.listeners, previous.listeners),
    })
}

pub fn emergence_score(signals: &Signals) -> f64 {
    signals.stream_growth_rate * STREAM_GROWTH_WEIGHT
        + signals.playlist_growth_rate * PLAYLIST_GROWTH_WEIGHT
        + signals.listener_growth_rate * LISTENER_GROWTH_WEIGHT
}

/// Scores every artist with enough history and ranks them, highest first.
pub fn score_artists(artists: Vec<TrackedArtist>) -> Vec<ScoredArtist> {
    let mut scored: Vec<ScoredArtist> = artists
        .into_iter()
        .filter_map(|artist| {
            let signals = calculate_signals(&artist)?;
            Some(ScoredArtist {
                emergence_score: emergence_score(&signals),
                signals,
                artist,
            })
        })
        .collect();

    scored.sort_by(|a, b| b.emergence_score.total_cmp(&a.emergence_score));
    scored
}
