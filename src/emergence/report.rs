use super::ScoredArtist;
use crate::foundation::utils::pad_graphemes;
use std::fmt::Write;

const NAME_WIDTH: usize = 19;
const GENRE_WIDTH: usize = 14;

/// Renders ranked artists as a fixed-width table.
pub fn format_ranking(ranked: &[ScoredArtist]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Rank | Artist Name         | Genre          | Emergence Score | Stream Growth | Playlist Growth | Listener Growth"
    );
    let _ = writeln!(
        out,
        "-----|---------------------|----------------|-----------------|---------------|-----------------|----------------"
    );

    for (index, scored) in ranked.iter().enumerate() {
        let signals = &scored.signals;
        let _ = writeln!(
            out,
            "{:>4} | {} | {} | {:>15.2} | {:>12.1}% | {:>14.1}% | {:>14.1}%",
            index + 1,
            pad_graphemes(&scored.artist.name, NAME_WIDTH),
            pad_graphemes(&scored.artist.genre, GENRE_WIDTH),
            scored.emergence_score,
            signals.stream_growth_rate,
            signals.playlist_growth_rate,
            signals.listener_growth_rate,
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emergence::{Signals, TrackedArtist};

    #[test]
    fn test_format_ranking_rows() {
        let ranked = vec![ScoredArtist {
            artist: TrackedArtist {
                id: "a1".to_string(),
                name: "Wet Leg".to_string(),
                genre: "indie rock".to_string(),
                weekly_metrics: vec![],
            },
            signals: Signals {
                stream_growth_rate: 50.0,
                playlist_growth_rate: 20.0,
                listener_growth_rate: -5.26,
            },
            emergence_score: 24.5,
        }];

        let output = format_ranking(&ranked);
        let row = output.lines().nth(2).unwrap();
        assert!(row.starts_with("   1 | Wet Leg             | indie rock     |"));
        assert!(row.contains("          24.50 |"));
        assert!(row.contains("50.0%"));
        assert!(row.contains("20.0%"));
        assert!(row.ends_with(&format!("| {}-5.3%", " ".repeat(10))));
    }

    #[test]
    fn test_format_ranking_empty_has_header_only() {
        assert_eq!(format_ranking(&[]).lines().count(), 2);
    }
}
