use crate::discovery::DiscoveryOutcome;
use crate::foundation::models::DiscoveredArtist;
use crate::foundation::utils::format_count;
use std::fmt::Write;

/// Number of genres shown per artist.
const SHOWN_GENRES: usize = 3;

/// Renders discovered artists as numbered, human-readable blocks.
///
/// An empty list renders as a "no matches" hint instead of an empty listing.
pub fn format_results(artists: &[DiscoveredArtist]) -> String {
    if artists.is_empty() {
        return "\x1b[33m😕 No undiscovered artists found. Try increasing the max followers threshold.\x1b[0m\n"
            .to_string();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "\x1b[1m\x1b[32m✨ Discovered {} artists:\x1b[0m\n",
        artists.len()
    );
    let _ = writeln!(out, "{}", "-".repeat(80));

    for (rank, found) in artists.iter().enumerate() {
        let artist = &found.artist;
        let genres = artist
            .genres
            .iter()
            .take(SHOWN_GENRES)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        let _ = writeln!(out, "\x1b[1m{}. {}\x1b[0m", rank + 1, artist.name);
        let _ = writeln!(out, "   Followers: {}", format_count(artist.followers));
        let _ = writeln!(out, "   Genres: {}", genres);
        let _ = writeln!(
            out,
            "   Discovery Score: {:.1}/100",
            found.discovery_score
        );
        let _ = writeln!(out, "   Popularity: {}/100", artist.popularity);
        let _ = writeln!(out);
    }

    out
}

/// Renders the progress notes for a finished run: what the seed resolved to
/// and how many related artists were considered.
pub fn format_outcome_summary(seed_query: &str, outcome: &DiscoveryOutcome) -> String {
    match outcome {
        DiscoveryOutcome::SeedNotFound => {
            format!("\x1b[31m❌ Could not find artist: {seed_query}\x1b[0m\n")
        }
        DiscoveryOutcome::NoRelatedArtists { seed } => format!(
            "\x1b[32m✓ Found: {} ({} followers)\x1b[0m\n\x1b[31m❌ No related artists found\x1b[0m\n",
            seed.name,
            format_count(seed.followers)
        ),
        DiscoveryOutcome::Ranked {
            seed,
            related_count,
            ..
        } => format!(
            "\x1b[32m✓ Found: {} ({} followers)\x1b[0m\n\x1b[32m✓ Found {} related artists\x1b[0m\n",
            seed.name,
            format_count(seed.followers),
            related_count
        ),
    }
}
