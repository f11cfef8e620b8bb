use super::{EmergenceError, TrackedArtist};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Loads tracked artists from a JSON file shaped like `{ "artists": [...] }`.
///
/// # Example
///
/// ```no_run
/// use deepcut::emergence::load_artists;
///
/// let artists = load_artists("fixtures/artists.json").expect("fixture should load");
/// println!("Loaded {} artists", artists.len());
/// ```
pub fn load_artists(path: impl AsRef<Path>) -> Result<Vec<TrackedArtist>, EmergenceError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(EmergenceError::FixtureNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    let mut data: Value = serde_json::from_str(&content)?;

    let artists = match data.get_mut("artists").map(Value::take) {
        Some(artists @ Value::Array(_)) => artists,
        _ => {
            return Err(EmergenceError::InvalidFormat(
                "expected { \"artists\": [...] }".to_string(),
            ))
        }
    };

    let artists: Vec<TrackedArtist> = serde_json::from_value(artists)?;
    debug!(path = %path.display(), count = artists.len(), "Loaded tracked artists");
    Ok(artists)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn fixture_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_artists() {
        let file = fixture_file(
            r#"{
                "artists": [{
                    "id": "a1",
                    "name": "Wet Leg",
                    "genre": "indie rock",
                    "weeklyMetrics": [
                        {"week": "2024-01-01", "streams": 1000, "playlistAdds": 10, "listeners": 500},
                        {"week": "2024-01-08", "streams": 1500, "playlistAdds": 12, "listeners": 650}
                    ]
                }]
            }"#,
        );

        let artists = load_artists(file.path()).unwrap();
        assert_eq!(artists.len(), 1);
        assert_eq!(artists[0].name, "Wet Leg");
        assert_eq!(artists[0].weekly_metrics.len(), 2);
        assert_eq!(artists[0].weekly_metrics[1].playlist_adds, 12);
    }

    #[test]
    fn test_bundled_fixture_ranks() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/artists.json");

        let artists = load_artists(path).unwrap();
        assert_eq!(artists.len(), 5);

        let ranked = crate::emergence::score_artists(artists);
        let names: Vec<&str> = ranked.iter().map(|s| s.artist.name.as_str()).collect();
        assert_eq!(names, vec!["Fazerdaze", "Wet Leg", "bdrmm", "Jónsi"]);
    }

    #[test]
    fn test_load_artists_missing_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("artists.json");

        let err = load_artists(&missing).unwrap_err();
        assert!(matches!(err, EmergenceError::FixtureNotFound(path) if path == missing));
    }

    #[test]
    fn test_load_artists_rejects_wrong_shape() {
        let file = fixture_file(r#"{"artists": {"id": "a1"}}"#);
        assert!(matches!(
            load_artists(file.path()),
            Err(EmergenceError::InvalidFormat(_))
        ));

        let file = fixture_file(r#"[]"#);
        assert!(matches!(
            load_artists(file.path()),
            Err(EmergenceError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_load_artists_invalid_json() {
        let file = fixture_file("{ not json");
        assert!(matches!(
            load_artists(file.path()),
            Err(EmergenceError::Json(_))
        ));
    }
}
