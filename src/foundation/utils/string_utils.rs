use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

/// Folds text for loose, case-insensitive matching.
///
/// The input is decomposed (NFD), combining marks are dropped and the result
/// is lowercased, so "Sigur Rós" and "sigur ros" fold to the same string.
///
/// # Examples
///
/// ```
/// use deepcut::foundation::utils::fold_text;
///
/// assert_eq!(fold_text("Sigur Rós"), "sigur ros");
/// ```
pub fn fold_text(input: &str) -> String {
    input
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Turns a free-text artist query into the shape of a fixture key.
///
/// # Examples
///
/// ```
/// use deepcut::foundation::utils::to_fixture_key;
///
/// assert_eq!(to_fixture_key("Black Country New Road"), "black_country_new_road");
/// ```
pub fn to_fixture_key(query: &str) -> String {
    fold_text(query).replace(' ', "_")
}

/// Formats a count with `,` as the thousands separator.
///
/// # Examples
///
/// ```
/// use deepcut::foundation::utils::format_count;
///
/// assert_eq!(format_count(8_500_000), "8,500,000");
/// assert_eq!(format_count(999), "999");
/// ```
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Pads (or truncates) `text` to exactly `width` user-perceived characters.
pub fn pad_graphemes(text: &str, width: usize) -> String {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    if graphemes.len() >= width {
        return graphemes[..width].concat();
    }
    let mut out = text.to_string();
    out.push_str(&" ".repeat(width - graphemes.len()));
    out
}

/// Extracts a Spotify artist id from an `spotify:artist:<id>` URI or an
/// `open.spotify.com/artist/<id>` URL. Plain names yield `None`.
pub fn parse_artist_reference(input: &str) -> Option<String> {
    let re = Regex::new(r"^(?:spotify:artist:|https?://open\.spotify\.com/(?:intl-[a-z]+/)?artist/)([A-Za-z0-9]{22})(?:[?#].*)?$")
        .ok()?;
    re.captures(input.trim())
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
}
