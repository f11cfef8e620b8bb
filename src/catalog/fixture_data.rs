//! Embedded artist table used when no Spotify credentials are around.
//!
//! Follower counts are synthetic and kept well below real-world numbers,
//! which is why fixture mode runs with a lower follower threshold.

use crate::foundation::models::Artist;

pub(super) struct FixtureArtist {
    pub key: &'static str,
    pub id: &'static str,
    pub name: &'static str,
    pub genres: &'static [&'static str],
    pub followers: u64,
    pub popularity: u8,
}

impl FixtureArtist {
    pub fn to_artist(&self) -> Artist {
        Artist {
            id: self.id.to_string(),
            name: self.name.to_string(),
            genres: self.genres.iter().map(|g| g.to_string()).collect(),
            followers: self.followers,
            popularity: self.popularity,
        }
    }
}

pub(super) static ARTISTS: &[FixtureArtist] = &[
    FixtureArtist {
        key: "radiohead",
        id: "4Z8W4fKeB5YxbusRsdQVPb",
        name: "Radiohead",
        genres: &[
            "alternative rock",
            "art rock",
            "melancholia",
            "oxford indie",
            "permanent wave",
            "rock",
        ],
        followers: 8_540_000,
        popularity: 82,
    },
    FixtureArtist {
        key: "thom_yorke",
        id: "4CvTDPKA6W06DRfBnZKrau",
        name: "Thom Yorke",
        genres: &["art rock", "electronica", "oxford indie"],
        followers: 1_240_000,
        popularity: 63,
    },
    FixtureArtist {
        key: "the_smile",
        id: "1P2Rk9xQs7bLmW3tVn5yHd",
        name: "The Smile",
        genres: &["art rock", "oxford indie"],
        followers: 420_000,
        popularity: 58,
    },
    FixtureArtist {
        key: "portishead",
        id: "6liAMWkVf5LH7YR9yfFy1Y",
        name: "Portishead",
        genres: &["trip hop", "electronica", "art rock"],
        followers: 2_160_000,
        popularity: 66,
    },
    FixtureArtist {
        key: "black_country_new_road",
        id: "3DqEo9XmRz2cTb7nVfK1pL",
        name: "Black Country, New Road",
        genres: &["art rock", "experimental rock", "windsor indie"],
        followers: 310_000,
        popularity: 52,
    },
    FixtureArtist {
        key: "squid",
        id: "5uTk8qLr2WnXe9PbYc3mJa",
        name: "Squid",
        genres: &["art rock", "brighton indie", "post-punk"],
        followers: 185_000,
        popularity: 47,
    },
    FixtureArtist {
        key: "jockstrap",
        id: "7hVg2KcPq9sLm4TxWb6nRe",
        name: "Jockstrap",
        genres: &["art pop", "experimental pop"],
        followers: 500_000,
        popularity: 50,
    },
    FixtureArtist {
        key: "black_midi",
        id: "2mNp7RsQt4VxYb8KcLd3Fe",
        name: "black midi",
        genres: &["art rock", "experimental rock", "math rock"],
        followers: 240_000,
        popularity: 49,
    },
    FixtureArtist {
        key: "daughter",
        id: "4Jk2LmNpQr6StVx8YzAb1C",
        name: "Daughter",
        genres: &["indie folk", "dream pop", "art rock"],
        followers: 495_000,
        popularity: 57,
    },
    FixtureArtist {
        key: "bdrmm",
        id: "8aBcDeFgHiJkLmNoPqRsTu",
        name: "bdrmm",
        genres: &["shoegaze", "dream pop", "hull indie"],
        followers: 48_000,
        popularity: 38,
    },
    FixtureArtist {
        key: "deerhunter",
        id: "0qRsTuVwXyZaBcDeFgHiJk",
        name: "Deerhunter",
        genres: &["art rock", "noise pop", "shoegaze"],
        followers: 455_000,
        popularity: 51,
    },
    FixtureArtist {
        key: "fazerdaze",
        id: "9LmNoPqRsTuVwXyZaBcDeF",
        name: "Fazerdaze",
        genres: &["dream pop", "kiwi rock", "bedroom pop"],
        followers: 92_000,
        popularity: 41,
    },
    FixtureArtist {
        key: "sigur_ros",
        id: "6UUrUCIZtQeOf8tC0WuzRy",
        name: "Sigur Rós",
        genres: &["icelandic post-rock", "post-rock", "ambient"],
        followers: 1_720_000,
        popularity: 60,
    },
    FixtureArtist {
        key: "mum",
        id: "3xYzAbCdEfGhIjKlMnOpQr",
        name: "múm",
        genres: &["icelandic indie", "folktronica", "glitch"],
        followers: 98_000,
        popularity: 36,
    },
    FixtureArtist {
        key: "amiina",
        id: "1sTuVwXyZaBcDeFgHiJkLm",
        name: "amiina",
        genres: &["icelandic indie", "post-rock", "chamber pop"],
        followers: 21_000,
        popularity: 29,
    },
    FixtureArtist {
        key: "jonsi",
        id: "5nOpQrStUvWxYzAbCdEfGh",
        name: "Jónsi",
        genres: &["icelandic post-rock", "ambient", "chamber pop"],
        followers: 380_000,
        popularity: 48,
    },
    FixtureArtist {
        key: "explosions_in_the_sky",
        id: "1ZwdS5xdxEREPySFridCfh",
        name: "Explosions In The Sky",
        genres: &["post-rock", "instrumental rock", "austindie"],
        followers: 1_100_000,
        popularity: 55,
    },
    FixtureArtist {
        key: "boards_of_canada",
        id: "2VAvhf61GgLYmC6C8anyX1",
        name: "Boards of Canada",
        genres: &["ambient", "electronica", "idm"],
        followers: 1_050_000,
        popularity: 58,
    },
    FixtureArtist {
        key: "aphex_twin",
        id: "6kBDZFXuLrZgHnvmPu9NsG",
        name: "Aphex Twin",
        genres: &["ambient", "electronica", "idm"],
        followers: 1_900_000,
        popularity: 63,
    },
    FixtureArtist {
        key: "daft_punk",
        id: "4tZwfgrHOc3mvqYlEYSvVi",
        name: "Daft Punk",
        genres: &["electro", "filter house", "french house"],
        followers: 9_800_000,
        popularity: 79,
    },
    FixtureArtist {
        key: "justice",
        id: "1gR0gsQYfi6joyO1dlp76N",
        name: "Justice",
        genres: &["electro", "filter house", "french house"],
        followers: 1_600_000,
        popularity: 65,
    },
    FixtureArtist {
        key: "air",
        id: "6fOMl44jA4Sp5b9PpYCkzz",
        name: "Air",
        genres: &["downtempo", "french indie pop", "trip hop"],
        followers: 1_050_000,
        popularity: 60,
    },
];

/// Related artists per fixture key. Keys that are missing from [`ARTISTS`]
/// are tolerated and skipped at lookup time.
pub(super) static RELATED_ARTISTS: &[(&str, &[&str])] = &[
    (
        "radiohead",
        &[
            "thom_yorke",
            "the_smile",
            "portishead",
            "black_country_new_road",
            "squid",
            "jockstrap",
            "atoms_for_peace",
            "black_midi",
            "daughter",
            "bdrmm",
            "deerhunter",
            "fazerdaze",
        ],
    ),
    (
        "sigur_ros",
        &["mum", "amiina", "jonsi", "explosions_in_the_sky"],
    ),
    ("aphex_twin", &[]),
    ("daft_punk", &["justice", "air"]),
];
