//! Spotify Web API catalog.
//!
//! Spotify only serves the related-artists endpoint to apps with extended
//! quota, so related artists are approximated: the seed's genre is used as a
//! search term and the results are narrowed to artists sharing a genre with
//! the seed.

use super::{ArtistCatalog, CatalogError};
use crate::foundation::models::Artist;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, info};

pub const DEFAULT_API_BASE_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/api/token";

/// Number of candidates requested by the genre search.
const RELATED_SEARCH_LIMIT: u32 = 50;

/// Credentials and endpoints for the Spotify client-credentials flow.
#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyCredentials {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_auth_url")]
    pub auth_url: String,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_auth_url() -> String {
    DEFAULT_AUTH_URL.to_string()
}

impl SpotifyCredentials {
    pub fn new(client_id: &str, client_secret: &str) -> Self {
        Self {
            client_id: Some(client_id.to_string()),
            client_secret: Some(client_secret.to_string()),
            api_base_url: default_api_base_url(),
            auth_url: default_auth_url(),
        }
    }
}

impl Default for SpotifyCredentials {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            api_base_url: default_api_base_url(),
            auth_url: default_auth_url(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    artists: Paging<SpotifyArtist>,
}

#[derive(Debug, Deserialize)]
struct Paging<T> {
    items: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct SpotifyArtist {
    id: String,
    name: String,
    #[serde(default)]
    genres: Vec<String>,
    #[serde(default)]
    followers: Followers,
    #[serde(default)]
    popularity: u8,
}

#[derive(Debug, Default, Deserialize)]
struct Followers {
    total: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

/// Spotify reports API errors as `{"error": {"status", "message"}}`, but the
/// token endpoint uses the OAuth shape `{"error", "error_description"}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorBody {
    Api { message: String },
    OAuth(String),
}

impl From<SpotifyArtist> for Artist {
    fn from(artist: SpotifyArtist) -> Self {
        Artist {
            id: artist.id,
            name: artist.name,
            genres: artist.genres,
            followers: artist.followers.total.unwrap_or(0),
            popularity: artist.popularity.min(100),
        }
    }
}

/// Catalog backed by the Spotify Web API.
pub struct RemoteCatalog {
    client: Client,
    client_id: String,
    client_secret: String,
    api_base_url: String,
    auth_url: String,
    token: OnceCell<String>,
}

impl RemoteCatalog {
    /// Builds a catalog from the given credentials.
    ///
    /// Fails with [`CatalogError::Configuration`] when the client id or secret
    /// is missing. No request is sent until the first lookup.
    pub fn new(credentials: &SpotifyCredentials) -> Result<Self, CatalogError> {
        let (Some(client_id), Some(client_secret)) = (
            credentials.client_id.as_deref().map(str::trim),
            credentials.client_secret.as_deref().map(str::trim),
        ) else {
            return Err(missing_credentials());
        };
        if client_id.is_empty() || client_secret.is_empty() {
            return Err(missing_credentials());
        }

        let client = Client::builder()
            .user_agent(concat!("deepcut/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            api_base_url: credentials.api_base_url.trim_end_matches('/').to_string(),
            auth_url: credentials.auth_url.clone(),
            token: OnceCell::new(),
        })
    }

    /// Returns the access token, requesting one on first use.
    async fn access_token(&self) -> Result<&str, CatalogError> {
        let token = self
            .token
            .get_or_try_init(|| async {
                info!("Requesting Spotify access token");
                let response = self
                    .client
                    .post(&self.auth_url)
                    .basic_auth(&self.client_id, Some(&self.client_secret))
                    .form(&[("grant_type", "client_credentials")])
                    .send()
                    .await?;
                let token: TokenResponse = parse_json(check_status(response).await?).await?;
                Ok::<_, CatalogError>(token.access_token)
            })
            .await?;
        Ok(token.as_str())
    }

    async fn get(&self, path: &str) -> Result<RequestBuilder, CatalogError> {
        let token = self.access_token().await?;
        let url = format!("{}/{}", self.api_base_url, path.trim_start_matches('/'));
        Ok(self.client.get(url).bearer_auth(token))
    }

    async fn search(&self, query: &str, limit: u32) -> Result<Vec<SpotifyArtist>, CatalogError> {
        debug!(query, limit, "Spotify artist search");
        let limit = limit.to_string();
        let response = self
            .get("search")
            .await?
            .query(&[("q", query), ("type", "artist"), ("limit", limit.as_str())])
            .send()
            .await?;

        let body: SearchResponse = parse_json(check_status(response).await?).await?;
        Ok(body.artists.items)
    }
}

fn missing_credentials() -> CatalogError {
    CatalogError::Configuration(
        "missing Spotify credentials, please set SPOTIFY_CLIENT_ID and SPOTIFY_CLIENT_SECRET"
            .to_string(),
    )
}

async fn check_status(response: Response) -> Result<Response, CatalogError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(CatalogError::Api {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, CatalogError> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| CatalogError::Parse(e.to_string()))
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope {
            error: ErrorBody::Api { message },
        }) => message,
        Ok(ErrorEnvelope {
            error: ErrorBody::OAuth(code),
        }) => code,
        Err(_) if body.is_empty() => "Unknown error".to_string(),
        Err(_) => body.to_string(),
    }
}

/// The genre used as the related-artist search term: the lexicographically
/// smallest one, so the choice does not depend on catalog ordering.
fn search_genre(genres: &BTreeSet<String>) -> Option<&str> {
    genres.iter().next().map(String::as_str)
}

/// Drops the seed itself and every candidate that shares no genre with it.
fn related_by_genre(
    seed_id: &str,
    seed_genres: &BTreeSet<String>,
    candidates: Vec<SpotifyArtist>,
) -> Vec<Artist> {
    candidates
        .into_iter()
        .filter(|candidate| candidate.id != seed_id)
        .filter(|candidate| candidate.genres.iter().any(|g| seed_genres.contains(g)))
        .map(Artist::from)
        .collect()
}

#[async_trait]
impl ArtistCatalog for RemoteCatalog {
    async fn search_artist(&self, name: &str) -> Result<Option<Artist>, CatalogError> {
        let found = self.search(name, 1).await?;
        Ok(found.into_iter().next().map(Artist::from))
    }

    async fn related_artists(&self, id: &str) -> Result<Vec<Artist>, CatalogError> {
        let Some(seed) = self.artist_details(id).await? else {
            return Ok(Vec::new());
        };

        let seed_genres: BTreeSet<String> = seed.genres.into_iter().collect();
        let Some(genre) = search_genre(&seed_genres) else {
            debug!(seed = id, "seed artist has no genres");
            return Ok(Vec::new());
        };

        let candidates = self.search(genre, RELATED_SEARCH_LIMIT).await?;
        let related = related_by_genre(id, &seed_genres, candidates);
        debug!(seed = id, genre, count = related.len(), "Spotify related artists");
        Ok(related)
    }

    async fn artist_details(&self, id: &str) -> Result<Option<Artist>, CatalogError> {
        debug!(id, "Spotify artist lookup");
        let response = self.get(&format!("artists/{id}")).await?.send().await?;

        // Spotify answers unknown ids with 404 and malformed ids with 400.
        if matches!(
            response.status(),
            StatusCode::NOT_FOUND | StatusCode::BAD_REQUEST
        ) {
            return Ok(None);
        }

        let artist: SpotifyArtist = parse_json(check_status(response).await?).await?;
        Ok(Some(artist.into()))
    }
}
