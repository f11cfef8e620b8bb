use crate::catalog::{SpotifyCredentials, DEFAULT_API_BASE_URL, DEFAULT_AUTH_URL};
use crate::discovery::{DiscoveryParams, DEFAULT_LIMIT, DEFAULT_MAX_FOLLOWERS};
use config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

pub const CLIENT_ID_VAR: &str = "SPOTIFY_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "SPOTIFY_CLIENT_SECRET";

/// Follower threshold used against the live catalog, where follower counts
/// are much larger than in the fixture table.
pub const DEFAULT_REMOTE_MAX_FOLLOWERS: u64 = 2_000_000;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub spotify: SpotifyCredentials,
    pub discovery: DiscoverySettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiscoverySettings {
    pub fixture_max_followers: u64,
    pub remote_max_followers: u64,
    pub limit: usize,
}

/// Where artist data comes from for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    Fixture,
    Remote,
}

impl SourceMode {
    /// Remote mode when explicitly requested, or when both credential
    /// variables are set in the environment; fixture mode otherwise.
    ///
    /// Credentials that only live in the config file are used by `--real`
    /// but never switch the mode on their own.
    pub fn select(force_remote: bool, credentials_in_env: bool) -> Self {
        if force_remote || credentials_in_env {
            SourceMode::Remote
        } else {
            SourceMode::Fixture
        }
    }

    pub fn use_remote_source(self) -> bool {
        self == SourceMode::Remote
    }

    pub fn label(self) -> &'static str {
        match self {
            SourceMode::Fixture => "Mock data",
            SourceMode::Remote => "Real Spotify API",
        }
    }
}

impl Settings {
    /// Discovery parameters for the given mode, before CLI overrides.
    pub fn discovery_params(&self, mode: SourceMode) -> DiscoveryParams {
        let max_followers = match mode {
            SourceMode::Fixture => self.discovery.fixture_max_followers,
            SourceMode::Remote => self.discovery.remote_max_followers,
        };
        DiscoveryParams {
            max_followers,
            limit: self.discovery.limit,
        }
    }
}

/// Loads settings from built-in defaults, the optional YAML file at
/// `cfg_file` and the Spotify credential variables, in that order.
pub fn get_configuration(cfg_file: Option<&Path>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder()
        .set_default("spotify.api_base_url", DEFAULT_API_BASE_URL)?
        .set_default("spotify.auth_url", DEFAULT_AUTH_URL)?
        .set_default(
            "discovery.fixture_max_followers",
            DEFAULT_MAX_FOLLOWERS,
        )?
        .set_default(
            "discovery.remote_max_followers",
            DEFAULT_REMOTE_MAX_FOLLOWERS,
        )?
        .set_default("discovery.limit", DEFAULT_LIMIT as u64)?;

    if let Some(cfg_file) = cfg_file {
        builder = builder.add_source(File::from(cfg_file).format(FileFormat::Yaml).required(false));
    }

    builder
        .set_override_option("spotify.client_id", non_blank_var(CLIENT_ID_VAR))?
        .set_override_option("spotify.client_secret", non_blank_var(CLIENT_SECRET_VAR))?
        .build()?
        .try_deserialize::<Settings>()
}

fn non_blank_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Both `SPOTIFY_CLIENT_ID` and `SPOTIFY_CLIENT_SECRET` are set and non-blank.
pub fn credentials_in_environment() -> bool {
    credentials_present(non_blank_var)
}

fn credentials_present(lookup: impl Fn(&str) -> Option<String>) -> bool {
    lookup(CLIENT_ID_VAR).is_some() && lookup(CLIENT_SECRET_VAR).is_some()
}

pub struct ConfigFolder {
    pub config_dir: PathBuf,
    pub config_file: PathBuf,
}

impl ConfigFolder {
    /// `~/.deepcut`, or `None` when `HOME` is not set.
    pub fn new() -> Option<Self> {
        let home_dir = env::var("HOME").ok()?;
        Some(Self::in_home(Path::new(&home_dir)))
    }

    pub fn in_home(home_dir: &Path) -> Self {
        let config_dir = home_dir.join(".deepcut");
        Self {
            config_file: config_dir.join("config.yaml"),
            config_dir,
        }
    }
}
