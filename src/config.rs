//! Configuration management for the Spotify OAuth server.
//!
//! Configuration comes from environment variables, optionally populated from
//! `.env` files. It is read once at startup into a [`Config`] value that the
//! server hands to its request handlers; nothing here is global state.
//!
//! Lookup order for `.env` files (variables already set in the process
//! environment always win):
//! 1. `.env` in the current working directory
//! 2. `.env` in the local data directory (`spotify-oauth/.env`)

use std::{
    env,
    net::{Ipv4Addr, SocketAddr, SocketAddrV4},
    path::PathBuf,
    time::Duration,
};

use thiserror::Error;

use crate::types::{
    DEFAULT_API_URL, DEFAULT_AUTHORIZE_URL, DEFAULT_TOKEN_URL, ProviderCredentials,
    SpotifyEndpoints,
};

pub const CLIENT_ID_VAR: &str = "SPOTIFY_OAUTH_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "SPOTIFY_OAUTH_CLIENT_SECRET";
pub const REDIRECT_URL_VAR: &str = "SPOTIFY_OAUTH_REDIRECT_URL";
pub const SERVER_ADDRESS_VAR: &str = "SERVER_ADDRESS";
pub const HTTP_TIMEOUT_VAR: &str = "SPOTIFY_HTTP_TIMEOUT_SECS";
pub const AUTH_URL_VAR: &str = "SPOTIFY_API_AUTH_URL";
pub const TOKEN_URL_VAR: &str = "SPOTIFY_API_TOKEN_URL";
pub const API_URL_VAR: &str = "SPOTIFY_API_URL";

pub const DEFAULT_SERVER_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 8080));
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} is not a valid URL: {source}")]
    InvalidUrl {
        name: &'static str,
        source: url::ParseError,
    },
    #[error("{name} is not a valid socket address: {value}")]
    InvalidAddress { name: &'static str, value: String },
    #[error("{name} must be a positive number of seconds, got {value}")]
    InvalidTimeout { name: &'static str, value: String },
}

/// Everything the server needs to run, built once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: ProviderCredentials,
    pub endpoints: SpotifyEndpoints,
    pub server_addr: SocketAddr,
    /// Applied to every outbound call to Spotify.
    pub http_timeout: Duration,
}

impl Config {
    /// Config with the given credentials and defaults for everything else.
    pub fn new(credentials: ProviderCredentials) -> Self {
        Self {
            credentials,
            endpoints: SpotifyEndpoints::default(),
            server_addr: DEFAULT_SERVER_ADDR,
            http_timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }

    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Fails if any of `SPOTIFY_OAUTH_CLIENT_ID`, `SPOTIFY_OAUTH_CLIENT_SECRET`
    /// or `SPOTIFY_OAUTH_REDIRECT_URL` is unset or empty, or if an optional
    /// variable holds a malformed value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with_addr(None)
    }

    /// Like [`Config::from_env`], but a given `server_addr` replaces
    /// `SERVER_ADDRESS`, which is then not read at all.
    pub fn from_env_with_addr(server_addr: Option<SocketAddr>) -> Result<Self, ConfigError> {
        Self::from_lookup_with_addr(|name| env::var(name).ok(), server_addr)
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup_with_addr(lookup, None)
    }

    pub fn from_lookup_with_addr<F>(
        lookup: F,
        server_addr: Option<SocketAddr>,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required = |name: &'static str| get(name).ok_or(ConfigError::Missing(name));

        let credentials = ProviderCredentials {
            client_id: required(CLIENT_ID_VAR)?,
            client_secret: required(CLIENT_SECRET_VAR)?,
            redirect_uri: required(REDIRECT_URL_VAR)?,
        };

        let authorize = get(AUTH_URL_VAR).unwrap_or_else(|| DEFAULT_AUTHORIZE_URL.to_string());
        let token = get(TOKEN_URL_VAR).unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string());
        let api = get(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let endpoints = SpotifyEndpoints::new(&authorize, &token, &api).map_err(|source| {
            // report the first variable that does not parse
            let name = if url::Url::parse(&authorize).is_err() {
                AUTH_URL_VAR
            } else if url::Url::parse(&token).is_err() {
                TOKEN_URL_VAR
            } else {
                API_URL_VAR
            };
            ConfigError::InvalidUrl { name, source }
        })?;

        let server_addr = match (server_addr, get(SERVER_ADDRESS_VAR)) {
            (Some(addr), _) => addr,
            (None, Some(address)) => {
                address
                    .trim()
                    .parse::<SocketAddr>()
                    .map_err(|_| ConfigError::InvalidAddress {
                        name: SERVER_ADDRESS_VAR,
                        value: address.clone(),
                    })?
            }
            (None, None) => DEFAULT_SERVER_ADDR,
        };

        let http_timeout = match get(HTTP_TIMEOUT_VAR) {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidTimeout {
                        name: HTTP_TIMEOUT_VAR,
                        value,
                    });
                }
            },
            None => DEFAULT_HTTP_TIMEOUT,
        };

        Ok(Self {
            credentials,
            endpoints,
            server_addr,
            http_timeout,
        })
    }
}

/// Loads `.env` files into the process environment.
///
/// Missing files are skipped, the required variables may just as well come
/// from the real environment. A file that exists but cannot be parsed is an
/// error.
///
/// # Directory Structure
///
/// Besides the working directory, the function looks for:
/// - Linux: `~/.local/share/spotify-oauth/.env`
/// - macOS: `~/Library/Application Support/spotify-oauth/.env`
/// - Windows: `%LOCALAPPDATA%/spotify-oauth/.env`
pub fn load_env() -> Result<(), String> {
    let local = PathBuf::from(".env");
    for path in [local, env_file_path()] {
        if path.is_file() {
            dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))?;
        }
    }
    Ok(())
}

/// Location of the `.env` file in the local data directory.
pub fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotify-oauth/.env");
    path
}
