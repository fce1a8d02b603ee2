//! # Spotify Integration Module
//!
//! Outbound side of the OAuth authorization code flow. The server acts as a
//! client of two Spotify services:
//!
//! ```text
//! Callback handler
//!      ↓
//! SpotifyClient
//!     ├── auth     POST accounts.spotify.com/api/token  (Basic client auth)
//!     └── profile  GET  api.spotify.com/v1/me           (Bearer access token)
//!      ↓
//! reqwest (rustls, explicit timeout)
//! ```
//!
//! [`auth`] also builds the authorize URL the login route redirects to.
//!
//! ## Error Handling
//!
//! Every call returns [`SpotifyError`]. Nothing is retried: a failed call is
//! terminal for the request that made it. The error's `Display` output is the
//! message the API layer sends back to the browser.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::{Error as _, Unexpected};
use serde_json::Value;
use thiserror::Error;

use crate::{
    config::Config,
    types::{ProviderCredentials, SpotifyEndpoints},
};

pub mod auth;
pub mod profile;

#[derive(Debug, Error)]
pub enum SpotifyError {
    /// The request never got a response: DNS, connect, TLS or timeout.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    /// Spotify answered with something other than 200 OK.
    #[error("{context}")]
    Status {
        status: StatusCode,
        context: &'static str,
    },
    /// The response body was not the expected JSON document.
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

/// HTTP client bound to one set of credentials and endpoints.
///
/// Holds no per-request state, one instance is shared by all requests.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    credentials: ProviderCredentials,
    endpoints: SpotifyEndpoints,
}

impl SpotifyClient {
    pub fn new(
        credentials: ProviderCredentials,
        endpoints: SpotifyEndpoints,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            credentials,
            endpoints,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Self::new(
            config.credentials.clone(),
            config.endpoints.clone(),
            config.http_timeout,
        )
    }

    pub fn credentials(&self) -> &ProviderCredentials {
        &self.credentials
    }

    pub fn endpoints(&self) -> &SpotifyEndpoints {
        &self.endpoints
    }
}

/// Reads a 200 response body and decodes it as `T`.
///
/// Any other status maps to [`SpotifyError::Status`] carrying `context`; the
/// body is not read in that case.
///
/// Only the first JSON value of the body is read, and it must be an object.
async fn decode_ok<T>(response: reqwest::Response, context: &'static str) -> Result<T, SpotifyError>
where
    T: serde::de::DeserializeOwned,
{
    let status = response.status();
    if status != StatusCode::OK {
        return Err(SpotifyError::Status { status, context });
    }

    let body = response.bytes().await?;
    decode_object(&body)
}

/// Decodes the first JSON value in `body` as `T`, rejecting anything but an
/// object. Bytes after that value are ignored.
pub fn decode_object<T>(body: &[u8]) -> Result<T, SpotifyError>
where
    T: serde::de::DeserializeOwned,
{
    let first = serde_json::Deserializer::from_slice(body)
        .into_iter::<Value>()
        .next()
        .ok_or_else(|| serde_json::Error::custom("EOF while parsing a value"))??;

    match first {
        Value::Object(map) => Ok(serde_json::from_value(Value::Object(map))?),
        other => Err(serde_json::Error::invalid_type(unexpected(&other), &"a JSON object").into()),
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}
