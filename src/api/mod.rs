//! # API Module
//!
//! HTTP handlers for the browser-facing side of the Spotify login.
//!
//! ## Endpoints
//!
//! - [`index`] - `GET /`, landing page with a login link
//! - [`login`] - `GET /api/auth/login/spotify`, 307 redirect to Spotify's
//!   consent screen
//! - [`callback`] - `GET /api/auth/spotify/callback`, exchanges the `code`
//!   query parameter for a token and renders the user's name
//! - [`health`] - `GET /health`, status and version for monitoring
//!
//! ## State
//!
//! Handlers receive an `Arc<AppState>` through axum's state extractor. The
//! state is built once at startup and never mutated, so handlers run
//! concurrently without locks.
//!
//! ## Errors
//!
//! Failures are returned as [`ApiError`], rendered as `{"error": "..."}` with
//! 400 for a missing code and 500 for anything that went wrong talking to
//! Spotify.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use spotify_oauth::api::{callback, health};
//!
//! let app = Router::new()
//!     .route(CALLBACK_PATH, get(callback))
//!     .route("/health", get(health))
//!     .with_state(state);
//! ```

use crate::{config::Config, spotify::SpotifyClient};

mod callback;
mod error;
mod health;
mod index;
mod login;
pub mod views;

pub use callback::{CallbackParams, callback};
pub use error::ApiError;
pub use health::health;
pub use index::index;
pub use login::login;

pub const INDEX_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/api/auth/login/spotify";
pub const CALLBACK_PATH: &str = "/api/auth/spotify/callback";
pub const HEALTH_PATH: &str = "/health";

/// Read-only state shared by all requests.
#[derive(Debug, Clone)]
pub struct AppState {
    pub spotify: SpotifyClient,
}

impl AppState {
    pub fn new(spotify: SpotifyClient) -> Self {
        Self { spotify }
    }

    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self::new(SpotifyClient::from_config(config)?))
    }
}
