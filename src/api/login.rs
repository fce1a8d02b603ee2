use std::sync::Arc;

use axum::{extract::State, response::Redirect};

use super::AppState;

/// Sends the browser to Spotify's consent screen with a 307.
pub async fn login(State(state): State<Arc<AppState>>) -> Redirect {
    Redirect::temporary(state.spotify.authorize_url().as_str())
}
