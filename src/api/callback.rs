use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Html,
};

use super::{AppState, ApiError, views::CallbackView};
use crate::{success, warning};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CallbackParams {
    pub code: Option<String>,
    /// Set by Spotify instead of `code` when the user declines.
    pub error: Option<String>,
}

impl CallbackParams {
    /// Picks the parameters out of the decoded query pairs. A repeated key
    /// keeps its first value, other keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "code" => &mut params.code,
                "error" => &mut params.error,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

/// Completes the login: exchanges the code for a token, then fetches the
/// profile and greets the user by name.
///
/// The profile call only happens after a successful token exchange. Any
/// failure ends the request with a JSON error; nothing is retried and the
/// token is dropped when the request ends.
///
/// The `state` parameter is neither expected nor checked.
pub async fn callback(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Html<String>, ApiError> {
    let params = CallbackParams::from_pairs(pairs);
    let Some(code) = params.code.filter(|code| !code.is_empty()) else {
        if let Some(reason) = params.error {
            warning!("Spotify returned an authorization error: {}", reason);
        }
        return Err(ApiError::MissingCode);
    };

    let token = state
        .spotify
        .exchange_code(&code)
        .await
        .inspect_err(|e| warning!("Token exchange failed: {}", e))?;

    let profile = state
        .spotify
        .current_user(&token.access_token)
        .await
        .inspect_err(|e| warning!("Profile request failed: {}", e))?;

    success!("Logged in as {}", profile.name());
    Ok(CallbackView {
        name: profile.name(),
    }
    .render())
}
