use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use url::Url;

use super::{SpotifyClient, SpotifyError, decode_ok};
use crate::types::{ProviderCredentials, SCOPE, TokenResponse};

pub const TOKEN_ERROR: &str = "failed to get access token";

/// Builds the Spotify authorize URL the login route redirects to.
///
/// The query carries exactly `response_type=code`, the client id, the
/// redirect URI and the fixed [`SCOPE`]. No `state` parameter is sent, so
/// the callback cannot tie a code to a login it started.
///
/// # Example
///
/// ```
/// let url = authorize_url(&endpoints.authorize, &credentials);
/// // https://accounts.spotify.com/authorize?response_type=code&client_id=...
/// ```
pub fn authorize_url(authorize_endpoint: &Url, credentials: &ProviderCredentials) -> Url {
    let mut url = authorize_endpoint.clone();
    url.query_pairs_mut()
        .append_pair("response_type", "code")
        .append_pair("client_id", &credentials.client_id)
        .append_pair("redirect_uri", &credentials.redirect_uri)
        .append_pair("scope", SCOPE);
    url
}

/// Value of the `Authorization` header for the token exchange:
/// `Basic base64(client_id:client_secret)`.
pub fn basic_credentials(credentials: &ProviderCredentials) -> String {
    let raw = format!("{}:{}", credentials.client_id, credentials.client_secret);
    format!("Basic {}", STANDARD.encode(raw))
}

impl SpotifyClient {
    /// Authorize URL for this client's credentials.
    pub fn authorize_url(&self) -> Url {
        authorize_url(&self.endpoints.authorize, &self.credentials)
    }

    /// Exchanges an authorization code for an access token.
    ///
    /// Posts `grant_type=authorization_code`, the code and the redirect URI
    /// as a form to the token endpoint, authenticating the client with HTTP
    /// Basic auth.
    ///
    /// # Errors
    ///
    /// - [`SpotifyError::Transport`] if the request could not be sent or timed out
    /// - [`SpotifyError::Status`] with `"failed to get access token"` on a non-200 reply
    /// - [`SpotifyError::Decode`] if the reply is not a token document
    pub async fn exchange_code(&self, code: &str) -> Result<TokenResponse, SpotifyError> {
        let response = self
            .http
            .post(self.endpoints.token.clone())
            .header(AUTHORIZATION, basic_credentials(&self.credentials))
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", self.credentials.redirect_uri.as_str()),
            ])
            .send()
            .await?;

        decode_ok(response, TOKEN_ERROR).await
    }
}
