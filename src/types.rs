use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_AUTHORIZE_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Scope requested on every login.
pub const SCOPE: &str = "user-read-private user-read-email";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

/// Spotify endpoints the server talks to.
///
/// Defaults to the public Spotify services; tests and proxies point them
/// elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotifyEndpoints {
    pub authorize: Url,
    pub token: Url,
    pub profile: Url,
}

impl SpotifyEndpoints {
    /// Builds the endpoint set from an accounts authorize URL, a token URL and
    /// the Web API base URL. The profile endpoint is `<api_base>/me`.
    pub fn new(authorize: &str, token: &str, api_base: &str) -> Result<Self, url::ParseError> {
        let profile = format!("{}/me", api_base.trim_end_matches('/'));
        Ok(Self {
            authorize: Url::parse(authorize)?,
            token: Url::parse(token)?,
            profile: Url::parse(&profile)?,
        })
    }
}

impl Default for SpotifyEndpoints {
    fn default() -> Self {
        Self::new(DEFAULT_AUTHORIZE_URL, DEFAULT_TOKEN_URL, DEFAULT_API_URL)
            .expect("default Spotify endpoints are valid URLs")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserProfile {
    /// Name shown to the user: the display name, else the account id.
    pub fn name(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.id.as_deref())
            .unwrap_or_default()
    }
}
