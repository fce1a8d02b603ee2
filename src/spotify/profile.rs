use super::{SpotifyClient, SpotifyError, decode_ok};
use crate::types::UserProfile;

pub const PROFILE_ERROR: &str = "failed to get profile";

impl SpotifyClient {
    /// Fetches the profile of the user the access token belongs to
    /// (`GET /v1/me`).
    ///
    /// Fails the same way as [`SpotifyClient::exchange_code`], with
    /// `"failed to get profile"` for a non-200 reply.
    pub async fn current_user(&self, access_token: &str) -> Result<UserProfile, SpotifyError> {
        let response = self
            .http
            .get(self.endpoints.profile.clone())
            .bearer_auth(access_token)
            .send()
            .await?;

        decode_ok(response, PROFILE_ERROR).await
    }
}
