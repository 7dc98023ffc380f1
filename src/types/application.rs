use discord_game_sdk_sys as sys;

use crate::internal::utils::read_fixed;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OAuth2Token {
    pub access_token: String,
    /// Space-separated scope list.
    pub scopes: String,
    /// Expiry as a Unix timestamp.
    pub expires: i64,
}

impl From<&sys::DiscordOAuth2Token> for OAuth2Token {
    fn from(raw: &sys::DiscordOAuth2Token) -> Self {
        Self {
            access_token: read_fixed(&raw.access_token),
            scopes: read_fixed(&raw.scopes),
            expires: raw.expires,
        }
    }
}
