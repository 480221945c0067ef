//! Bearer credential passed to authenticated operations

use libremore_core::models::AccessToken;
use std::fmt;

/// Bearer token for authenticated endpoints
///
/// The client never stores a token; callers pass one to every authenticated
/// call. `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Wrap a raw token string
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into().trim().to_string())
    }

    /// Raw token value, for the `Authorization` header or storage
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether the token is blank
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(<redacted>)")
    }
}

impl From<AccessToken> for AuthToken {
    fn from(token: AccessToken) -> Self {
        Self::new(token.access_token)
    }
}
