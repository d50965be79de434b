//! Login Session Entity

use platform::token::AccessToken;

use super::identity::Identity;

/// Outcome of a successful login or token refresh: the identity to
/// cache plus the bearer token for subsequent requests.
#[derive(Debug, Clone)]
pub struct LoginSession {
    pub identity: Identity,
    pub access_token: AccessToken,
}
