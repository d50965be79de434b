//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum. Client-side failures (validation,
//! unreachable network) and server rejections (mapped from the HTTP
//! status the remote API answered with) share the same classification.

use serde::Serialize;

/// Error classification for the storefront client.
///
/// Server-originated variants correspond to the HTTP status code the
/// remote API returned; client-originated variants cover everything
/// that never left the process.
///
/// ## Notes
/// * `non_exhaustive` - variants may be added as the API grows
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// assert_eq!(ErrorKind::from_status(401), ErrorKind::Unauthorized);
/// assert_eq!(ErrorKind::Validation.as_str(), "Validation");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// Local input validation failed; the request never left the client
    Validation,
    /// The network was unreachable or the response was unreadable
    Network,
    /// 400 - the API rejected the request shape
    BadRequest,
    /// 401 - credentials rejected or session expired
    Unauthorized,
    /// 403 - authenticated but not allowed
    Forbidden,
    /// 404 - resource does not exist
    NotFound,
    /// 409 - conflicts with current server state
    Conflict,
    /// 422 - well-formed but semantically rejected
    UnprocessableEntity,
    /// 429 - rate limited by the API
    TooManyRequests,
    /// 5xx - the API itself failed
    ServerError,
}

impl ErrorKind {
    /// Classify a server rejection by its HTTP status code.
    ///
    /// Unknown 4xx codes collapse into `BadRequest`, anything 5xx into
    /// `ServerError`, and non-error codes into `Network` (an error was
    /// raised without an error status, so the exchange itself is suspect).
    pub const fn from_status(status: u16) -> Self {
        match status {
            400 => ErrorKind::BadRequest,
            401 => ErrorKind::Unauthorized,
            403 => ErrorKind::Forbidden,
            404 => ErrorKind::NotFound,
            409 => ErrorKind::Conflict,
            422 => ErrorKind::UnprocessableEntity,
            429 => ErrorKind::TooManyRequests,
            402..=499 => ErrorKind::BadRequest,
            500..=599 => ErrorKind::ServerError,
            _ => ErrorKind::Network,
        }
    }

    /// User-facing string representation
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "Validation",
            ErrorKind::Network => "Network",
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::UnprocessableEntity => "Unprocessable Entity",
            ErrorKind::TooManyRequests => "Too Many Requests",
            ErrorKind::ServerError => "Server Error",
        }
    }

    /// Whether the failure originated inside the client process.
    ///
    /// Such errors must never be attributed to the remote API and must
    /// not trigger any session handling.
    #[inline]
    pub const fn is_local(&self) -> bool {
        matches!(self, ErrorKind::Validation | ErrorKind::Network)
    }

    /// Whether the failure is a server rejection of this request
    #[inline]
    pub const fn is_rejection(&self) -> bool {
        !self.is_local()
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert_eq!(ErrorKind::from_status(400), ErrorKind::BadRequest);
        assert_eq!(ErrorKind::from_status(401), ErrorKind::Unauthorized);
        assert_eq!(ErrorKind::from_status(403), ErrorKind::Forbidden);
        assert_eq!(ErrorKind::from_status(404), ErrorKind::NotFound);
        assert_eq!(ErrorKind::from_status(409), ErrorKind::Conflict);
        assert_eq!(ErrorKind::from_status(422), ErrorKind::UnprocessableEntity);
        assert_eq!(ErrorKind::from_status(429), ErrorKind::TooManyRequests);
        assert_eq!(ErrorKind::from_status(418), ErrorKind::BadRequest);
        assert_eq!(ErrorKind::from_status(500), ErrorKind::ServerError);
        assert_eq!(ErrorKind::from_status(503), ErrorKind::ServerError);
        assert_eq!(ErrorKind::from_status(200), ErrorKind::Network);
    }

    #[test]
    fn test_is_local() {
        assert!(ErrorKind::Validation.is_local());
        assert!(ErrorKind::Network.is_local());
        assert!(!ErrorKind::Unauthorized.is_local());
        assert!(!ErrorKind::ServerError.is_local());
    }
}
