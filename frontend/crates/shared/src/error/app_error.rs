//! Application Error - Unified error type for the client
//!
//! Defines [`AppError`] struct and [`AppResult<T>`] type alias.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

/// Unified client error type.
///
/// Standard error type used across the whole workspace, built with a
/// small builder pattern.
///
/// ## Fields
/// * `kind` - error classification (see [`ErrorKind`])
/// * `message` - human-readable message, safe to surface in the UI
/// * `field` - the offending input field, for validation errors
/// * `source` - underlying error (optional, for debugging)
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// // A field-scoped validation error
/// let err = AppError::validation("email", "Invalid email format");
/// assert_eq!(err.field(), Some("email"));
///
/// // A server rejection
/// let err = AppError::rejected(409, "Email already registered");
/// assert_eq!(err.kind(), ErrorKind::Conflict);
/// ```
pub struct AppError {
    /// Error classification
    kind: ErrorKind,
    /// User-facing message
    message: Cow<'static, str>,
    /// Input field this error is scoped to (validation only)
    field: Option<Cow<'static, str>>,
    /// Underlying error (for debugging)
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

/// Result alias for [`AppError`]
pub type AppResult<T> = Result<T, AppError>;

/// Fallback shown when neither the API nor the transport produced a
/// usable message.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong, please try again";

impl AppError {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a new error
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            field: None,
            source: None,
        }
    }

    /// Field-scoped validation error. Never reaches the network.
    #[inline]
    pub fn validation(
        field: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(ErrorKind::Validation, message).with_field(field)
    }

    /// Server rejection, classified by the HTTP status the API returned
    #[inline]
    pub fn rejected(status: u16, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::from_status(status), message)
    }

    /// Network-level failure with the generic fallback message
    #[inline]
    pub fn network() -> Self {
        Self::new(ErrorKind::Network, GENERIC_ERROR_MESSAGE)
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Scope the error to an input field
    #[inline]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Attach the underlying error (for debugging)
    #[inline]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Error classification
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// User-facing message
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Field the error is scoped to, if any
    #[inline]
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Whether this failure never left the client process
    #[inline]
    pub fn is_local(&self) -> bool {
        self.kind.is_local()
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("AppError");
        builder.field("kind", &self.kind);
        builder.field("message", &self.message);
        if let Some(field) = &self.field {
            builder.field("field", field);
        }
        if let Some(source) = &self.source {
            builder.field("source", source);
        }
        builder.finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "[{}] {}: {}", self.kind, field, self.message),
            None => write!(f, "[{}] {}", self.kind, self.message),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

// ============================================================================
// Result extension traits
// ============================================================================

/// Extension trait for converting `Result<T, E>` into `AppResult<T>`
pub trait ResultExt<T, E> {
    /// Wrap the error as an `AppError` with the given kind and message
    fn map_app_err(self, kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> AppResult<T>
    where
        E: Error + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn map_app_err(self, kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> AppResult<T>
    where
        E: Error + Send + Sync + 'static,
    {
        self.map_err(|e| AppError::new(kind, message).with_source(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_error() {
        let err = AppError::new(ErrorKind::NotFound, "Shop not found");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.message(), "Shop not found");
        assert!(err.field().is_none());
    }

    #[test]
    fn test_validation_is_field_scoped() {
        let err = AppError::validation("confirmPassword", "Passwords do not match");
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.field(), Some("confirmPassword"));
        assert!(err.is_local());
    }

    #[test]
    fn test_rejected_maps_status() {
        assert_eq!(AppError::rejected(401, "x").kind(), ErrorKind::Unauthorized);
        assert_eq!(AppError::rejected(500, "x").kind(), ErrorKind::ServerError);
        assert!(!AppError::rejected(409, "taken").is_local());
    }

    #[test]
    fn test_network_fallback_message() {
        let err = AppError::network();
        assert_eq!(err.message(), GENERIC_ERROR_MESSAGE);
        assert!(err.is_local());
    }

    #[test]
    fn test_display() {
        let err = AppError::rejected(404, "User not found");
        assert_eq!(err.to_string(), "[Not Found] User not found");

        let err = AppError::validation("email", "Email cannot be empty");
        assert_eq!(err.to_string(), "[Validation] email: Email cannot be empty");
    }

    #[test]
    fn test_with_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = AppError::network().with_source(io_err);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_result_ext() {
        let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::TimedOut,
            "timed out",
        ));
        let app_result = result.map_app_err(ErrorKind::Network, "Request timed out");
        assert_eq!(app_result.unwrap_err().kind(), ErrorKind::Network);
    }
}
