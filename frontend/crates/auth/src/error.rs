//! Auth Error Types
//!
//! Error taxonomy of the client: local validation (field
//! scoped, never reaches the network), structured API rejection,
//! network failure with a generic fallback, and session expiry which
//! the HTTP layer handles globally. Forms never let any of these
//! terminate the wizard.

use thiserror::Error;

use kernel::error::app_error::{AppError, GENERIC_ERROR_MESSAGE};
use platform::http::HttpError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Client-side validation failed; the request was never sent
    #[error(transparent)]
    Validation(#[from] AppError),

    /// The API rejected the request with a structured message
    #[error("{message}")]
    Rejected { message: String },

    /// A protected call answered 401; session teardown already ran
    #[error("session expired")]
    SessionExpired,

    /// The API was unreachable or the response unreadable
    #[error("{0}")]
    Unreachable(String),

    /// A submission for this form is already in flight
    #[error("a submission is already in flight")]
    AlreadySubmitting,

    /// The resend cooldown has not elapsed yet
    #[error("please wait {remaining_secs}s before requesting another code")]
    ResendThrottled { remaining_secs: u64 },
}

impl AuthError {
    /// API rejection with an extracted message
    pub fn rejected(message: impl Into<String>) -> Self {
        AuthError::Rejected {
            message: message.into(),
        }
    }

    /// Message for the transient notification
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Validation(err) => err.message().to_string(),
            AuthError::Rejected { message } => message.clone(),
            AuthError::SessionExpired => {
                "Your session has expired, please sign in again".to_string()
            }
            AuthError::Unreachable(message) => message.clone(),
            AuthError::AlreadySubmitting | AuthError::ResendThrottled { .. } => self.to_string(),
        }
    }

    /// Whether the failure never left the client process
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            AuthError::Validation(_)
                | AuthError::AlreadySubmitting
                | AuthError::ResendThrottled { .. }
        )
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AuthError::Validation(err) => {
                tracing::debug!(field = ?err.field(), error = %err, "Form validation failed");
            }
            AuthError::SessionExpired => {
                tracing::warn!("Request failed: session expired");
            }
            AuthError::Unreachable(message) => {
                tracing::warn!(message = %message, "API unreachable");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl From<HttpError> for AuthError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Rejected { message, .. } => AuthError::Rejected { message },
            HttpError::SessionExpired => AuthError::SessionExpired,
            HttpError::Transport(_) | HttpError::Decode(_) => {
                AuthError::Unreachable(GENERIC_ERROR_MESSAGE.to_string())
            }
        }
    }
}
