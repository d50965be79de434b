//! Catalog Error Types

use thiserror::Error;

use kernel::error::app_error::{AppError, GENERIC_ERROR_MESSAGE};
use platform::http::HttpError;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] AppError),

    #[error("{message}")]
    Rejected { message: String },

    #[error("session expired")]
    SessionExpired,

    #[error("{0}")]
    Unreachable(String),

    #[error("a submission is already in flight")]
    AlreadySubmitting,
}

impl CatalogError {
    pub fn rejected(message: impl Into<String>) -> Self {
        CatalogError::Rejected {
            message: message.into(),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            CatalogError::Validation(err) => err.message().to_string(),
            CatalogError::Rejected { message } => message.clone(),
            CatalogError::SessionExpired => {
                "Your session has expired, please sign in again".to_string()
            }
            CatalogError::Unreachable(message) => message.clone(),
            CatalogError::AlreadySubmitting => self.to_string(),
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(
            self,
            CatalogError::Validation(_) | CatalogError::AlreadySubmitting
        )
    }

    pub fn log(&self) {
        match self {
            CatalogError::Validation(err) => {
                tracing::debug!(field = ?err.field(), error = %err, "Form validation failed");
            }
            CatalogError::SessionExpired => {
                tracing::warn!("Request failed: session expired");
            }
            CatalogError::Unreachable(message) => {
                tracing::warn!(message = %message, "API unreachable");
            }
            _ => {
                tracing::debug!(error = %self, "Catalog error");
            }
        }
    }
}

impl From<HttpError> for CatalogError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Rejected { message, .. } => CatalogError::Rejected { message },
            HttpError::SessionExpired => CatalogError::SessionExpired,
            HttpError::Transport(_) | HttpError::Decode(_) => {
                CatalogError::Unreachable(GENERIC_ERROR_MESSAGE.to_string())
            }
        }
    }
}
