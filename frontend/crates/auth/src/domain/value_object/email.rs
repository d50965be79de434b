//! Email Value Object
//!
//! Represents a validated email address.
//! Shape validation only - whether the address actually exists is the
//! remote API's business (it sends the OTP there).

use std::fmt;
use std::str::FromStr;

use kernel::error::app_error::{AppError, AppResult};

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Create a new email with validation.
    ///
    /// Input is trimmed and lowercased before checking.
    pub fn new(email: impl Into<String>) -> AppResult<Self> {
        let email = email.into().trim().to_lowercase();

        if email.is_empty() {
            return Err(AppError::validation("email", "Email cannot be empty"));
        }

        if email.len() > EMAIL_MAX_LENGTH {
            return Err(AppError::validation(
                "email",
                format!("Email must be at most {EMAIL_MAX_LENGTH} characters"),
            ));
        }

        if !Self::has_valid_shape(&email) {
            return Err(AppError::validation("email", "Invalid email format"));
        }

        Ok(Self(email))
    }

    /// `local@domain` with a dotted, hostname-like domain
    fn has_valid_shape(email: &str) -> bool {
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };

        if local.is_empty() || local.len() > 64 || local.contains('@') {
            return false;
        }

        if !domain.contains('.') {
            return false;
        }
        if domain.starts_with(['.', '-']) || domain.ends_with(['.', '-']) {
            return false;
        }
        domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    }

    /// Get the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Email {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Email::new(s)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(Email::new("ana@example.com").is_ok());
        assert!(Email::new("Ana@Example.COM").is_ok());
        assert!(Email::new("user.name@example.co.jp").is_ok());
        assert!(Email::new("user+tag@example.com").is_ok());
        assert!(Email::new("  padded@example.com  ").is_ok());
    }

    #[test]
    fn test_email_invalid() {
        assert!(Email::new("").is_err());
        assert!(Email::new("no-at-sign.example.com").is_err());
        assert!(Email::new("user@").is_err());
        assert!(Email::new("@example.com").is_err());
        assert!(Email::new("user@@example.com").is_err());
        assert!(Email::new("user@nodot").is_err());
        assert!(Email::new("user@-example.com").is_err());
    }

    #[test]
    fn test_email_error_is_field_scoped() {
        let err = Email::new("broken").unwrap_err();
        assert_eq!(err.field(), Some("email"));
    }

    #[test]
    fn test_email_case_normalization() {
        let email = Email::new("Ana@Example.COM").unwrap();
        assert_eq!(email.as_str(), "ana@example.com");
    }
}
