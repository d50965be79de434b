//! OTP Code Value Object

use std::fmt;
use std::str::FromStr;

use kernel::error::app_error::{AppError, AppResult};

/// Required code length
const OTP_LENGTH: usize = 6;

/// One-time verification code entered by the user.
///
/// Only the length is checked here; whether the code matches and is
/// still fresh is decided by the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpCode(String);

impl OtpCode {
    /// Create a new OTP code with validation
    pub fn new(code: impl Into<String>) -> AppResult<Self> {
        let code = code.into().trim().to_string();

        if code.is_empty() {
            return Err(AppError::validation("otp", "Verification code is required"));
        }

        if code.chars().count() != OTP_LENGTH {
            return Err(AppError::validation(
                "otp",
                format!("Verification code must be {OTP_LENGTH} characters"),
            ));
        }

        Ok(Self(code))
    }

    /// Get the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for OtpCode {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        OtpCode::new(s)
    }
}

impl fmt::Display for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for OtpCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_otp_valid() {
        assert!(OtpCode::new("123456").is_ok());
        assert!(OtpCode::new("  482913  ").is_ok());
        // the API decides the alphabet, not the client
        assert!(OtpCode::new("A1B2C3").is_ok());
    }

    #[test]
    fn test_otp_wrong_length() {
        assert!(OtpCode::new("").is_err());
        assert!(OtpCode::new("12345").is_err());
        assert!(OtpCode::new("1234567").is_err());
    }

    #[test]
    fn test_otp_error_is_field_scoped() {
        let err = OtpCode::new("123").unwrap_err();
        assert_eq!(err.field(), Some("otp"));
    }
}
