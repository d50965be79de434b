//! Password Value Object
//!
//! Holds a plaintext password for the duration of one request. The
//! remote API hashes it; this type only enforces the submission schema
//! and zeroizes the buffer on drop.

use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

use kernel::error::app_error::{AppError, AppResult};

/// Minimum password length
const PASSWORD_MIN_LENGTH: usize = 8;
/// Maximum password length
const PASSWORD_MAX_LENGTH: usize = 128;

/// Plaintext password value object
///
/// Deliberately has no `Display`, no `Debug` of the content, and no
/// `Clone`: it crosses the wire once and is then dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct RawPassword(String);

impl RawPassword {
    /// Create a new password with validation.
    ///
    /// Applies NFKC normalization before checking so that visually
    /// identical inputs from different keyboards compare equal.
    pub fn new(password: impl Into<String>) -> AppResult<Self> {
        let mut raw: String = password.into();
        let password: String = raw.nfkc().collect();
        raw.zeroize();

        if password.is_empty() {
            return Err(AppError::validation("password", "Password cannot be empty"));
        }

        let char_count = password.chars().count();
        if char_count < PASSWORD_MIN_LENGTH {
            return Err(AppError::validation(
                "password",
                format!("Password must be at least {PASSWORD_MIN_LENGTH} characters"),
            ));
        }
        if char_count > PASSWORD_MAX_LENGTH {
            return Err(AppError::validation(
                "password",
                format!("Password must be at most {PASSWORD_MAX_LENGTH} characters"),
            ));
        }

        if password.chars().any(char::is_control) {
            return Err(AppError::validation(
                "password",
                "Password contains invalid characters",
            ));
        }

        Self::check_character_classes(&password)?;

        Ok(Self(password))
    }

    /// Accept an existing password without policy checks.
    ///
    /// For login and change-password "current" fields: accounts
    /// predating a policy tightening must still be able to sign in.
    pub fn current(password: impl Into<String>) -> AppResult<Self> {
        let mut raw: String = password.into();
        let password: String = raw.nfkc().collect();
        raw.zeroize();

        if password.is_empty() {
            return Err(AppError::validation("password", "Password is required"));
        }

        Ok(Self(password))
    }

    /// Lowercase, uppercase, digit, and special are all required.
    /// Special means any non-alphanumeric, non-whitespace character.
    fn check_character_classes(password: &str) -> AppResult<()> {
        let mut has_lower = false;
        let mut has_upper = false;
        let mut has_digit = false;
        let mut has_special = false;

        for c in password.chars() {
            if c.is_lowercase() {
                has_lower = true;
            } else if c.is_uppercase() {
                has_upper = true;
            } else if c.is_ascii_digit() {
                has_digit = true;
            } else if !c.is_alphanumeric() && !c.is_whitespace() {
                has_special = true;
            }
        }

        if !(has_lower && has_upper && has_digit && has_special) {
            return Err(AppError::validation(
                "password",
                "Password must contain a lowercase letter, an uppercase letter, \
                 a digit, and a special character",
            ));
        }
        Ok(())
    }

    /// Expose the plaintext for request serialization
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("RawPassword(REDACTED)")
    }
}
