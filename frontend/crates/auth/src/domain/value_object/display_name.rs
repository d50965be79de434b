//! Display Name Value Object

use std::fmt;
use std::str::FromStr;

use kernel::error::app_error::{AppError, AppResult};

/// Minimum name length after trimming
const NAME_MIN_LENGTH: usize = 2;
/// Maximum name length after trimming
const NAME_MAX_LENGTH: usize = 100;

/// User display name value object
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayName(String);

impl DisplayName {
    /// Create a new display name with validation
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let name = name.into().trim().to_string();

        if name.is_empty() {
            return Err(AppError::validation("name", "Name is required"));
        }

        let char_count = name.chars().count();
        if char_count < NAME_MIN_LENGTH {
            return Err(AppError::validation(
                "name",
                format!("Name must be at least {NAME_MIN_LENGTH} characters"),
            ));
        }
        if char_count > NAME_MAX_LENGTH {
            return Err(AppError::validation(
                "name",
                format!("Name must be at most {NAME_MAX_LENGTH} characters"),
            ));
        }

        Ok(Self(name))
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for DisplayName {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        DisplayName::new(s)
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_valid() {
        assert!(DisplayName::new("Ana").is_ok());
        assert!(DisplayName::new("Li").is_ok());
        assert!(DisplayName::new("  Trimmed Name  ").is_ok());
    }

    #[test]
    fn test_name_too_short() {
        assert!(DisplayName::new("").is_err());
        assert!(DisplayName::new("A").is_err());
        // whitespace does not count toward the minimum
        assert!(DisplayName::new("  A  ").is_err());
    }

    #[test]
    fn test_name_too_long() {
        assert!(DisplayName::new("x".repeat(NAME_MAX_LENGTH + 1)).is_err());
        assert!(DisplayName::new("x".repeat(NAME_MAX_LENGTH)).is_ok());
    }

    #[test]
    fn test_name_error_is_field_scoped() {
        let err = DisplayName::new("A").unwrap_err();
        assert_eq!(err.field(), Some("name"));
    }
}
