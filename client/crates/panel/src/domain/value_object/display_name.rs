//! Display Name Value Object
//!
//! Trimmed, bounded display name for registration. The backend owns the
//! namespace; only local shape checks happen here.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Maximum display name length
const MAX_LENGTH: usize = 100;

/// Display name value object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayName(String);

impl DisplayName {
    /// Create a new display name with validation
    pub fn new(name: impl AsRef<str>) -> AppResult<Self> {
        let name = name.as_ref().trim().to_string();

        if name.is_empty() {
            return Err(AppError::validation("Name cannot be empty"));
        }
        if name.chars().count() > MAX_LENGTH {
            return Err(AppError::validation(format!(
                "Name must be at most {} characters",
                MAX_LENGTH
            )));
        }
        if name.chars().any(char::is_control) {
            return Err(AppError::validation("Name contains invalid characters"));
        }

        Ok(Self(name))
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DisplayName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
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
    fn test_valid_names() {
        assert_eq!(DisplayName::new("Ada Lovelace").unwrap().as_str(), "Ada Lovelace");
        assert_eq!(DisplayName::new("  trimmed  ").unwrap().as_str(), "trimmed");
    }

    #[test]
    fn test_invalid_names() {
        assert!(DisplayName::new("").is_err());
        assert!(DisplayName::new("   ").is_err());
        assert!(DisplayName::new("a\u{0007}b").is_err());
        assert!(DisplayName::new("x".repeat(101)).is_err());
    }
}
