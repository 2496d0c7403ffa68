//! Email Value Object
//!
//! Represents a validated email address. Basic shape validation only;
//! actual ownership is proven by the verification mail.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Maximum total length (per RFC 5321)
const MAX_LENGTH: usize = 254;
/// Maximum local-part length
const MAX_LOCAL_LENGTH: usize = 64;

/// Email address value object, lowercase-normalized
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    pub fn new(email: impl AsRef<str>) -> AppResult<Self> {
        let email = email.as_ref().trim().to_lowercase();

        if email.is_empty() {
            return Err(AppError::validation("Email cannot be empty"));
        }
        if email.len() > MAX_LENGTH {
            return Err(AppError::validation(format!(
                "Email must be at most {} characters",
                MAX_LENGTH
            )));
        }

        let (local, domain) = email
            .split_once('@')
            .ok_or_else(|| AppError::validation("Invalid email format"))?;

        if !Self::local_is_valid(local) || !Self::domain_is_valid(domain) {
            return Err(AppError::validation("Invalid email format"));
        }

        Ok(Self(email))
    }

    fn local_is_valid(local: &str) -> bool {
        !local.is_empty() && local.len() <= MAX_LOCAL_LENGTH && !local.contains('@')
    }

    fn domain_is_valid(domain: &str) -> bool {
        if domain.is_empty() || !domain.contains('.') || domain.contains('@') {
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

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
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
        assert!(Email::new("user@example.com").is_ok());
        assert!(Email::new("user.name@example.co.jp").is_ok());
        assert!(Email::new("user+tag@example.com").is_ok());
        assert!(Email::new("  padded@example.com  ").is_ok());
    }

    #[test]
    fn test_email_invalid() {
        assert!(Email::new("").is_err());
        assert!(Email::new("userexample.com").is_err());
        assert!(Email::new("user@").is_err());
        assert!(Email::new("@example.com").is_err());
        assert!(Email::new("user@@example.com").is_err());
        assert!(Email::new("user@example").is_err());
        assert!(Email::new("user@-example.com").is_err());
        assert!(Email::new("user@example.com.").is_err());
    }

    #[test]
    fn test_email_normalization() {
        let email = Email::new("User@Example.COM").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
    }

    #[test]
    fn test_validation_fails_fast() {
        let err = Email::new("nope").unwrap_err();
        assert!(err.is_fail_fast());
    }
}
