//! Common ID Types
//!
//! Type-safe wrappers around opaque string identifiers. Uids here are
//! assigned by the identity provider or the backend, never minted locally,
//! so the wrapper holds the assigned string as-is.

use std::fmt;
use std::marker::PhantomData;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type UserUid = Id<markers::User>;
/// let uid = UserUid::from("mock-uid-1");
/// assert_eq!(uid.as_str(), "mock-uid-1");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Id<T> {
    value: String,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Wrap an externally assigned identifier
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _marker: PhantomData,
        }
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consume and return the underlying string
    pub fn into_string(self) -> String {
        self.value
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<String> for Id<T> {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl<T> From<&str> for Id<T> {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<T> AsRef<str> for Id<T> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl<T> serde::Serialize for Id<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de, T> serde::Deserialize<'de> for Id<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for user uids (identity provider / backend assigned)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct User;
}

/// Type aliases for common IDs
pub type UserUid = Id<markers::User>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_wraps_assigned_value() {
        let uid = UserUid::from("provider-uid-42");
        assert_eq!(uid.as_str(), "provider-uid-42");
        assert_eq!(uid.to_string(), "provider-uid-42");
    }

    #[test]
    fn test_id_serde_roundtrip() {
        let uid = UserUid::from("abc");
        let json = serde_json::to_string(&uid).unwrap();
        assert_eq!(json, "\"abc\"");
        let back: UserUid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, uid);
    }
}
