//! Application Configuration
//!
//! Configuration for the panel application layer.

use std::time::Duration;

/// Panel application configuration
#[derive(Debug, Clone)]
pub struct PanelConfig {
    /// Base URL of the session backend
    pub backend_base_url: String,
    /// Storage key prefix for profile photos
    pub photo_prefix: String,
    /// Per-request timeout for outbound calls
    pub request_timeout: Duration,
    /// Generic message shown when no backend detail is available
    pub generic_error: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            backend_base_url: "http://localhost:5000".to_string(),
            photo_prefix: "user_photos".to_string(),
            request_timeout: Duration::from_secs(10),
            generic_error: "Something went wrong. Please try again.".to_string(),
        }
    }
}

impl PanelConfig {
    /// Storage key for a photo owner (email at sign-up, uid otherwise)
    pub fn photo_key(&self, owner: &str) -> String {
        format!("{}/{}", self.photo_prefix, owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PanelConfig::default();
        assert_eq!(config.backend_base_url, "http://localhost:5000");
        assert_eq!(config.photo_prefix, "user_photos");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_photo_key() {
        let config = PanelConfig::default();
        assert_eq!(config.photo_key("uid-1"), "user_photos/uid-1");
        assert_eq!(
            config.photo_key("user@example.com"),
            "user_photos/user@example.com"
        );
    }
}
