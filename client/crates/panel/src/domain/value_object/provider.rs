//! OAuth Provider Strategy Table
//!
//! Each supported provider supplies its popup request shape and photo
//! resolution strategy here, replacing scattered per-provider conditionals.
//! Adding a provider means adding a variant and its two table entries.

use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::error::PanelError;

/// Supported OAuth providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[display("google")]
    Google,
    #[display("facebook")]
    Facebook,
    #[display("github")]
    Github,
    #[display("microsoft")]
    Microsoft,
}

/// How a provider's profile photo is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoSource {
    /// Photo URL embedded in the identity result
    IdentityResult,
    /// Authenticated binary fetch from Microsoft Graph
    GraphBinary,
    /// Dedicated picture endpoint whose redirect target is the photo
    PictureRedirect,
}

/// Popup flow configuration for one provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthRequest {
    /// Provider identifier understood by the identity SDK
    pub provider_id: &'static str,
    /// OAuth scopes to request
    pub scopes: Vec<&'static str>,
    /// Provider-specific custom parameters
    pub params: Vec<(&'static str, &'static str)>,
}

impl Provider {
    /// All supported providers, in UI order
    pub const ALL: [Provider; 4] = [
        Provider::Google,
        Provider::Facebook,
        Provider::Github,
        Provider::Microsoft,
    ];

    /// Lowercase provider name as used in the UI
    pub const fn as_str(&self) -> &'static str {
        match self {
            Provider::Google => "google",
            Provider::Facebook => "facebook",
            Provider::Github => "github",
            Provider::Microsoft => "microsoft",
        }
    }

    /// Provider identifier understood by the identity SDK
    pub const fn provider_id(&self) -> &'static str {
        match self {
            Provider::Google => "google.com",
            Provider::Facebook => "facebook.com",
            Provider::Github => "github.com",
            Provider::Microsoft => "microsoft.com",
        }
    }

    /// Build the popup request for this provider
    ///
    /// Every provider requests the `email` scope. Microsoft additionally
    /// forces a consent prompt, restricts to personal accounts, and requests
    /// `openid` + `profile`.
    pub fn auth_request(&self) -> OAuthRequest {
        let mut scopes = Vec::new();
        let mut params = Vec::new();

        if let Provider::Microsoft = self {
            params.push(("prompt", "consent"));
            params.push(("tenant", "consumers"));
            scopes.push("openid");
            scopes.push("profile");
        }
        scopes.push("email");

        OAuthRequest {
            provider_id: self.provider_id(),
            scopes,
            params,
        }
    }

    /// Photo resolution strategy for this provider
    pub const fn photo_source(&self) -> PhotoSource {
        match self {
            Provider::Microsoft => PhotoSource::GraphBinary,
            Provider::Facebook => PhotoSource::PictureRedirect,
            Provider::Google | Provider::Github => PhotoSource::IdentityResult,
        }
    }
}

impl FromStr for Provider {
    type Err = PanelError;

    /// Parse a provider name, failing fast on unsupported values
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "google" => Ok(Provider::Google),
            "facebook" => Ok(Provider::Facebook),
            "github" => Ok(Provider::Github),
            "microsoft" => Ok(Provider::Microsoft),
            other => Err(PanelError::UnsupportedProvider(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported_providers() {
        for provider in Provider::ALL {
            let parsed: Provider = provider.as_str().parse().unwrap();
            assert_eq!(parsed, provider);
        }
        assert_eq!("GitHub".parse::<Provider>().unwrap(), Provider::Github);
    }

    #[test]
    fn test_parse_unsupported_provider_fails_fast() {
        let err = "twitter".parse::<Provider>().unwrap_err();
        assert!(matches!(err, PanelError::UnsupportedProvider(name) if name == "twitter"));
        assert!("".parse::<Provider>().is_err());
    }

    #[test]
    fn test_all_providers_request_email_scope() {
        for provider in Provider::ALL {
            let request = provider.auth_request();
            assert!(
                request.scopes.contains(&"email"),
                "{provider} must request the email scope"
            );
        }
    }

    #[test]
    fn test_microsoft_request_shape() {
        let request = Provider::Microsoft.auth_request();
        assert_eq!(request.provider_id, "microsoft.com");
        assert!(request.scopes.contains(&"openid"));
        assert!(request.scopes.contains(&"profile"));
        assert!(request.params.contains(&("prompt", "consent")));
        assert!(request.params.contains(&("tenant", "consumers")));
    }

    #[test]
    fn test_other_providers_have_no_custom_params() {
        for provider in [Provider::Google, Provider::Facebook, Provider::Github] {
            let request = provider.auth_request();
            assert!(request.params.is_empty(), "{provider} adds no custom params");
            assert_eq!(request.scopes, vec!["email"]);
        }
    }

    #[test]
    fn test_photo_sources() {
        assert_eq!(Provider::Microsoft.photo_source(), PhotoSource::GraphBinary);
        assert_eq!(Provider::Facebook.photo_source(), PhotoSource::PictureRedirect);
        assert_eq!(Provider::Google.photo_source(), PhotoSource::IdentityResult);
        assert_eq!(Provider::Github.photo_source(), PhotoSource::IdentityResult);
    }
}
