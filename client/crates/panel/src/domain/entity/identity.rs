//! Provider Identity Entity
//!
//! The identity provider's view of the signed-in user, as delivered by
//! auth-state changes and popup completions. Distinct from [`SessionUser`]:
//! an established provider identity does not imply an application session
//! (unverified addresses are rejected at the application layer).
//!
//! [`SessionUser`]: super::session_user::SessionUser

use kernel::id::UserUid;

/// Auth-state snapshot broadcast by the identity gateway
pub type AuthState = Option<ProviderIdentity>;

/// Identity-provider-side user record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderIdentity {
    /// Provider-assigned uid
    pub uid: UserUid,
    /// Email address, if the provider disclosed one
    pub email: Option<String>,
    /// Display name from the provider profile
    pub display_name: Option<String>,
    /// Photo URL embedded in the identity result
    pub photo_url: Option<String>,
    /// Whether the provider considers the email address verified
    pub email_verified: bool,
}

impl ProviderIdentity {
    /// Minimal identity for a freshly created, unverified account
    pub fn unverified(uid: impl Into<UserUid>, email: Option<String>) -> Self {
        Self {
            uid: uid.into(),
            email,
            display_name: None,
            photo_url: None,
            email_verified: false,
        }
    }
}

/// Result of a completed OAuth popup
#[derive(Debug, Clone)]
pub struct PopupOutcome {
    /// The established provider identity
    pub identity: ProviderIdentity,
    /// Identity token for the backend exchange
    pub id_token: String,
    /// Provider OAuth access token, when the provider returned one
    pub oauth_access_token: Option<String>,
}
