//! Session User Entity
//!
//! In-memory record of the currently authenticated application user,
//! deserialized from backend responses. At most one is materialized at a
//! time: a new sign-in overwrites it, sign-out clears it unconditionally.

use kernel::id::UserUid;
use serde::{Deserialize, Serialize};

/// Session user entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Identity-provider-assigned uid
    pub uid: UserUid,
    /// Display name
    pub name: String,
    /// Email address the backend has on record
    pub email: String,
    /// Provider the account was created through ("password", "google.com", ...)
    pub provider: String,
    /// Profile picture URL, resolved best-effort
    #[serde(default)]
    pub picture: Option<String>,
}

impl SessionUser {
    /// Overlay a resolved photo URL, keeping an existing picture otherwise
    pub fn with_picture(mut self, picture: Option<String>) -> Self {
        if picture.is_some() {
            self.picture = picture;
        }
        self
    }
}
