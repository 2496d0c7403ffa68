//! Domain entities

pub mod identity;
pub mod session_user;

pub use identity::{AuthState, PopupOutcome, ProviderIdentity};
pub use session_user::SessionUser;
