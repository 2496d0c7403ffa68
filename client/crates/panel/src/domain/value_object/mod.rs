//! Domain value objects

pub mod display_name;
pub mod email;
pub mod provider;

pub use display_name::DisplayName;
pub use email::Email;
pub use provider::{OAuthRequest, PhotoSource, Provider};
