//! Application Layer
//!
//! Use cases orchestrating the gateways against the state store.

pub mod config;
pub mod oauth;
pub mod session_observer;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;

// Re-exports
pub use config::PanelConfig;
pub use oauth::OAuthSignInUseCase;
pub use session_observer::{ObserverHandle, SessionObserver};
pub use sign_in::{SignInInput, SignInUseCase};
pub use sign_out::SignOutUseCase;
pub use sign_up::{SignUpInput, SignUpUseCase};
