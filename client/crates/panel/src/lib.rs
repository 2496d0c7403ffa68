//! AuthPanel - Client-side authentication/session bootstrap
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, gateway traits
//! - `application/` - Use cases orchestrating the gateways
//! - `infra/` - HTTP implementations of the gateways
//! - `state` - Injected view-state store with submission guard
//!
//! ## Features
//! - Email sign-up with optional profile photo upload and verification mail
//! - Email sign-in gated on verified addresses
//! - OAuth sign-in (Google, Facebook, GitHub, Microsoft) with
//!   provider-specific photo resolution
//! - Session bootstrap from identity-provider auth-state changes
//!
//! ## Policy Model
//! - Registration never auto-logs-in; the session user stays unset until
//!   the address is verified
//! - An unverified sign-in keeps the provider-level session established but
//!   withholds the application session
//! - Stored profile photos win over provider photo URLs; lookup misses fall
//!   back silently

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod state;


// Re-exports for convenience
pub use application::config::PanelConfig;
pub use error::{PanelError, PanelResult};
pub use state::{PanelSide, PanelState, PanelStore, Submission, SubmissionOutcome};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
}

pub mod gateways {
    pub use crate::domain::gateway::*;
    pub use crate::infra::http::*;
}
