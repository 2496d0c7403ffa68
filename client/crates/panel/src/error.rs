//! Panel Error Types
//!
//! This module provides panel-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::http::HttpError;
use thiserror::Error;

/// Panel-specific result type alias
pub type PanelResult<T> = Result<T, PanelError>;

/// Panel-specific error variants
#[derive(Debug, Error)]
pub enum PanelError {
    /// Provider name is not one of the supported OAuth providers
    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),

    /// Token exchange succeeded but the address is unverified
    #[error("Please verify your email before signing in.")]
    EmailNotVerified,

    /// Backend rejected the request; `detail` is shown verbatim
    #[error("{detail}")]
    Backend { status: u16, detail: String },

    /// Transport-level failure, no usable response
    #[error("Network error: {0}")]
    Network(String),

    /// Identity provider failure (popup cancelled, token exchange failed)
    #[error("Identity provider error: {0}")]
    IdentityProvider(String),

    /// No stored photo under the given key (expected, non-fatal)
    #[error("No stored photo for {0}")]
    PhotoNotFound(String),

    /// Blob storage failure other than a lookup miss
    #[error("Storage error: {0}")]
    Storage(String),

    /// Input rejected before any network call
    #[error("{0}")]
    Validation(String),

    /// Another submission is already in flight
    #[error("Another submission is already in progress")]
    SubmissionInFlight,

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PanelError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PanelError::UnsupportedProvider(_) => ErrorKind::Unsupported,
            PanelError::EmailNotVerified => ErrorKind::PolicyRejected,
            PanelError::Backend { .. } => ErrorKind::Backend,
            PanelError::Network(_) => ErrorKind::Network,
            PanelError::IdentityProvider(_) => ErrorKind::IdentityProvider,
            PanelError::PhotoNotFound(_) => ErrorKind::StorageMiss,
            PanelError::Storage(_) => ErrorKind::Storage,
            PanelError::Validation(_) => ErrorKind::Validation,
            PanelError::SubmissionInFlight => ErrorKind::PolicyRejected,
            PanelError::Internal(_) => ErrorKind::InternalError,
        }
    }

    /// User-facing message for the state store
    ///
    /// Backend detail is surfaced verbatim; transport and internal failures
    /// collapse to the configured generic message.
    pub fn user_message(&self, generic: &str) -> String {
        match self {
            PanelError::Backend { detail, .. } => detail.clone(),
            PanelError::Network(_) | PanelError::Internal(_) => generic.to_string(),
            other => other.to_string(),
        }
    }

    /// Expected error that handlers swallow with a fallback
    pub fn is_expected(&self) -> bool {
        self.kind().is_expected()
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            PanelError::Internal(msg) => {
                tracing::error!(message = %msg, "Panel internal error");
            }
            PanelError::Backend { status, detail } => {
                tracing::warn!(status = status, detail = %detail, "Backend rejected request");
            }
            PanelError::Network(msg) => {
                tracing::warn!(message = %msg, "Network failure");
            }
            PanelError::IdentityProvider(msg) => {
                tracing::warn!(message = %msg, "Identity provider failure");
            }
            PanelError::PhotoNotFound(key) => {
                tracing::debug!(key = %key, "No stored photo, falling back");
            }
            _ => {
                tracing::debug!(error = %self, "Panel error");
            }
        }
    }
}

impl From<HttpError> for PanelError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Transport(msg) => PanelError::Network(msg),
            HttpError::Status { status, detail } => PanelError::Backend { status, detail },
            HttpError::Decode(msg) => PanelError::Internal(msg),
        }
    }
}

impl From<AppError> for PanelError {
    fn from(err: AppError) -> Self {
        let message = err.message().to_string();
        match err.kind() {
            ErrorKind::Validation => PanelError::Validation(message),
            ErrorKind::Network => PanelError::Network(message),
            ErrorKind::Backend => PanelError::Backend {
                status: 0,
                detail: message,
            },
            ErrorKind::IdentityProvider => PanelError::IdentityProvider(message),
            ErrorKind::Storage => PanelError::Storage(message),
            ErrorKind::StorageMiss => PanelError::PhotoNotFound(message),
            ErrorKind::Unsupported => PanelError::UnsupportedProvider(message),
            _ => PanelError::Internal(message),
        }
    }
}
