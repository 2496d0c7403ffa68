//! Panel State Store
//!
//! Explicit application state for the auth panel, injected into every use
//! case. Embedding UI code subscribes to snapshots through a `watch`
//! channel and renders from them.
//!
//! Submissions are guarded: `begin_submission` rejects a second submission
//! while one is loading, and every submission carries a generation token so
//! a completion that outlives a `reset` (component teardown) is discarded
//! instead of mutating fresh state.

use std::sync::Mutex;

use tokio::sync::watch;

use crate::domain::entity::SessionUser;
use crate::error::{PanelError, PanelResult};

/// Which panel is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelSide {
    #[default]
    SignIn,
    SignUp,
}

/// Snapshot of the panel view state
#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    /// Active panel
    pub side: PanelSide,
    /// A handler or the session observer is in flight
    pub loading: bool,
    /// User-visible error message
    pub error: Option<String>,
    /// A verification mail was dispatched by the last sign-up
    pub verification_sent: bool,
    /// Preview URL for the photo picked in the sign-up form
    pub photo_preview: Option<String>,
    /// The materialized session user, at most one
    pub user: Option<SessionUser>,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            side: PanelSide::SignIn,
            // True until the session observer settles the initial auth state
            loading: true,
            error: None,
            verification_sent: false,
            photo_preview: None,
            user: None,
        }
    }
}

/// Token for an in-flight submission
///
/// Not cloneable: exactly one terminal `finish` call per submission.
#[derive(Debug)]
pub struct Submission {
    generation: u64,
}

/// Terminal result of a submission
#[derive(Debug, Clone)]
pub enum SubmissionOutcome {
    Success {
        /// Session user to materialize (`None` clears it, e.g. sign-up)
        user: Option<SessionUser>,
        verification_sent: bool,
    },
    Failure {
        message: String,
    },
}

struct Inner {
    state: PanelState,
    generation: u64,
}

/// Panel state store
pub struct PanelStore {
    inner: Mutex<Inner>,
    tx: watch::Sender<PanelState>,
}

impl PanelStore {
    pub fn new() -> Self {
        let state = PanelState::default();
        let (tx, _rx) = watch::channel(state.clone());
        Self {
            inner: Mutex::new(Inner {
                state,
                generation: 0,
            }),
            tx,
        }
    }

    /// Subscribe to state snapshots
    pub fn subscribe(&self) -> watch::Receiver<PanelState> {
        self.tx.subscribe()
    }

    /// Current state snapshot
    pub fn snapshot(&self) -> PanelState {
        self.inner.lock().expect("panel state poisoned").state.clone()
    }

    fn mutate<R>(&self, f: impl FnOnce(&mut Inner) -> R) -> R {
        let mut inner = self.inner.lock().expect("panel state poisoned");
        let result = f(&mut inner);
        self.tx.send_replace(inner.state.clone());
        result
    }

    // ========================================================================
    // Panel toggles
    // ========================================================================

    /// Switch to the sign-in panel; rejected while loading
    pub fn show_sign_in(&self) -> bool {
        self.set_side(PanelSide::SignIn)
    }

    /// Switch to the sign-up panel; rejected while loading
    pub fn show_sign_up(&self) -> bool {
        self.set_side(PanelSide::SignUp)
    }

    fn set_side(&self, side: PanelSide) -> bool {
        self.mutate(|inner| {
            if inner.state.loading {
                return false;
            }
            inner.state.side = side;
            true
        })
    }

    // ========================================================================
    // Submission lifecycle
    // ========================================================================

    /// Start a submission: sets loading, clears error and verification flag
    ///
    /// Fails with `SubmissionInFlight` while another submission is loading.
    pub fn begin_submission(&self) -> PanelResult<Submission> {
        self.mutate(|inner| {
            if inner.state.loading {
                return Err(PanelError::SubmissionInFlight);
            }
            inner.generation += 1;
            inner.state.loading = true;
            inner.state.error = None;
            inner.state.verification_sent = false;
            Ok(Submission {
                generation: inner.generation,
            })
        })
    }

    /// Terminate a submission, clearing the loading flag
    ///
    /// A stale token (the store was reset since `begin_submission`) is
    /// discarded without touching the state.
    pub fn finish(&self, submission: Submission, outcome: SubmissionOutcome) {
        self.mutate(|inner| {
            if submission.generation != inner.generation {
                tracing::debug!(
                    generation = submission.generation,
                    current = inner.generation,
                    "Discarding stale submission completion"
                );
                return;
            }
            inner.state.loading = false;
            match outcome {
                SubmissionOutcome::Success {
                    user,
                    verification_sent,
                } => {
                    inner.state.user = user;
                    inner.state.verification_sent = verification_sent;
                }
                SubmissionOutcome::Failure { message } => {
                    inner.state.error = Some(message);
                }
            }
        });
    }

    /// Teardown: bump the generation and restore the initial state
    ///
    /// In-flight submissions become stale and their completions are
    /// discarded.
    pub fn reset(&self) {
        self.mutate(|inner| {
            inner.generation += 1;
            inner.state = PanelState::default();
        });
    }

    // ========================================================================
    // Observer path (auth-state changes are authoritative)
    // ========================================================================

    /// Materialize or clear the session user
    pub fn set_user(&self, user: Option<SessionUser>) {
        self.mutate(|inner| inner.state.user = user);
    }

    /// Surface an error message
    pub fn set_error(&self, message: impl Into<String>) {
        self.mutate(|inner| inner.state.error = Some(message.into()));
    }

    /// Mark the auth state as settled (loading off)
    pub fn settle(&self) {
        self.mutate(|inner| inner.state.loading = false);
    }

    // ========================================================================
    // Photo preview
    // ========================================================================

    pub fn set_photo_preview(&self, url: impl Into<String>) {
        self.mutate(|inner| inner.state.photo_preview = Some(url.into()));
    }

    pub fn clear_photo_preview(&self) {
        self.mutate(|inner| inner.state.photo_preview = None);
    }
}

impl Default for PanelStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settled_store() -> PanelStore {
        let store = PanelStore::new();
        store.settle();
        store
    }

    #[test]
    fn test_initial_state_is_loading_sign_in() {
        let state = PanelStore::new().snapshot();
        assert_eq!(state.side, PanelSide::SignIn);
        assert!(state.loading);
        assert!(state.user.is_none());
        assert!(state.error.is_none());
        assert!(!state.verification_sent);
    }

    #[test]
    fn test_toggle_blocked_while_loading() {
        let store = PanelStore::new();
        assert!(!store.show_sign_up());
        assert_eq!(store.snapshot().side, PanelSide::SignIn);

        store.settle();
        assert!(store.show_sign_up());
        assert_eq!(store.snapshot().side, PanelSide::SignUp);

        let _sub = store.begin_submission().unwrap();
        assert!(!store.show_sign_in());
        assert_eq!(store.snapshot().side, PanelSide::SignUp);
    }

    #[test]
    fn test_begin_clears_error_and_verification() {
        let store = settled_store();
        store.set_error("boom");
        let sub = store.begin_submission().unwrap();
        store.finish(
            sub,
            SubmissionOutcome::Success {
                user: None,
                verification_sent: true,
            },
        );
        let state = store.snapshot();
        assert!(state.verification_sent);
        assert!(state.error.is_none());

        let sub = store.begin_submission().unwrap();
        let state = store.snapshot();
        assert!(state.loading);
        assert!(!state.verification_sent);
        store.finish(
            sub,
            SubmissionOutcome::Failure {
                message: "nope".into(),
            },
        );
    }

    #[test]
    fn test_second_submission_rejected_while_in_flight() {
        let store = settled_store();
        let first = store.begin_submission().unwrap();
        assert!(matches!(
            store.begin_submission(),
            Err(PanelError::SubmissionInFlight)
        ));
        store.finish(
            first,
            SubmissionOutcome::Success {
                user: None,
                verification_sent: false,
            },
        );
        assert!(store.begin_submission().is_ok());
    }

    #[test]
    fn test_loading_false_after_success_and_failure() {
        let store = settled_store();

        let sub = store.begin_submission().unwrap();
        assert!(store.snapshot().loading);
        store.finish(
            sub,
            SubmissionOutcome::Success {
                user: None,
                verification_sent: false,
            },
        );
        assert!(!store.snapshot().loading);

        let sub = store.begin_submission().unwrap();
        assert!(store.snapshot().loading);
        store.finish(
            sub,
            SubmissionOutcome::Failure {
                message: "denied".into(),
            },
        );
        let state = store.snapshot();
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("denied"));
    }

    #[test]
    fn test_stale_completion_discarded_after_reset() {
        let store = settled_store();
        let sub = store.begin_submission().unwrap();
        store.reset();

        store.finish(
            sub,
            SubmissionOutcome::Failure {
                message: "late failure".into(),
            },
        );
        let state = store.snapshot();
        assert!(state.error.is_none(), "stale completion must not apply");
    }

    #[test]
    fn test_new_sign_in_overwrites_previous_user() {
        let store = settled_store();
        let first: SessionUser = serde_json::from_str(
            r#"{"uid":"u1","name":"A","email":"a@x.co","provider":"password"}"#,
        )
        .unwrap();
        let second: SessionUser = serde_json::from_str(
            r#"{"uid":"u2","name":"B","email":"b@x.co","provider":"google.com"}"#,
        )
        .unwrap();

        store.set_user(Some(first));
        store.set_user(Some(second.clone()));
        assert_eq!(store.snapshot().user, Some(second));

        store.set_user(None);
        assert!(store.snapshot().user.is_none());
    }

    #[test]
    fn test_photo_preview() {
        let store = settled_store();
        store.set_photo_preview("blob://preview");
        assert_eq!(
            store.snapshot().photo_preview.as_deref(),
            Some("blob://preview")
        );
        store.clear_photo_preview();
        assert!(store.snapshot().photo_preview.is_none());
    }

    #[test]
    fn test_subscribe_sees_updates() {
        let store = settled_store();
        let rx = store.subscribe();
        store.set_error("shown");
        assert_eq!(rx.borrow().error.as_deref(), Some("shown"));
    }
}
