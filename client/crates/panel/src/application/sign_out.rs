//! Sign Out Use Case
//!
//! Ends the provider-level session and clears the session user. Not a
//! submission: sign-out does not touch the loading flag and is not guarded
//! against in-flight form handlers.

use std::sync::Arc;

use crate::domain::gateway::IdentityGateway;
use crate::error::PanelResult;
use crate::state::PanelStore;

/// Sign out use case
pub struct SignOutUseCase<I>
where
    I: IdentityGateway,
{
    identity: Arc<I>,
    store: Arc<PanelStore>,
}

impl<I> SignOutUseCase<I>
where
    I: IdentityGateway,
{
    pub fn new(identity: Arc<I>, store: Arc<PanelStore>) -> Self {
        Self { identity, store }
    }

    pub async fn execute(&self) -> PanelResult<()> {
        match self.identity.sign_out().await {
            Ok(()) => {
                self.store.set_user(None);
                tracing::info!("User signed out");
                Ok(())
            }
            Err(err) => {
                err.log();
                self.store.set_error("Failed to sign out. Please try again.");
                Err(err)
            }
        }
    }
}
