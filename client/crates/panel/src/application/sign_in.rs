//! Sign In Use Case
//!
//! Validates credentials against the backend and establishes the provider
//! session. An unverified email address withholds the application session
//! while leaving the provider session in place, so a subsequent
//! verification can complete without another credential prompt.

use std::sync::Arc;

use crate::application::config::PanelConfig;
use crate::domain::entity::SessionUser;
use crate::domain::gateway::{IdentityGateway, SessionBackend};
use crate::domain::value_object::Email;
use crate::error::{PanelError, PanelResult};
use crate::state::{PanelStore, SubmissionOutcome};

/// Sign in input
pub struct SignInInput {
    /// Email address
    pub email: String,
    /// Password
    pub password: String,
}

/// Sign in use case
pub struct SignInUseCase<I, B>
where
    I: IdentityGateway,
    B: SessionBackend,
{
    identity: Arc<I>,
    backend: Arc<B>,
    store: Arc<PanelStore>,
    config: Arc<PanelConfig>,
}

impl<I, B> SignInUseCase<I, B>
where
    I: IdentityGateway,
    B: SessionBackend,
{
    pub fn new(
        identity: Arc<I>,
        backend: Arc<B>,
        store: Arc<PanelStore>,
        config: Arc<PanelConfig>,
    ) -> Self {
        Self {
            identity,
            backend,
            store,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> PanelResult<SessionUser> {
        let submission = self.store.begin_submission()?;

        match self.run(input).await {
            Ok(user) => {
                tracing::info!(uid = %user.uid, "User signed in");
                self.store.finish(
                    submission,
                    SubmissionOutcome::Success {
                        user: Some(user.clone()),
                        verification_sent: false,
                    },
                );
                Ok(user)
            }
            Err(err) => {
                err.log();
                self.store.finish(
                    submission,
                    SubmissionOutcome::Failure {
                        message: err.user_message(&self.config.generic_error),
                    },
                );
                Err(err)
            }
        }
    }

    async fn run(&self, input: SignInInput) -> PanelResult<SessionUser> {
        let email = Email::new(&input.email)?;

        let grant = self.backend.login(&email, &input.password).await?;
        let identity = self
            .identity
            .sign_in_with_custom_token(&grant.custom_token)
            .await?;

        if !identity.email_verified {
            // The provider session stays established; only the application
            // session is withheld until the address is verified.
            return Err(PanelError::EmailNotVerified);
        }

        Ok(grant.user)
    }
}
