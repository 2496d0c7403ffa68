//! Sign Up Use Case
//!
//! Registers an account with the backend, optionally uploading a profile
//! photo first so its storage URL rides along with the registration. A
//! successful sign-up never materializes a session user: the account stays
//! signed out until the verification mail is acted on.

use std::sync::Arc;

use platform::photos::ImageData;

use crate::application::config::PanelConfig;
use crate::domain::gateway::{IdentityGateway, PhotoStore, Registration, SessionBackend};
use crate::domain::value_object::{DisplayName, Email};
use crate::error::PanelResult;
use crate::state::{PanelStore, SubmissionOutcome};

/// Sign up input
pub struct SignUpInput {
    /// Email address
    pub email: String,
    /// Password
    pub password: String,
    /// Display name
    pub display_name: String,
    /// Profile photo picked in the form
    pub photo: Option<ImageData>,
}

/// Sign up use case
pub struct SignUpUseCase<I, B, S>
where
    I: IdentityGateway,
    B: SessionBackend,
    S: PhotoStore,
{
    identity: Arc<I>,
    backend: Arc<B>,
    photos: Arc<S>,
    store: Arc<PanelStore>,
    config: Arc<PanelConfig>,
}

impl<I, B, S> SignUpUseCase<I, B, S>
where
    I: IdentityGateway,
    B: SessionBackend,
    S: PhotoStore,
{
    pub fn new(
        identity: Arc<I>,
        backend: Arc<B>,
        photos: Arc<S>,
        store: Arc<PanelStore>,
        config: Arc<PanelConfig>,
    ) -> Self {
        Self {
            identity,
            backend,
            photos,
            store,
            config,
        }
    }

    pub async fn execute(&self, input: SignUpInput) -> PanelResult<()> {
        let submission = self.store.begin_submission()?;

        match self.run(input).await {
            Ok(()) => {
                self.store.clear_photo_preview();
                self.store.finish(
                    submission,
                    SubmissionOutcome::Success {
                        user: None,
                        verification_sent: true,
                    },
                );
                Ok(())
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

    async fn run(&self, input: SignUpInput) -> PanelResult<()> {
        let email = Email::new(&input.email)?;
        let display_name = DisplayName::new(&input.display_name)?;

        // No uid exists yet, so the photo is keyed by email address.
        let photo_url = match input.photo {
            Some(image) => {
                let key = self.config.photo_key(email.as_str());
                self.photos.upload(&key, image).await?;
                Some(self.photos.download_url(&key).await?)
            }
            None => None,
        };

        let grant = self
            .backend
            .register(&Registration {
                email,
                password: input.password,
                display_name,
                photo_url,
            })
            .await?;

        let identity = self
            .identity
            .sign_in_with_custom_token(&grant.custom_token)
            .await?;
        self.identity.send_email_verification(&identity).await?;

        tracing::info!(uid = %grant.user.uid, "User registered, verification mail sent");
        Ok(())
    }
}
