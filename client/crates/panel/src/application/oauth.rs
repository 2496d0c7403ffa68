//! OAuth Sign In Use Case
//!
//! Runs a provider popup flow end to end: parse the provider name, run the
//! popup, resolve the profile photo per the provider's strategy, persist it
//! best-effort, and exchange the identity token for the application session.

use std::sync::Arc;

use platform::data_url;
use platform::photos::ImageData;

use crate::application::config::PanelConfig;
use crate::domain::entity::{PopupOutcome, SessionUser};
use crate::domain::gateway::{IdentityGateway, PhotoStore, ProviderPhotos, SessionBackend};
use crate::domain::value_object::{PhotoSource, Provider};
use crate::error::PanelResult;
use crate::state::{PanelStore, SubmissionOutcome};

/// OAuth sign in use case
pub struct OAuthSignInUseCase<I, B, S, P>
where
    I: IdentityGateway,
    B: SessionBackend,
    S: PhotoStore,
    P: ProviderPhotos,
{
    identity: Arc<I>,
    backend: Arc<B>,
    photos: Arc<S>,
    provider_photos: Arc<P>,
    store: Arc<PanelStore>,
    config: Arc<PanelConfig>,
}

impl<I, B, S, P> OAuthSignInUseCase<I, B, S, P>
where
    I: IdentityGateway,
    B: SessionBackend,
    S: PhotoStore,
    P: ProviderPhotos,
{
    pub fn new(
        identity: Arc<I>,
        backend: Arc<B>,
        photos: Arc<S>,
        provider_photos: Arc<P>,
        store: Arc<PanelStore>,
        config: Arc<PanelConfig>,
    ) -> Self {
        Self {
            identity,
            backend,
            photos,
            provider_photos,
            store,
            config,
        }
    }

    pub async fn execute(&self, provider_name: &str) -> PanelResult<SessionUser> {
        // Unsupported names fail before the popup or any network call.
        let provider: Provider = provider_name.parse()?;

        let submission = self.store.begin_submission()?;

        match self.run(provider).await {
            Ok(user) => {
                tracing::info!(uid = %user.uid, provider = %provider, "OAuth sign-in completed");
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

    async fn run(&self, provider: Provider) -> PanelResult<SessionUser> {
        let outcome = self
            .identity
            .sign_in_with_popup(&provider.auth_request())
            .await?;

        let photo_url = self.resolve_photo(provider, &outcome).await;
        if let Some(url) = &photo_url {
            self.persist_photo(outcome.identity.uid.as_str(), url).await;
        }

        let user = self.backend.exchange_id_token(&outcome.id_token).await?;
        Ok(user.with_picture(photo_url))
    }

    /// Resolve the provider photo per the provider's strategy
    ///
    /// Photo failures never fail the sign-in; they log and resolve to
    /// `None`.
    async fn resolve_photo(&self, provider: Provider, outcome: &PopupOutcome) -> Option<String> {
        match provider.photo_source() {
            PhotoSource::IdentityResult => outcome.identity.photo_url.clone(),
            PhotoSource::GraphBinary => {
                let token = outcome.oauth_access_token.as_deref()?;
                match self.provider_photos.graph_photo(token).await {
                    Ok(image) => Some(data_url::to_data_url(&image)),
                    Err(err) => {
                        tracing::warn!(error = %err, "Microsoft Graph photo fetch failed");
                        None
                    }
                }
            }
            PhotoSource::PictureRedirect => {
                let token = outcome.oauth_access_token.as_deref()?;
                match self.provider_photos.picture_redirect(token).await {
                    Ok(url) => Some(url),
                    Err(err) => {
                        tracing::warn!(error = %err, "Facebook picture resolution failed");
                        None
                    }
                }
            }
        }
    }

    /// Best-effort copy of the provider photo into our storage
    ///
    /// Keyed by uid so the session observer finds it on later sign-ins.
    async fn persist_photo(&self, uid: &str, url: &str) {
        let image: ImageData = match data_url::parse_data_url(url) {
            Some(image) => image,
            None => match self.provider_photos.fetch_image(url).await {
                Ok(image) => image,
                Err(err) => {
                    tracing::warn!(error = %err, "Skipping photo persistence, fetch failed");
                    return;
                }
            },
        };

        let key = self.config.photo_key(uid);
        if let Err(err) = self.photos.upload(&key, image).await {
            tracing::warn!(error = %err, key = %key, "Photo persistence failed");
        }
    }
}
