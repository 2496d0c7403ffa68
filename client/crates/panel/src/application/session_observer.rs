//! Session Observer
//!
//! Consumes the identity gateway's auth-state channel and keeps the store's
//! session user authoritative: every established identity is exchanged for
//! an application session, with the stored profile photo overlaid when one
//! exists.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::application::config::PanelConfig;
use crate::domain::entity::{AuthState, ProviderIdentity, SessionUser};
use crate::domain::gateway::{IdentityGateway, PhotoStore, SessionBackend};
use crate::error::PanelResult;
use crate::state::PanelStore;

/// Session observer
pub struct SessionObserver<I, B, S>
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

impl<I, B, S> SessionObserver<I, B, S>
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

    /// Apply one auth-state change to the store
    ///
    /// Always settles the loading flag, including on the initial `None`.
    pub async fn handle_change(&self, change: AuthState) {
        match change {
            Some(identity) => match self.resolve_session(&identity).await {
                Ok(user) => {
                    tracing::info!(uid = %user.uid, provider = %user.provider, "Session established");
                    self.store.set_user(Some(user));
                }
                Err(err) => {
                    err.log();
                    self.store
                        .set_error(err.user_message(&self.config.generic_error));
                }
            },
            None => self.store.set_user(None),
        }
        self.store.settle();
    }

    async fn resolve_session(&self, identity: &ProviderIdentity) -> PanelResult<SessionUser> {
        let token = self.identity.issue_id_token(identity).await?;
        let user = self.backend.exchange_id_token(&token).await?;
        let picture = self.resolve_picture(identity, &user).await;
        Ok(user.with_picture(picture))
    }

    /// Stored photo wins over the provider photo; every lookup failure
    /// falls back to the provider URL.
    async fn resolve_picture(
        &self,
        identity: &ProviderIdentity,
        user: &SessionUser,
    ) -> Option<String> {
        let key = self.config.photo_key(user.uid.as_str());
        match self.photos.download_url(&key).await {
            Ok(url) => Some(url),
            Err(err) if err.is_expected() => {
                tracing::debug!(key = %key, "No stored photo, using provider photo");
                identity.photo_url.clone()
            }
            Err(err) => {
                tracing::warn!(error = %err, key = %key, "Photo lookup failed, using provider photo");
                identity.photo_url.clone()
            }
        }
    }
}

impl<I, B, S> SessionObserver<I, B, S>
where
    I: IdentityGateway + Send + Sync + 'static,
    B: SessionBackend + Send + Sync + 'static,
    S: PhotoStore + Send + Sync + 'static,
{
    /// Spawn the observer loop on the runtime
    ///
    /// Processes the receiver's current value immediately, then every
    /// subsequent change. Dropping the returned handle stops the loop.
    pub fn spawn(self: Arc<Self>, mut rx: watch::Receiver<AuthState>) -> ObserverHandle {
        let task = tokio::spawn(async move {
            loop {
                let change = rx.borrow_and_update().clone();
                self.handle_change(change).await;
                if rx.changed().await.is_err() {
                    break;
                }
            }
        });
        ObserverHandle { task }
    }
}

/// Abort-on-drop handle for a running session observer
pub struct ObserverHandle {
    task: JoinHandle<()>,
}

impl ObserverHandle {
    /// Stop the observer loop
    pub fn shutdown(self) {
        self.task.abort();
    }
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
