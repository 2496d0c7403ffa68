//! Gateway Traits
//!
//! Interfaces for the external collaborators. Implementations live in the
//! infrastructure layer (HTTP) and in test mocks.

use crate::domain::entity::{PopupOutcome, ProviderIdentity, SessionUser};
use crate::domain::value_object::{DisplayName, Email, OAuthRequest};
use crate::error::PanelResult;
use platform::photos::ImageData;

/// Registration payload for the backend
#[derive(Debug, Clone)]
pub struct Registration {
    pub email: Email,
    pub password: String,
    pub display_name: DisplayName,
    /// Resolved storage URL of the uploaded photo, when one was provided
    pub photo_url: Option<String>,
}

/// Backend response carrying a custom sign-in token and the user record
#[derive(Debug, Clone)]
pub struct CredentialGrant {
    /// Custom token to exchange with the identity provider
    pub custom_token: String,
    /// The backend's user record
    pub user: SessionUser,
}

/// Identity provider gateway trait
///
/// Auth-state changes are delivered through a `watch` channel owned by the
/// implementation; the session observer consumes the receiver and teardown
/// is dropping the observer handle.
#[trait_variant::make(IdentityGateway: Send)]
pub trait LocalIdentityGateway {
    /// Request an identity token for an established identity
    async fn issue_id_token(&self, identity: &ProviderIdentity) -> PanelResult<String>;

    /// Exchange a backend-issued custom token for a provider session
    async fn sign_in_with_custom_token(&self, token: &str) -> PanelResult<ProviderIdentity>;

    /// Run a provider popup flow to completion
    async fn sign_in_with_popup(&self, request: &OAuthRequest) -> PanelResult<PopupOutcome>;

    /// Dispatch a verification mail for the given identity
    async fn send_email_verification(&self, identity: &ProviderIdentity) -> PanelResult<()>;

    /// End the provider-level session
    async fn sign_out(&self) -> PanelResult<()>;
}

/// Session backend gateway trait
#[trait_variant::make(SessionBackend: Send)]
pub trait LocalSessionBackend {
    /// Register a new account; returns a custom token and the user record
    async fn register(&self, registration: &Registration) -> PanelResult<CredentialGrant>;

    /// Validate credentials; returns a custom token and the user record
    async fn login(&self, email: &Email, password: &str) -> PanelResult<CredentialGrant>;

    /// Exchange an identity token for the application session user
    async fn exchange_id_token(&self, id_token: &str) -> PanelResult<SessionUser>;
}

/// Blob storage gateway trait for profile photos
#[trait_variant::make(PhotoStore: Send)]
pub trait LocalPhotoStore {
    /// Store an image under the given key
    async fn upload(&self, key: &str, image: ImageData) -> PanelResult<()>;

    /// Resolve the public URL for a stored key
    ///
    /// A missing object is `PanelError::PhotoNotFound`.
    async fn download_url(&self, key: &str) -> PanelResult<String>;
}

/// Provider photo endpoint gateway trait
#[trait_variant::make(ProviderPhotos: Send)]
pub trait LocalProviderPhotos {
    /// Authenticated binary fetch of the Microsoft Graph photo
    async fn graph_photo(&self, access_token: &str) -> PanelResult<ImageData>;

    /// Resolve the Facebook picture redirect to its final URL
    async fn picture_redirect(&self, access_token: &str) -> PanelResult<String>;

    /// Fetch an image from an arbitrary URL for re-upload
    async fn fetch_image(&self, url: &str) -> PanelResult<ImageData>;
}
