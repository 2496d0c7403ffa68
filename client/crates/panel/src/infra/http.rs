//! HTTP Gateway Implementations
//!
//! Concrete gateways over `platform::http`. The identity gateway has no
//! HTTP implementation here; it wraps whatever identity SDK the embedder
//! runs and is provided at assembly time.

use platform::http::Http;
use platform::photos::{self, ImageData};

use crate::domain::entity::SessionUser;
use crate::domain::gateway::{
    CredentialGrant, PhotoStore, ProviderPhotos, Registration, SessionBackend,
};
use crate::domain::value_object::Email;
use crate::error::{PanelError, PanelResult};
use crate::infra::dto::{GrantBody, LoginBody, RegisterBody, TokenBody, UserEnvelope};

/// Session backend over HTTP
#[derive(Debug, Clone)]
pub struct HttpSessionBackend {
    http: Http,
    base_url: String,
}

impl HttpSessionBackend {
    pub fn new(http: Http, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl SessionBackend for HttpSessionBackend {
    async fn register(&self, registration: &Registration) -> PanelResult<CredentialGrant> {
        let body = RegisterBody {
            email: registration.email.as_str().to_string(),
            password: registration.password.clone(),
            display_name: registration.display_name.as_str().to_string(),
            photo_url: registration.photo_url.clone(),
        };
        let grant: GrantBody = self.http.post_json(&self.url("/auth/register"), &body).await?;
        Ok(grant.into())
    }

    async fn login(&self, email: &Email, password: &str) -> PanelResult<CredentialGrant> {
        let body = LoginBody {
            email: email.as_str().to_string(),
            password: password.to_string(),
        };
        let grant: GrantBody = self.http.post_json(&self.url("/auth/login"), &body).await?;
        Ok(grant.into())
    }

    async fn exchange_id_token(&self, id_token: &str) -> PanelResult<SessionUser> {
        let body = TokenBody {
            id_token: id_token.to_string(),
        };
        let envelope: UserEnvelope = self
            .http
            .post_json(&self.url("/auth/firebase-login"), &body)
            .await?;
        Ok(envelope.user)
    }
}

/// Blob storage over HTTP (PUT/HEAD against `{base_url}/{key}`)
#[derive(Debug, Clone)]
pub struct HttpPhotoStore {
    http: Http,
    base_url: String,
}

impl HttpPhotoStore {
    pub fn new(http: Http, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    fn object_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), key)
    }
}

impl PhotoStore for HttpPhotoStore {
    async fn upload(&self, key: &str, image: ImageData) -> PanelResult<()> {
        let url = self.object_url(key);
        self.http
            .put_bytes(&url, image.bytes, &image.content_type)
            .await
            .map_err(|err| PanelError::Storage(err.to_string()))
    }

    async fn download_url(&self, key: &str) -> PanelResult<String> {
        let url = self.object_url(key);
        match self.http.probe(&url).await {
            Ok(true) => Ok(url),
            Ok(false) => Err(PanelError::PhotoNotFound(key.to_string())),
            Err(err) if err.is_not_found() => Err(PanelError::PhotoNotFound(key.to_string())),
            Err(err) => Err(PanelError::Storage(err.to_string())),
        }
    }
}

/// Provider photo endpoints over HTTP
#[derive(Debug, Clone, Default)]
pub struct HttpProviderPhotos {
    http: Http,
}

impl HttpProviderPhotos {
    pub fn new(http: Http) -> Self {
        Self { http }
    }
}

impl ProviderPhotos for HttpProviderPhotos {
    async fn graph_photo(&self, access_token: &str) -> PanelResult<ImageData> {
        photos::fetch_graph_photo(&self.http, access_token)
            .await
            .map_err(PanelError::from)
    }

    async fn picture_redirect(&self, access_token: &str) -> PanelResult<String> {
        photos::resolve_facebook_picture(&self.http, access_token)
            .await
            .map_err(PanelError::from)
    }

    async fn fetch_image(&self, url: &str) -> PanelResult<ImageData> {
        photos::fetch_image(&self.http, url)
            .await
            .map_err(PanelError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_url_join() {
        let backend = HttpSessionBackend::new(Http::default(), "http://localhost:5000/");
        assert_eq!(
            backend.url("/auth/login"),
            "http://localhost:5000/auth/login"
        );
    }

    #[test]
    fn test_photo_object_url() {
        let store = HttpPhotoStore::new(Http::default(), "https://storage.example.com");
        assert_eq!(
            store.object_url("user_photos/u1"),
            "https://storage.example.com/user_photos/u1"
        );
    }
}
