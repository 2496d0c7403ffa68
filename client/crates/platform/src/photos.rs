//! Provider photo endpoints
//!
//! Profile photo retrieval differs per OAuth provider: Microsoft serves the
//! photo as an authenticated binary from Graph, Facebook serves a redirect
//! whose resolved URL is the usable picture, and the remaining providers
//! embed a photo URL in the identity result (nothing to fetch here).

use crate::http::{Http, HttpError};

/// Microsoft Graph profile photo endpoint (binary body)
pub const MS_GRAPH_PHOTO_URL: &str = "https://graph.microsoft.com/v1.0/me/photo/$value";

/// Facebook picture-redirect endpoint
pub const FACEBOOK_PICTURE_URL: &str =
    "https://graph.facebook.com/me/picture?height=200&width=200";

/// An image held in memory, with its MIME type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

impl ImageData {
    pub fn new(bytes: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            bytes,
            content_type: content_type.into(),
        }
    }
}

/// Fetch the Microsoft profile photo as binary data
pub async fn fetch_graph_photo(http: &Http, access_token: &str) -> Result<ImageData, HttpError> {
    let (bytes, content_type) = http.get_bytes(MS_GRAPH_PHOTO_URL, Some(access_token)).await?;
    Ok(ImageData::new(bytes, content_type))
}

/// Build the Facebook picture request URL for an access token
pub fn facebook_picture_url(access_token: &str) -> String {
    format!("{}&access_token={}", FACEBOOK_PICTURE_URL, access_token)
}

/// Resolve the Facebook picture redirect to its final URL
pub async fn resolve_facebook_picture(
    http: &Http,
    access_token: &str,
) -> Result<String, HttpError> {
    http.get_final_url(&facebook_picture_url(access_token), Some(access_token))
        .await
}

/// Fetch an image from an arbitrary URL (for re-upload into storage)
pub async fn fetch_image(http: &Http, url: &str) -> Result<ImageData, HttpError> {
    let (bytes, content_type) = http.get_bytes(url, None).await?;
    Ok(ImageData::new(bytes, content_type))
}
