//! HTTP client utilities
//!
//! Thin wrapper around `reqwest` shared by every outbound call. Backend
//! error responses are expected to carry a JSON `detail` field; when present
//! it is surfaced verbatim, otherwise the HTTP reason phrase stands in.

use std::time::Duration;

use http::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Error from an outbound HTTP call
#[derive(Debug, Clone, thiserror::Error)]
pub enum HttpError {
    /// No usable response (connect failure, timeout, aborted body)
    #[error("request failed: {0}")]
    Transport(String),

    /// Server replied with a non-success status
    #[error("{detail}")]
    Status { status: u16, detail: String },

    /// Response arrived but the body could not be decoded
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl HttpError {
    /// True for a plain 404 reply
    pub fn is_not_found(&self) -> bool {
        matches!(self, HttpError::Status { status: 404, .. })
    }
}

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            HttpError::Decode(err.to_string())
        } else {
            HttpError::Transport(err.to_string())
        }
    }
}

/// Extract the user-facing detail from an error response body
///
/// Backends reply with `{"detail": "..."}`; anything else falls back to the
/// standard reason phrase for the status code.
pub fn detail_from_body(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(detail) = value.get("detail").and_then(|d| d.as_str()) {
            return detail.to_string();
        }
    }
    StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Request failed")
        .to_string()
}

/// Shared HTTP client
///
/// Cheap to clone; all calls go through the same connection pool.
#[derive(Debug, Clone)]
pub struct Http {
    client: reqwest::Client,
}

impl Http {
    /// Build a client with the given per-request timeout
    pub fn new(timeout: Duration) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HttpError::Transport(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an existing `reqwest` client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// POST a JSON body and decode a JSON response
    pub async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T, HttpError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.client.post(url).json(body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HttpError::Status {
                status: status.as_u16(),
                detail: detail_from_body(status.as_u16(), &body),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| HttpError::Decode(e.to_string()))
    }

    /// GET a binary body, optionally with a bearer token
    ///
    /// Returns the bytes and the response `Content-Type`.
    pub async fn get_bytes(
        &self,
        url: &str,
        bearer: Option<&str>,
    ) -> Result<(Vec<u8>, String), HttpError> {
        let mut request = self.client.get(url);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HttpError::Status {
                status: status.as_u16(),
                detail: detail_from_body(status.as_u16(), &body),
            });
        }

        let content_type = response
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();

        let bytes = response.bytes().await?.to_vec();
        Ok((bytes, content_type))
    }

    /// GET a URL and return the final URL after redirects
    pub async fn get_final_url(
        &self,
        url: &str,
        bearer: Option<&str>,
    ) -> Result<String, HttpError> {
        let mut request = self.client.get(url);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HttpError::Status {
                status: status.as_u16(),
                detail: detail_from_body(status.as_u16(), &body),
            });
        }

        Ok(response.url().to_string())
    }

    /// PUT a binary body
    pub async fn put_bytes(
        &self,
        url: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), HttpError> {
        let response = self
            .client
            .put(url)
            .header(http::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HttpError::Status {
                status: status.as_u16(),
                detail: detail_from_body(status.as_u16(), &body),
            });
        }
        Ok(())
    }

    /// Check whether a resource exists (HEAD)
    ///
    /// `Ok(false)` on a 404, error on any other failure.
    pub async fn probe(&self, url: &str) -> Result<bool, HttpError> {
        let response = self.client.head(url).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        if !status.is_success() {
            return Err(HttpError::Status {
                status: status.as_u16(),
                detail: detail_from_body(status.as_u16(), ""),
            });
        }
        Ok(true)
    }
}

impl Default for Http {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT).expect("default reqwest client should build")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_from_json_body() {
        let detail = detail_from_body(400, r#"{"detail":"Email already registered"}"#);
        assert_eq!(detail, "Email already registered");
    }

    #[test]
    fn test_detail_ignores_non_string_field() {
        let detail = detail_from_body(400, r#"{"detail":{"code":1}}"#);
        assert_eq!(detail, "Bad Request");
    }

    #[test]
    fn test_detail_falls_back_to_reason_phrase() {
        assert_eq!(detail_from_body(401, "not json"), "Unauthorized");
        assert_eq!(detail_from_body(500, ""), "Internal Server Error");
    }

    #[test]
    fn test_detail_unknown_status() {
        assert_eq!(detail_from_body(599, ""), "Request failed");
    }

    #[test]
    fn test_is_not_found() {
        let err = HttpError::Status {
            status: 404,
            detail: "Not Found".into(),
        };
        assert!(err.is_not_found());

        let err = HttpError::Status {
            status: 500,
            detail: "Internal Server Error".into(),
        };
        assert!(!err.is_not_found());
        assert!(!HttpError::Transport("timeout".into()).is_not_found());
    }
}
