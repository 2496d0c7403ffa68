//! Data-URL encoding for in-memory images
//!
//! Stands in for browser object URLs: an image fetched as bytes (the
//! Microsoft Graph photo) becomes a self-contained `data:` reference that
//! stays usable even when best-effort storage persistence fails.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::photos::ImageData;

/// Encode an image as a `data:` URL
pub fn to_data_url(image: &ImageData) -> String {
    format!(
        "data:{};base64,{}",
        image.content_type,
        STANDARD.encode(&image.bytes)
    )
}

/// True if the URL is a `data:` reference
pub fn is_data_url(url: &str) -> bool {
    url.starts_with("data:")
}

/// Decode a `data:` URL back into image bytes
///
/// Returns `None` for non-data URLs or malformed payloads.
pub fn parse_data_url(url: &str) -> Option<ImageData> {
    let rest = url.strip_prefix("data:")?;
    let (header, payload) = rest.split_once(',')?;
    let content_type = header.strip_suffix(";base64")?;
    let bytes = STANDARD.decode(payload).ok()?;
    Some(ImageData::new(
        bytes,
        if content_type.is_empty() {
            "application/octet-stream"
        } else {
            content_type
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let image = ImageData::new(vec![0xFF, 0xD8, 0xFF, 0xE0], "image/jpeg");
        let url = to_data_url(&image);
        assert!(url.starts_with("data:image/jpeg;base64,"));
        assert!(is_data_url(&url));

        let parsed = parse_data_url(&url).unwrap();
        assert_eq!(parsed, image);
    }

    #[test]
    fn test_parse_rejects_plain_urls() {
        assert!(parse_data_url("https://example.com/a.png").is_none());
        assert!(!is_data_url("https://example.com/a.png"));
    }

    #[test]
    fn test_parse_rejects_non_base64_payload() {
        assert!(parse_data_url("data:image/png,rawtext").is_none());
        assert!(parse_data_url("data:image/png;base64,!!!").is_none());
    }
}
