//! Infrastructure Layer
//!
//! HTTP implementations of the domain gateway traits, plus the wire DTOs
//! they serialize.

pub mod dto;
pub mod http;

pub use http::{HttpPhotoStore, HttpProviderPhotos, HttpSessionBackend};
