//! Domain Layer
//!
//! Entities, value objects, and gateway traits for the external
//! collaborators (identity provider, session backend, blob storage).

pub mod entity;
pub mod gateway;
pub mod value_object;
