//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - HTTP plumbing (shared client, JSON calls, backend error detail)
//! - Provider photo endpoints (Microsoft Graph binary, Facebook redirect)
//! - Data-URL encoding for in-memory image references

pub mod data_url;
pub mod http;
pub mod photos;
