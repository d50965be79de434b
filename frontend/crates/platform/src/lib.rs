//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - The HTTP client wrapper around the remote API (bearer attachment,
//!   envelope decoding, 401 interception)
//! - Durable access-token storage
//! - Session lifecycle events
//! - Base-URL configuration

pub mod config;
pub mod event;
pub mod http;
pub mod token;

// Re-exported so domain crates can build multipart bodies without a
// direct reqwest dependency.
pub use reqwest::multipart;
