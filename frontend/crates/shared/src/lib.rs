//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of client vocabulary:
//! - Common error types and result aliases
//! - Common primitive value objects (ID types, etc.)
//! - The remote API response envelope and error-message extraction
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod envelope;
pub mod id;
