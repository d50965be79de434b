//! Infrastructure Layer
//!
//! HTTP implementation of the auth gateway plus the wire DTOs.

pub mod api;
pub mod dto;
