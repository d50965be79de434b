//! Infrastructure Layer

pub mod api;
pub mod dto;
