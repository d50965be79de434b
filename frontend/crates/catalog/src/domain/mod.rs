//! Domain Layer

pub mod entity;
pub mod gateway;
