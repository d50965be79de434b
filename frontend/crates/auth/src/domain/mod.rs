//! Domain Layer
//!
//! Value objects, cached entities, and the gateway trait to the
//! remote API.

pub mod entity;
pub mod gateway;
pub mod value_object;
