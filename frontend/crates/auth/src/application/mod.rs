//! Application Layer
//!
//! Session store, wizard state machine, route guard, and the form
//! use-cases. Everything here talks to the API through the
//! `AuthGateway` trait.

pub mod config;
pub mod cooldown;
pub mod forms;
pub mod guard;
pub mod session;
pub mod wizard;
