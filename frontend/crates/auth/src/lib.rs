//! Auth (Authentication) Client Module
//!
//! Clean Architecture structure:
//! - `domain/` - Value objects, cached entities, gateway traits
//! - `application/` - Session store, wizard state machine, forms, guard
//! - `infra/` - HTTP implementation of the gateway
//!
//! ## Features
//! - Register / login / email-OTP verification / password reset & change
//! - Session lifecycle over a persisted bearer token (bootstrap via
//!   token refresh, fail-closed)
//! - Wizard state machine driving which form is active
//! - Route guard deriving allow/redirect from session state
//!
//! ## Trust Model
//! - All enforcement (hashing, OTP validity, authorization) lives in
//!   the remote API; this crate only validates input shapes and reacts
//!   to API outcomes
//! - Local session state is authoritative for session *presence*:
//!   logout tears down locally even when the API call fails

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::guard::{RouteDecision, route_decision};
pub use application::session::{SessionSnapshot, SessionStore};
pub use application::wizard::{AuthStep, AuthWizard, WizardEffect};
pub use error::{AuthError, AuthResult};
pub use infra::api::HttpAuthGateway;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
}

pub mod forms {
    pub use crate::application::forms::*;
}

pub mod gateway {
    pub use crate::domain::gateway::*;
}
