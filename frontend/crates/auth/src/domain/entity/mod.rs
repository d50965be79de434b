//! Domain Entities
//!
//! Client-side cache of what the API last told us about the account.

pub mod identity;
pub mod login;

pub use identity::Identity;
pub use login::LoginSession;
