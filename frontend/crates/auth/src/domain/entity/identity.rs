//! Identity Entity

use chrono::{DateTime, Utc};
use kernel::id::UserId;

/// The authenticated user's profile as last reported by the API.
///
/// Purely a display cache. All authorization decisions, including the
/// role, are enforced server-side; stale values here can change what
/// the UI shows but never what the API permits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

impl Identity {
    /// Update the local flag after a successful OTP verification,
    /// without waiting for the next refresh round-trip.
    pub fn mark_verified(&mut self) {
        self.verified = true;
    }
}
