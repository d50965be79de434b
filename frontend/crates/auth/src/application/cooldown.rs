//! Resend Cooldown
//!
//! Client-side throttle for "send me another code" actions. The API
//! rate-limits too; this exists so the user gets immediate feedback
//! instead of a rejected round trip.

use std::time::Duration;

use tokio::time::Instant;

/// Tracks when another resend becomes allowed
#[derive(Debug, Clone)]
pub struct ResendCooldown {
    interval: Duration,
    last_sent: Option<Instant>,
}

impl ResendCooldown {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_sent: None,
        }
    }

    /// Whether a resend is currently allowed
    pub fn is_ready(&self) -> bool {
        match self.last_sent {
            None => true,
            Some(at) => at.elapsed() >= self.interval,
        }
    }

    /// Seconds until the next resend is allowed, zero when ready
    pub fn remaining_secs(&self) -> u64 {
        match self.last_sent {
            None => 0,
            Some(at) => self.interval.saturating_sub(at.elapsed()).as_secs(),
        }
    }

    /// Record that a code was just sent, starting the cooldown
    pub fn mark_sent(&mut self) {
        self.last_sent = Some(Instant::now());
    }
}
