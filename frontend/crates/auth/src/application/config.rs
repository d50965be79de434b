//! Auth Flow Configuration

use std::time::Duration;

/// Timing knobs of the auth flows
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Pause between a successful verification and leaving the wizard,
    /// long enough for the success message to be read
    pub verify_redirect_delay: Duration,
    /// Minimum interval between OTP resend requests
    pub resend_cooldown: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            verify_redirect_delay: Duration::from_secs(2),
            resend_cooldown: Duration::from_secs(60),
        }
    }
}

impl AuthConfig {
    /// Short timings for local development and tests
    pub fn development() -> Self {
        Self {
            verify_redirect_delay: Duration::from_millis(100),
            resend_cooldown: Duration::from_secs(2),
        }
    }
}
