//! Auth Wizard State Machine
//!
//! Tracks which auth form is active and how successful submissions
//! move between them. Navigation side effects (leaving the wizard,
//! delays) are returned as `WizardEffect` values for the shell to
//! execute; this type itself never sleeps or renders.

use std::time::Duration;

use crate::application::config::AuthConfig;
use crate::domain::value_object::Email;

/// The auth forms, one active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum AuthStep {
    #[display("register")]
    Register,
    #[display("login")]
    Login,
    #[display("request-verify")]
    RequestVerify,
    #[display("verify-account")]
    VerifyAccount,
    #[display("forgot-password")]
    ForgotPassword,
    #[display("reset-password")]
    ResetPassword,
}

/// What the shell should do after a wizard event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardEffect {
    /// Keep rendering the wizard at its current step
    Stay,
    /// Leave the wizard for the home view now
    NavigateHome,
    /// Leave the wizard for the home view after the delay, giving the
    /// success message time to be read
    NavigateHomeAfter(Duration),
}

/// Wizard state: current step plus the email a reset code was sent to
pub struct AuthWizard {
    step: AuthStep,
    pending_email: Option<Email>,
    config: AuthConfig,
}

impl AuthWizard {
    /// Start at the registration step
    pub fn new(config: AuthConfig) -> Self {
        Self {
            step: AuthStep::Register,
            pending_email: None,
            config,
        }
    }

    pub fn step(&self) -> AuthStep {
        self.step
    }

    /// Email carried from the previous step: the address just
    /// registered, or the one a reset code was sent to
    pub fn pending_email(&self) -> Option<&Email> {
        self.pending_email.as_ref()
    }

    /// Jump to any step unconditionally. This is the user clicking a
    /// step link, so no completion checks apply. Returning to the
    /// entry steps abandons any reset flow in progress.
    pub fn switch_to(&mut self, step: AuthStep) {
        self.set_step(step);
    }

    /// Account created, proceed to sign in with the new credentials.
    /// The registered email is carried over to prefill the login form.
    pub fn registration_succeeded(&mut self, email: Email) -> WizardEffect {
        self.set_step(AuthStep::Login);
        self.pending_email = Some(email);
        WizardEffect::Stay
    }

    /// Signed in. Verified accounts leave the wizard; unverified ones
    /// are walked through verification first.
    pub fn login_succeeded(&mut self, verified: bool) -> WizardEffect {
        if verified {
            WizardEffect::NavigateHome
        } else {
            self.set_step(AuthStep::RequestVerify);
            WizardEffect::Stay
        }
    }

    /// A verification code is on its way, show the code entry form
    pub fn verify_code_sent(&mut self) -> WizardEffect {
        self.set_step(AuthStep::VerifyAccount);
        WizardEffect::Stay
    }

    /// Account verified, leave the wizard after the configured pause
    pub fn verification_succeeded(&mut self) -> WizardEffect {
        WizardEffect::NavigateHomeAfter(self.config.verify_redirect_delay)
    }

    /// A reset code was emailed, carry the address into the reset form
    pub fn reset_code_sent(&mut self, email: Email) -> WizardEffect {
        self.set_step(AuthStep::ResetPassword);
        self.pending_email = Some(email);
        WizardEffect::Stay
    }

    /// Password reset, sign in with the new one
    pub fn reset_succeeded(&mut self) -> WizardEffect {
        self.set_step(AuthStep::Login);
        WizardEffect::Stay
    }

    fn set_step(&mut self, step: AuthStep) {
        if matches!(step, AuthStep::Register | AuthStep::Login) {
            self.pending_email = None;
        }
        tracing::debug!(from = %self.step, to = %step, "Wizard step change");
        self.step = step;
    }
}
