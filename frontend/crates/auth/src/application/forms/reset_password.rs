//! Reset Password Form
//!
//! Second half of the reset flow: email, the emailed code, and the
//! new password. Resending a code re-dispatches forgot-password and
//! is gated by a cooldown.

use crate::application::config::AuthConfig;
use crate::application::cooldown::ResendCooldown;
use crate::application::forms::check_confirmation;
use crate::domain::gateway::{AuthGateway, ResetPasswordInput};
use crate::domain::value_object::{Email, OtpCode, RawPassword};
use crate::error::{AuthError, AuthResult};
use kernel::error::app_error::AppResult;

pub struct ResetPasswordForm {
    pub email: String,
    pub otp: String,
    pub password: String,
    pub confirm_password: String,
    pub show_password: bool,
    submitting: bool,
    cooldown: ResendCooldown,
}

impl ResetPasswordForm {
    /// Create the form. When entered from the forgot-password step the
    /// email is prefilled and a code is already on its way, so the
    /// resend cooldown starts running.
    pub fn new(pending_email: Option<&Email>, config: &AuthConfig) -> Self {
        let mut cooldown = ResendCooldown::new(config.resend_cooldown);
        if pending_email.is_some() {
            cooldown.mark_sent();
        }
        Self {
            email: pending_email.map(|e| e.as_str().to_string()).unwrap_or_default(),
            otp: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            show_password: false,
            submitting: false,
            cooldown,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Whether the resend action is currently available
    pub fn can_resend(&self) -> bool {
        self.cooldown.is_ready()
    }

    pub fn validate(&self) -> AppResult<ResetPasswordInput> {
        let email = Email::new(&self.email)?;
        let otp = OtpCode::new(&self.otp)?;
        let password = RawPassword::new(&self.password)?;
        check_confirmation(&self.password, &self.confirm_password)?;

        Ok(ResetPasswordInput {
            email,
            otp,
            password,
        })
    }

    /// Complete the reset. Success means return to login and sign in
    /// with the new password.
    pub async fn submit<G>(&mut self, gateway: &G) -> AuthResult<String>
    where
        G: AuthGateway + Sync,
    {
        if self.submitting {
            return Err(AuthError::AlreadySubmitting);
        }
        let input = self.validate()?;

        self.submitting = true;
        let result = gateway.reset_password(&input).await;
        self.submitting = false;

        if let Err(err) = &result {
            err.log();
        }
        result
    }

    /// Ask for another code, subject to the cooldown
    pub async fn resend<G>(&mut self, gateway: &G) -> AuthResult<String>
    where
        G: AuthGateway + Sync,
    {
        if self.submitting {
            return Err(AuthError::AlreadySubmitting);
        }
        if !self.cooldown.is_ready() {
            return Err(AuthError::ResendThrottled {
                remaining_secs: self.cooldown.remaining_secs(),
            });
        }
        let email = Email::new(&self.email)?;

        self.submitting = true;
        let result = gateway.forgot_password(&email).await;
        self.submitting = false;

        match result {
            Ok(message) => {
                self.cooldown.mark_sent();
                Ok(message)
            }
            Err(err) => {
                err.log();
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::testing::FakeAuthGateway;

    fn filled() -> ResetPasswordForm {
        let email = Email::new("ana@example.com").unwrap();
        let mut form = ResetPasswordForm::new(Some(&email), &AuthConfig::default());
        form.otp = "482913".to_string();
        form.password = "Fresh-Start1".to_string();
        form.confirm_password = "Fresh-Start1".to_string();
        form
    }

    #[tokio::test(start_paused = true)]
    async fn test_email_is_prefilled_and_cooldown_running() {
        let form = filled();
        assert_eq!(form.email, "ana@example.com");
        assert!(!form.can_resend());
    }

    #[tokio::test(start_paused = true)]
    async fn test_resend_throttled_until_cooldown_elapses() {
        let gateway = FakeAuthGateway::new();
        let mut form = filled();

        let err = form.resend(&gateway).await.unwrap_err();
        assert!(matches!(err, AuthError::ResendThrottled { .. }));
        assert!(gateway.calls().is_empty());

        tokio::time::advance(Duration::from_secs(60)).await;
        gateway.script_forgot_password(Ok("Reset code sent".to_string()));
        form.resend(&gateway).await.unwrap();
        assert_eq!(gateway.calls(), vec!["forgot_password"]);

        // a successful resend restarts the cooldown
        assert!(!form.can_resend());
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_entry_can_resend_immediately() {
        let form = ResetPasswordForm::new(None, &AuthConfig::default());
        assert!(form.can_resend());
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_requires_full_schema() {
        let gateway = FakeAuthGateway::new();
        let mut form = filled();
        form.confirm_password = "other".to_string();

        let err = form.submit(&gateway).await.unwrap_err();
        assert!(err.is_local());
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_successful_reset() {
        let gateway = FakeAuthGateway::new();
        gateway.script_reset_password(Ok("Password updated".to_string()));
        let mut form = filled();

        let message = form.submit(&gateway).await.unwrap();
        assert_eq!(message, "Password updated");
        assert_eq!(gateway.calls(), vec!["reset_password"]);
    }
}
