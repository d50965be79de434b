//! Forgot Password Form

use crate::domain::gateway::AuthGateway;
use crate::domain::value_object::Email;
use crate::error::{AuthError, AuthResult};
use kernel::error::app_error::AppResult;

/// First half of the reset flow: request an OTP by email
#[derive(Default)]
pub struct ForgotPasswordForm {
    pub email: String,
    submitting: bool,
}

impl ForgotPasswordForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn validate(&self) -> AppResult<Email> {
        Email::new(&self.email)
    }

    /// Request a reset code. On success the caller advances the wizard
    /// to the reset step, carrying the validated email along.
    pub async fn submit<G>(&mut self, gateway: &G) -> AuthResult<(Email, String)>
    where
        G: AuthGateway + Sync,
    {
        if self.submitting {
            return Err(AuthError::AlreadySubmitting);
        }
        let email = self.validate()?;

        self.submitting = true;
        let result = gateway.forgot_password(&email).await;
        self.submitting = false;

        match result {
            Ok(message) => Ok((email, message)),
            Err(err) => {
                err.log();
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeAuthGateway;

    #[tokio::test]
    async fn test_submit_returns_validated_email() {
        let gateway = FakeAuthGateway::new();
        gateway.script_forgot_password(Ok("Reset code sent".to_string()));
        let mut form = ForgotPasswordForm {
            email: "  Ana@Example.com ".to_string(),
            ..ForgotPasswordForm::default()
        };

        let (email, message) = form.submit(&gateway).await.unwrap();
        assert_eq!(email.as_str(), "ana@example.com");
        assert_eq!(message, "Reset code sent");
    }

    #[tokio::test]
    async fn test_invalid_email_never_reaches_network() {
        let gateway = FakeAuthGateway::new();
        let mut form = ForgotPasswordForm {
            email: "nope".to_string(),
            ..ForgotPasswordForm::default()
        };

        assert!(form.submit(&gateway).await.is_err());
        assert!(gateway.calls().is_empty());
    }
}
