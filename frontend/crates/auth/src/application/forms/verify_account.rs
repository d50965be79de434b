//! Verify Account Form
//!
//! Code entry plus a resend action that re-dispatches the
//! request-verify call.

use crate::domain::gateway::AuthGateway;
use crate::domain::value_object::OtpCode;
use crate::error::{AuthError, AuthResult};
use kernel::error::app_error::AppResult;

#[derive(Default)]
pub struct VerifyAccountForm {
    pub otp: String,
    submitting: bool,
}

impl VerifyAccountForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn validate(&self) -> AppResult<OtpCode> {
        OtpCode::new(&self.otp)
    }

    /// Submit the emailed code. On success the caller marks the cached
    /// identity verified and schedules the delayed navigation.
    pub async fn submit<G>(&mut self, gateway: &G) -> AuthResult<String>
    where
        G: AuthGateway + Sync,
    {
        if self.submitting {
            return Err(AuthError::AlreadySubmitting);
        }
        let otp = self.validate()?;

        self.submitting = true;
        let result = gateway.verify_account(&otp).await;
        self.submitting = false;

        if let Err(err) = &result {
            err.log();
        }
        result
    }

    /// Ask for another code
    pub async fn resend<G>(&mut self, gateway: &G) -> AuthResult<String>
    where
        G: AuthGateway + Sync,
    {
        if self.submitting {
            return Err(AuthError::AlreadySubmitting);
        }

        self.submitting = true;
        let result = gateway.request_verify().await;
        self.submitting = false;

        if let Err(err) = &result {
            err.log();
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeAuthGateway;

    #[tokio::test]
    async fn test_short_code_never_reaches_network() {
        let gateway = FakeAuthGateway::new();
        let mut form = VerifyAccountForm {
            otp: "123".to_string(),
            ..VerifyAccountForm::default()
        };

        let err = form.submit(&gateway).await.unwrap_err();
        assert!(err.is_local());
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_valid_code_submits() {
        let gateway = FakeAuthGateway::new();
        gateway.script_verify_account(Ok("Account verified".to_string()));
        let mut form = VerifyAccountForm {
            otp: "482913".to_string(),
            ..VerifyAccountForm::default()
        };

        let message = form.submit(&gateway).await.unwrap();
        assert_eq!(message, "Account verified");
        assert_eq!(gateway.calls(), vec!["verify_account"]);
    }

    #[tokio::test]
    async fn test_resend_redispatches_request_verify() {
        let gateway = FakeAuthGateway::new();
        gateway.script_request_verify(Ok("Verification code sent".to_string()));
        let mut form = VerifyAccountForm::new();

        form.resend(&gateway).await.unwrap();
        assert_eq!(gateway.calls(), vec!["request_verify"]);
    }

    #[tokio::test]
    async fn test_wrong_code_keeps_form_editable() {
        let gateway = FakeAuthGateway::new();
        gateway.script_verify_account(Err(AuthError::rejected("Invalid or expired code")));
        let mut form = VerifyAccountForm {
            otp: "000000".to_string(),
            ..VerifyAccountForm::default()
        };

        let err = form.submit(&gateway).await.unwrap_err();
        assert_eq!(err.user_message(), "Invalid or expired code");
        assert!(!form.is_submitting());
    }
}
