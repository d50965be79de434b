//! HTTP Auth Gateway
//!
//! Implements [`AuthGateway`] against the remote `/auth` endpoints.
//! Each operation is one request; the envelope's `success` flag is
//! re-checked even on 2xx so a lying middleware cannot fake a login.

use kernel::envelope::ApiEnvelope;
use kernel::error::app_error::GENERIC_ERROR_MESSAGE;
use platform::http::ApiClient;
use platform::token::{AccessToken, TokenStore};

use crate::domain::entity::{Identity, LoginSession};
use crate::domain::gateway::{
    AuthGateway, ChangePasswordInput, LoginInput, RegisterInput, ResetPasswordInput,
};
use crate::domain::value_object::{Email, OtpCode};
use crate::error::{AuthError, AuthResult};
use crate::infra::dto::{
    ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, LoginResponse, MessageData,
    RegisterRequest, ResetPasswordRequest, UserDto, VerifyAccountRequest,
};

/// Gateway implementation backed by [`ApiClient`]
pub struct HttpAuthGateway<S> {
    client: ApiClient<S>,
}

impl<S> HttpAuthGateway<S>
where
    S: TokenStore + Send + Sync,
{
    pub fn new(client: ApiClient<S>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient<S> {
        &self.client
    }
}

/// Reject envelopes whose body says the operation failed
fn ensure_success<T>(envelope: ApiEnvelope<T>) -> AuthResult<ApiEnvelope<T>> {
    if envelope.success {
        Ok(envelope)
    } else {
        let message = envelope
            .message_text()
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());
        Err(AuthError::rejected(message))
    }
}

/// Display message for the message-only operations, preferring the
/// payload, then the envelope, then a per-operation default
fn confirmation(envelope: &ApiEnvelope<MessageData>, default: &str) -> String {
    envelope
        .data
        .message
        .clone()
        .or_else(|| envelope.message_text())
        .unwrap_or_else(|| default.to_string())
}

impl From<LoginResponse> for LoginSession {
    fn from(resp: LoginResponse) -> Self {
        LoginSession {
            identity: resp.user.into(),
            access_token: AccessToken::new(resp.access_token),
        }
    }
}

impl<S> AuthGateway for HttpAuthGateway<S>
where
    S: TokenStore + Send + Sync,
{
    async fn register(&self, input: &RegisterInput) -> AuthResult<Identity> {
        let envelope: ApiEnvelope<UserDto> = self
            .client
            .post("/auth/register", &RegisterRequest::from(input))
            .await?;
        let envelope = ensure_success(envelope)?;
        tracing::info!(email = %input.email, "Account registered");
        Ok(envelope.data.into())
    }

    async fn login(&self, input: &LoginInput) -> AuthResult<LoginSession> {
        let envelope: ApiEnvelope<LoginResponse> = self
            .client
            .post("/auth/login", &LoginRequest::from(input))
            .await?;
        let envelope = ensure_success(envelope)?;
        Ok(envelope.data.into())
    }

    async fn request_verify(&self) -> AuthResult<String> {
        let envelope: ApiEnvelope<MessageData> =
            self.client.post_empty("/auth/request-verify").await?;
        let envelope = ensure_success(envelope)?;
        Ok(confirmation(
            &envelope,
            "Verification code sent to your email",
        ))
    }

    async fn verify_account(&self, otp: &OtpCode) -> AuthResult<String> {
        let request = VerifyAccountRequest { otp: otp.as_str() };
        let envelope: ApiEnvelope<MessageData> =
            self.client.post("/auth/verify-account", &request).await?;
        let envelope = ensure_success(envelope)?;
        Ok(confirmation(&envelope, "Account verified"))
    }

    async fn refresh(&self) -> AuthResult<LoginSession> {
        let envelope: ApiEnvelope<LoginResponse> =
            self.client.post_empty("/auth/refresh").await?;
        let envelope = ensure_success(envelope)?;
        Ok(envelope.data.into())
    }

    async fn logout(&self) -> AuthResult<()> {
        // Payload is irrelevant; only the status matters
        let envelope: ApiEnvelope<serde_json::Value> =
            self.client.post_empty("/auth/logout").await?;
        ensure_success(envelope)?;
        Ok(())
    }

    async fn forgot_password(&self, email: &Email) -> AuthResult<String> {
        let request = ForgotPasswordRequest {
            email: email.as_str(),
        };
        let envelope: ApiEnvelope<MessageData> =
            self.client.post("/auth/forgot-password", &request).await?;
        let envelope = ensure_success(envelope)?;
        Ok(confirmation(&envelope, "Reset code sent to your email"))
    }

    async fn reset_password(&self, input: &ResetPasswordInput) -> AuthResult<String> {
        let envelope: ApiEnvelope<MessageData> = self
            .client
            .post("/auth/reset-password", &ResetPasswordRequest::from(input))
            .await?;
        let envelope = ensure_success(envelope)?;
        Ok(confirmation(&envelope, "Password updated, please sign in"))
    }

    async fn change_password(&self, input: &ChangePasswordInput) -> AuthResult<String> {
        let envelope: ApiEnvelope<MessageData> = self
            .client
            .post("/auth/change-password", &ChangePasswordRequest::from(input))
            .await?;
        let envelope = ensure_success(envelope)?;
        Ok(confirmation(&envelope, "Password changed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(success: bool, message: Option<&str>) -> ApiEnvelope<MessageData> {
        let json = serde_json::json!({
            "success": success,
            "statusCode": if success { 200 } else { 400 },
            "data": {},
            "message": message,
        });
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_ensure_success_passes_through() {
        assert!(ensure_success(envelope(true, None)).is_ok());
    }

    #[test]
    fn test_ensure_success_rejects_with_envelope_message() {
        let err = ensure_success(envelope(false, Some("Nope"))).unwrap_err();
        assert_eq!(err.user_message(), "Nope");
    }

    #[test]
    fn test_ensure_success_falls_back_to_generic() {
        let err = ensure_success(envelope(false, None)).unwrap_err();
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_confirmation_prefers_payload_message() {
        let json = serde_json::json!({
            "success": true,
            "statusCode": 200,
            "data": {"message": "from payload"},
            "message": "from envelope",
        });
        let env: ApiEnvelope<MessageData> = serde_json::from_value(json).unwrap();
        assert_eq!(confirmation(&env, "default"), "from payload");
    }

    #[test]
    fn test_confirmation_default() {
        assert_eq!(confirmation(&envelope(true, None), "default"), "default");
    }
}
