//! Auth Gateway Trait
//!
//! The seam between the application layer and the remote API. Forms
//! and the session store depend on this trait only; the HTTP
//! implementation lives in `infra`.

use crate::domain::entity::{Identity, LoginSession};
use crate::domain::value_object::{DisplayName, Email, OtpCode, RawPassword};
use crate::error::AuthResult;

/// Validated payload for account registration
pub struct RegisterInput {
    pub name: DisplayName,
    pub email: Email,
    pub password: RawPassword,
}

/// Validated payload for login
pub struct LoginInput {
    pub email: Email,
    pub password: RawPassword,
}

/// Validated payload for completing a password reset
pub struct ResetPasswordInput {
    pub email: Email,
    pub otp: OtpCode,
    pub password: RawPassword,
}

/// Validated payload for changing the password while signed in
pub struct ChangePasswordInput {
    pub current_password: RawPassword,
    pub new_password: RawPassword,
}

#[trait_variant::make(AuthGateway: Send)]
pub trait LocalAuthGateway {
    /// Create an account. Does not sign in: the user proceeds to login.
    async fn register(&self, input: &RegisterInput) -> AuthResult<Identity>;

    /// Exchange credentials for an identity and a bearer token
    async fn login(&self, input: &LoginInput) -> AuthResult<LoginSession>;

    /// Ask the API to send a fresh verification code to the signed-in
    /// user's email. Returns the confirmation message to display.
    async fn request_verify(&self) -> AuthResult<String>;

    /// Submit the emailed code to mark the account verified
    async fn verify_account(&self, otp: &OtpCode) -> AuthResult<String>;

    /// Trade the persisted token for a fresh one, revalidating the
    /// cached identity. Failure means the session is gone.
    async fn refresh(&self) -> AuthResult<LoginSession>;

    /// Invalidate the session server-side
    async fn logout(&self) -> AuthResult<()>;

    /// Start a password reset by emailing an OTP to `email`
    async fn forgot_password(&self, email: &Email) -> AuthResult<String>;

    /// Complete a password reset with the emailed code
    async fn reset_password(&self, input: &ResetPasswordInput) -> AuthResult<String>;

    /// Change the password of the signed-in user
    async fn change_password(&self, input: &ChangePasswordInput) -> AuthResult<String>;
}
