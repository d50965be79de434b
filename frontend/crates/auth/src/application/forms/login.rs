//! Login Form

use crate::domain::entity::LoginSession;
use crate::domain::gateway::{AuthGateway, LoginInput};
use crate::domain::value_object::{Email, RawPassword};
use crate::error::{AuthError, AuthResult};
use kernel::error::app_error::AppResult;

/// Sign-in form. The password is only checked for presence here, so
/// accounts created under older policies can still sign in.
#[derive(Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub show_password: bool,
    submitting: bool,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn validate(&self) -> AppResult<LoginInput> {
        let email = Email::new(&self.email)?;
        let password = RawPassword::current(&self.password)?;
        Ok(LoginInput { email, password })
    }

    pub async fn submit<G>(&mut self, gateway: &G) -> AuthResult<LoginSession>
    where
        G: AuthGateway + Sync,
    {
        if self.submitting {
            return Err(AuthError::AlreadySubmitting);
        }
        let input = self.validate()?;

        self.submitting = true;
        let result = gateway.login(&input).await;
        self.submitting = false;

        if let Err(err) = &result {
            err.log();
        }
        result
    }
}
