//! Registration Form

use crate::application::forms::check_confirmation;
use crate::domain::entity::Identity;
use crate::domain::gateway::{AuthGateway, RegisterInput};
use crate::domain::value_object::{DisplayName, Email, RawPassword};
use crate::error::{AuthError, AuthResult};
use kernel::error::app_error::AppResult;

/// Account creation form
#[derive(Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub show_password: bool,
    submitting: bool,
}

impl RegisterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Local schema check, no network
    pub fn validate(&self) -> AppResult<RegisterInput> {
        let name = DisplayName::new(&self.name)?;
        let email = Email::new(&self.email)?;
        let password = RawPassword::new(&self.password)?;
        check_confirmation(&self.password, &self.confirm_password)?;

        Ok(RegisterInput {
            name,
            email,
            password,
        })
    }

    /// Create the account. Success means proceed to login; the API
    /// does not sign the new account in. The validated email is
    /// returned alongside so the login form can be prefilled.
    pub async fn submit<G>(&mut self, gateway: &G) -> AuthResult<(Email, Identity)>
    where
        G: AuthGateway + Sync,
    {
        if self.submitting {
            return Err(AuthError::AlreadySubmitting);
        }
        let input = self.validate()?;

        self.submitting = true;
        let result = gateway.register(&input).await;
        self.submitting = false;

        match result {
            Ok(identity) => Ok((input.email, identity)),
            Err(err) => {
                err.log();
                Err(err)
            }
        }
    }
}
