//! Change Password Form
//!
//! Authenticated password change from the profile view. The current
//! password is only checked for presence; the new one must meet the
//! full policy.

use crate::application::forms::check_confirmation;
use crate::domain::gateway::{AuthGateway, ChangePasswordInput};
use crate::domain::value_object::RawPassword;
use crate::error::{AuthError, AuthResult};
use kernel::error::app_error::AppResult;

#[derive(Default)]
pub struct ChangePasswordForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
    pub show_password: bool,
    submitting: bool,
}

impl ChangePasswordForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn validate(&self) -> AppResult<ChangePasswordInput> {
        let current_password = RawPassword::current(&self.current_password)?;
        let new_password = RawPassword::new(&self.new_password)?;
        check_confirmation(&self.new_password, &self.confirm_password)?;

        Ok(ChangePasswordInput {
            current_password,
            new_password,
        })
    }

    pub async fn submit<G>(&mut self, gateway: &G) -> AuthResult<String>
    where
        G: AuthGateway + Sync,
    {
        if self.submitting {
            return Err(AuthError::AlreadySubmitting);
        }
        let input = self.validate()?;

        self.submitting = true;
        let result = gateway.change_password(&input).await;
        self.submitting = false;

        if let Err(err) = &result {
            err.log();
        }
        result
    }
}
