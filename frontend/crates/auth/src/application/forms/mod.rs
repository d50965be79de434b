//! Auth Forms
//!
//! One struct per screen. Fields hold the raw user input; `validate`
//! turns them into domain values or a field-scoped error, and `submit`
//! performs the single API call. Validation failures never reach the
//! network, and a failed submission leaves the form editable again.

pub mod change_password;
pub mod forgot_password;
pub mod login;
pub mod register;
pub mod request_verify;
pub mod reset_password;
pub mod verify_account;

pub use change_password::ChangePasswordForm;
pub use forgot_password::ForgotPasswordForm;
pub use login::LoginForm;
pub use register::RegisterForm;
pub use request_verify::RequestVerifyForm;
pub use reset_password::ResetPasswordForm;
pub use verify_account::VerifyAccountForm;

use kernel::error::app_error::{AppError, AppResult};

/// Confirmation fields compare raw input, before normalization
pub(crate) fn check_confirmation(password: &str, confirm: &str) -> AppResult<()> {
    if password != confirm {
        return Err(AppError::validation(
            "confirmPassword",
            "Passwords do not match",
        ));
    }
    Ok(())
}
