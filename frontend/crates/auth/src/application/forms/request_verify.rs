//! Request Verification Form
//!
//! No input fields. The API already knows who is asking from the
//! bearer token and emails the code to the account address.

use crate::domain::gateway::AuthGateway;
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
pub struct RequestVerifyForm {
    submitting: bool,
}

impl RequestVerifyForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Ask for a verification code, returning the API confirmation
    pub async fn submit<G>(&mut self, gateway: &G) -> AuthResult<String>
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
