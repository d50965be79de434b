//! Test Doubles
//!
//! A scriptable gateway plus entity fixtures shared by the
//! application-layer tests. Each gateway method records its call and
//! returns the scripted outcome, so tests can assert both what was
//! sent over the seam and how the caller reacts.

use std::sync::Mutex;

use chrono::Utc;
use kernel::id::UserId;
use platform::token::AccessToken;

use crate::domain::entity::{Identity, LoginSession};
use crate::domain::gateway::{
    AuthGateway, ChangePasswordInput, LoginInput, RegisterInput, ResetPasswordInput,
};
use crate::domain::value_object::{Email, OtpCode};
use crate::error::{AuthError, AuthResult};

pub(crate) fn identity_fixture() -> Identity {
    Identity {
        id: UserId::from_raw(1),
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        role: "USER".to_string(),
        verified: true,
        created_at: Utc::now(),
    }
}

pub(crate) fn login_session_fixture(token: &str) -> LoginSession {
    LoginSession {
        identity: identity_fixture(),
        access_token: AccessToken::new(token),
    }
}

/// Gateway double with one-shot scripted responses per method
#[derive(Default)]
pub(crate) struct FakeAuthGateway {
    calls: Mutex<Vec<&'static str>>,
    register: Mutex<Option<AuthResult<Identity>>>,
    login: Mutex<Option<AuthResult<LoginSession>>>,
    request_verify: Mutex<Option<AuthResult<String>>>,
    verify_account: Mutex<Option<AuthResult<String>>>,
    refresh: Mutex<Option<AuthResult<LoginSession>>>,
    logout: Mutex<Option<AuthResult<()>>>,
    forgot_password: Mutex<Option<AuthResult<String>>>,
    reset_password: Mutex<Option<AuthResult<String>>>,
    change_password: Mutex<Option<AuthResult<String>>>,
}

impl FakeAuthGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Method names in invocation order
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn script_register(&self, result: AuthResult<Identity>) {
        *self.register.lock().unwrap() = Some(result);
    }

    pub fn script_login(&self, result: AuthResult<LoginSession>) {
        *self.login.lock().unwrap() = Some(result);
    }

    pub fn script_request_verify(&self, result: AuthResult<String>) {
        *self.request_verify.lock().unwrap() = Some(result);
    }

    pub fn script_verify_account(&self, result: AuthResult<String>) {
        *self.verify_account.lock().unwrap() = Some(result);
    }

    pub fn script_refresh(&self, result: AuthResult<LoginSession>) {
        *self.refresh.lock().unwrap() = Some(result);
    }

    pub fn script_logout(&self, result: AuthResult<()>) {
        *self.logout.lock().unwrap() = Some(result);
    }

    pub fn script_forgot_password(&self, result: AuthResult<String>) {
        *self.forgot_password.lock().unwrap() = Some(result);
    }

    pub fn script_reset_password(&self, result: AuthResult<String>) {
        *self.reset_password.lock().unwrap() = Some(result);
    }

    pub fn script_change_password(&self, result: AuthResult<String>) {
        *self.change_password.lock().unwrap() = Some(result);
    }

    fn record(&self, name: &'static str) {
        self.calls.lock().unwrap().push(name);
    }
}

fn take<T>(slot: &Mutex<Option<AuthResult<T>>>) -> AuthResult<T> {
    slot.lock()
        .unwrap()
        .take()
        .unwrap_or_else(|| Err(AuthError::rejected("unscripted gateway call")))
}

impl AuthGateway for FakeAuthGateway {
    async fn register(&self, _input: &RegisterInput) -> AuthResult<Identity> {
        self.record("register");
        take(&self.register)
    }

    async fn login(&self, _input: &LoginInput) -> AuthResult<LoginSession> {
        self.record("login");
        take(&self.login)
    }

    async fn request_verify(&self) -> AuthResult<String> {
        self.record("request_verify");
        take(&self.request_verify)
    }

    async fn verify_account(&self, _otp: &OtpCode) -> AuthResult<String> {
        self.record("verify_account");
        take(&self.verify_account)
    }

    async fn refresh(&self) -> AuthResult<LoginSession> {
        self.record("refresh");
        take(&self.refresh)
    }

    async fn logout(&self) -> AuthResult<()> {
        self.record("logout");
        // unscripted logout succeeds; most tests only care it was called
        self.logout.lock().unwrap().take().unwrap_or(Ok(()))
    }

    async fn forgot_password(&self, _email: &Email) -> AuthResult<String> {
        self.record("forgot_password");
        take(&self.forgot_password)
    }

    async fn reset_password(&self, _input: &ResetPasswordInput) -> AuthResult<String> {
        self.record("reset_password");
        take(&self.reset_password)
    }

    async fn change_password(&self, _input: &ChangePasswordInput) -> AuthResult<String> {
        self.record("change_password");
        take(&self.change_password)
    }
}
