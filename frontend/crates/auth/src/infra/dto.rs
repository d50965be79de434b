//! Wire DTOs for the Auth Endpoints
//!
//! Request bodies use the camelCase field names the API expects. The
//! login/refresh payload is the one exception: it arrives in
//! snake_case (`access_token`), matching the service that issues it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kernel::id::UserId;

use crate::domain::entity::Identity;
use crate::domain::gateway::{ChangePasswordInput, LoginInput, RegisterInput, ResetPasswordInput};

// ============================================================
// Requests
// ============================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
}

impl<'a> From<&'a RegisterInput> for RegisterRequest<'a> {
    fn from(input: &'a RegisterInput) -> Self {
        // The API double-checks confirmation; the form already did
        let password = input.password.expose();
        Self {
            name: input.name.as_str(),
            email: input.email.as_str(),
            password,
            confirm_password: password,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a LoginInput> for LoginRequest<'a> {
    fn from(input: &'a LoginInput) -> Self {
        Self {
            email: input.email.as_str(),
            password: input.password.expose(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VerifyAccountRequest<'a> {
    pub otp: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ForgotPasswordRequest<'a> {
    pub email: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest<'a> {
    pub email: &'a str,
    pub otp: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
}

impl<'a> From<&'a ResetPasswordInput> for ResetPasswordRequest<'a> {
    fn from(input: &'a ResetPasswordInput) -> Self {
        let password = input.password.expose();
        Self {
            email: input.email.as_str(),
            otp: input.otp.as_str(),
            password,
            confirm_password: password,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest<'a> {
    pub current_password: &'a str,
    pub new_password: &'a str,
    pub confirm_password: &'a str,
}

impl<'a> From<&'a ChangePasswordInput> for ChangePasswordRequest<'a> {
    fn from(input: &'a ChangePasswordInput) -> Self {
        let new_password = input.new_password.expose();
        Self {
            current_password: input.current_password.expose(),
            new_password,
            confirm_password: new_password,
        }
    }
}

// ============================================================
// Responses
// ============================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<UserDto> for Identity {
    fn from(dto: UserDto) -> Self {
        Identity {
            id: dto.id,
            name: dto.name,
            email: dto.email,
            role: dto.role,
            verified: dto.is_verified,
            created_at: dto.created_at,
        }
    }
}

/// Payload of login and refresh
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub user: UserDto,
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Payload of the message-only operations (verify, forgot, reset, ...)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageData {
    #[serde(default)]
    pub message: Option<String>,
}
