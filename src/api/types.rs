use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AdminIdentity, AuthError, SecretString};

/// Shown for every server fault in place of the real cause.
pub const SERVER_ERROR_MESSAGE: &str = "Server error. Please try again later.";
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful";
pub const SEED_SUCCESS_MESSAGE: &str = "Default admin account created successfully";
pub const STATUS_MESSAGE: &str = "Admin API is working";

// Request DTOs

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: SecretString,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: SecretString,
}

// Response DTOs

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub id: i64,
    pub username: String,
    pub token: SecretString,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub token: SecretString,
}

#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub message: String,
    pub id: i64,
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct AdminResponse {
    pub id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Body of every failed request. `success` is always false so the login page
/// can branch on it the same way it does for a successful login.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    pub code: String,
}

impl From<AdminIdentity> for AdminResponse {
    fn from(admin: AdminIdentity) -> Self {
        AdminResponse {
            id: admin.id,
            username: admin.username,
            created_at: admin.created_at,
        }
    }
}

impl From<AuthError> for ErrorResponse {
    fn from(err: AuthError) -> Self {
        let code = match &err {
            AuthError::AlreadyExists => "ALREADY_EXISTS",
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::AlreadySeeded => "ALREADY_SEEDED",
            AuthError::TokenInvalid => "TOKEN_INVALID",
            AuthError::Validation(_) => "VALIDATION_ERROR",
            AuthError::MalformedRequest => "INVALID_REQUEST",
            AuthError::PasswordHashError
            | AuthError::ConfigurationError(_)
            | AuthError::DatabaseError(_)
            | AuthError::Internal(_) => "INTERNAL_ERROR",
        };

        let message = if err.is_internal() {
            SERVER_ERROR_MESSAGE.to_owned()
        } else {
            err.to_string()
        };

        ErrorResponse {
            success: false,
            message,
            code: code.to_owned(),
        }
    }
}
