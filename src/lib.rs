//! Admin authentication for the job board backend.
//!
//! The crate covers registration, credential verification, stateless session
//! tokens, first-run seeding of the default admin, and the login-page
//! controller that drives the browser side of the flow.
//!
//! | Module | Role |
//! |--------|------|
//! | [`repository`] | Credential store traits and data types |
//! | [`crypto`] | Argon2 password hashing |
//! | [`jwt`] | Session token issuance and verification |
//! | [`actions`] | Register / login / seed orchestration |
//! | [`api`] | HTTP DTOs and the axum router (`axum_api`) |
//! | [`sqlite`] | sqlx `SQLite` credential store (`sqlx_sqlite`) |
//! | [`client`] | Login page controller (`client`) |

pub mod actions;
pub mod api;
pub mod clock;
pub mod config;
pub mod crypto;
pub mod jwt;
pub mod repository;
mod secret;
pub mod tracing_config;
pub mod validators;

#[cfg(feature = "client")]
pub mod client;
#[cfg(feature = "sqlx_sqlite")]
pub mod sqlite;

pub use clock::{Clock, ManualClock, SystemClock};
pub use repository::{AdminCredentials, AdminIdentity, AdminRepository};
pub use secret::SecretString;
pub use validators::ValidationError;

#[cfg(any(test, feature = "mocks"))]
pub use repository::MockAdminRepository;

use std::fmt;

/// Log target shared by every `log` record the crate emits.
pub(crate) const LOG_TARGET: &str = "jobboard_admin";

#[derive(Debug, Clone, PartialEq)]
pub enum AuthError {
    /// An admin with the requested username is already stored.
    AlreadyExists,
    /// Unknown username or wrong password. The two cases are never distinguished.
    InvalidCredentials,
    /// Seeding was requested while at least one admin exists.
    AlreadySeeded,
    /// Malformed, tampered, or expired session token.
    TokenInvalid,
    /// The request body could not be read as the expected JSON shape.
    MalformedRequest,
    Validation(ValidationError),
    PasswordHashError,
    ConfigurationError(String),
    DatabaseError(String),
    Internal(String),
}

impl AuthError {
    /// Server faults: reported to callers as an opaque internal error.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            AuthError::PasswordHashError
                | AuthError::ConfigurationError(_)
                | AuthError::DatabaseError(_)
                | AuthError::Internal(_)
        )
    }
}

impl std::error::Error for AuthError {}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::AlreadyExists => write!(f, "Admin already exists"),
            AuthError::InvalidCredentials => write!(f, "Invalid username or password"),
            AuthError::AlreadySeeded => write!(f, "Admin account already exists"),
            AuthError::TokenInvalid => write!(f, "Invalid token"),
            AuthError::MalformedRequest => write!(f, "Invalid request body"),
            AuthError::Validation(err) => write!(f, "{err}"),
            AuthError::PasswordHashError => write!(f, "Failed to hash password"),
            AuthError::ConfigurationError(msg) => write!(f, "Configuration error: {msg}"),
            AuthError::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            AuthError::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl From<ValidationError> for AuthError {
    fn from(err: ValidationError) -> Self {
        AuthError::Validation(err)
    }
}
