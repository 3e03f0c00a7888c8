//! Credential shape checks shared by the server and the login form.
//!
//! The server only insists that both fields are present; the login form
//! applies the stricter minimums from [`UsernamePolicy::login_form`] and
//! [`PasswordPolicy::login_form`] before it touches the network.

pub mod password;
pub mod username;

pub use password::{PasswordPolicy, validate_password};
pub use username::{UsernamePolicy, validate_username};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    UsernameEmpty,
    UsernameTooShort(usize),
    UsernameTooLong(usize),
    PasswordEmpty,
    PasswordTooShort(usize),
    PasswordTooLong(usize),
}

impl ValidationError {
    /// Whether the offending input is the username field.
    pub fn is_username(&self) -> bool {
        matches!(
            self,
            Self::UsernameEmpty | Self::UsernameTooShort(_) | Self::UsernameTooLong(_)
        )
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UsernameEmpty => write!(f, "Please enter your username"),
            Self::UsernameTooShort(min) => {
                write!(f, "Username must be at least {min} characters long")
            }
            Self::UsernameTooLong(max) => write!(f, "Username is too long (max {max} characters)"),
            Self::PasswordEmpty => write!(f, "Please enter your password"),
            Self::PasswordTooShort(min) => {
                write!(f, "Password must be at least {min} characters long")
            }
            Self::PasswordTooLong(max) => write!(f, "Password is too long (max {max} characters)"),
        }
    }
}

impl std::error::Error for ValidationError {}
