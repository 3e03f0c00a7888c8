use async_trait::async_trait;

use crate::{SecretString, ValidationError};

/// What the login endpoint answered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginReply {
    /// Set only when the endpoint returned a 2xx status with `success: true`.
    pub success: bool,
    pub message: Option<String>,
    pub token: Option<SecretString>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The form was rejected before any request was made.
    Validation(ValidationError),
    /// The request could not be completed or its body was unreadable.
    Network(String),
    /// The service answered and refused the credentials. Carries the message
    /// that was shown.
    Rejected(String),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Validation(err) => write!(f, "{err}"),
            ClientError::Network(msg) => write!(f, "Network error: {msg}"),
            ClientError::Rejected(msg) => write!(f, "Login rejected: {msg}"),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<ValidationError> for ClientError {
    fn from(err: ValidationError) -> Self {
        ClientError::Validation(err)
    }
}

/// Transport to the admin login endpoint.
#[async_trait]
pub trait LoginApi: Send + Sync {
    /// A refusal is `Ok` with `success == false`; only transport and decoding
    /// failures are errors.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Network` if no readable reply arrived.
    async fn login(&self, username: &str, password: &SecretString)
    -> Result<LoginReply, ClientError>;
}
