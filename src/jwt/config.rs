use chrono::Duration;
use std::fmt;

use crate::AuthError;

pub const MIN_SECRET_LENGTH: usize = 32;

/// Environment variable the signing secret is read from.
pub const SECRET_ENV: &str = "JWT_SECRET";

#[derive(Clone)]
pub struct TokenConfig {
    pub(crate) secret: String,
    /// Default: 30 days.
    pub(crate) expiry: Duration,
    pub(crate) issuer: Option<String>,
}

impl fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"[REDACTED]")
            .field("expiry", &self.expiry)
            .field("issuer", &self.issuer)
            .finish()
    }
}

impl TokenConfig {
    /// # Errors
    ///
    /// Returns `AuthError::ConfigurationError` if the secret is shorter than
    /// [`MIN_SECRET_LENGTH`] bytes.
    pub fn new(secret: impl Into<String>) -> Result<Self, AuthError> {
        let secret = secret.into();

        if secret.len() < MIN_SECRET_LENGTH {
            return Err(AuthError::ConfigurationError(format!(
                "token secret must be at least {MIN_SECRET_LENGTH} bytes, got {}",
                secret.len()
            )));
        }

        Ok(Self {
            secret,
            expiry: Duration::days(30),
            issuer: None,
        })
    }

    /// Build from an optional secret, refusing to continue without one.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::ConfigurationError` if the secret is missing or
    /// too short.
    pub fn from_secret(secret: Option<String>) -> Result<Self, AuthError> {
        match secret {
            Some(secret) if !secret.is_empty() => Self::new(secret),
            _ => Err(AuthError::ConfigurationError(format!(
                "{SECRET_ENV} is not set"
            ))),
        }
    }

    /// Reads the secret from `JWT_SECRET`.
    ///
    /// # Errors
    ///
    /// See [`TokenConfig::from_secret`].
    pub fn from_env() -> Result<Self, AuthError> {
        Self::from_secret(std::env::var(SECRET_ENV).ok())
    }

    #[must_use]
    pub fn with_expiry(mut self, expiry: Duration) -> Self {
        self.expiry = expiry;
        self
    }

    #[must_use]
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    pub fn expiry(&self) -> Duration {
        self.expiry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_secret_fails_fast() {
        let err = TokenConfig::from_secret(None).unwrap_err();
        assert!(matches!(err, AuthError::ConfigurationError(ref msg) if msg.contains("JWT_SECRET")));

        assert!(TokenConfig::from_secret(Some(String::new())).is_err());
    }

    #[test]
    fn test_short_secret_rejected() {
        let err = TokenConfig::new("short").unwrap_err();
        assert!(matches!(err, AuthError::ConfigurationError(ref msg) if msg.contains("32 bytes")));
    }

    #[test]
    fn test_default_expiry_is_thirty_days() {
        let config = TokenConfig::new("0123456789abcdef0123456789abcdef").unwrap();
        assert_eq!(config.expiry(), Duration::days(30));
    }

    #[test]
    fn test_debug_hides_secret() {
        let config = TokenConfig::new("0123456789abcdef0123456789abcdef").unwrap();
        assert!(!format!("{config:?}").contains("0123456789abcdef"));
    }
}
