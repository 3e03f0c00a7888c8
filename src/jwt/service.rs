use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};

use super::{TokenClaims, TokenConfig};
use crate::clock::{Clock, SystemClock};
use crate::{AuthError, SecretString};

/// A freshly signed token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: SecretString,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Signs and checks session tokens.
#[derive(Clone)]
pub struct TokenService {
    config: TokenConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    clock: Arc<dyn Clock>,
}

impl TokenService {
    pub fn new(config: TokenConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Issue and expiry checks read time from `clock`.
    pub fn with_clock(config: TokenConfig, clock: Arc<dyn Clock>) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
            clock,
        }
    }

    /// # Errors
    ///
    /// Returns `AuthError::Internal` if signing fails.
    #[cfg_attr(feature = "tracing", tracing::instrument(name = "issue_token", skip(self), err))]
    pub fn issue(&self, admin_id: i64) -> Result<IssuedToken, AuthError> {
        let issued_at = self.clock.now();
        let expires_at = issued_at + self.config.expiry;

        let claims = TokenClaims {
            sub: admin_id.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            iss: self.config.issuer.clone(),
        };

        let token = jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("token signing failed: {e}")))?;

        Ok(IssuedToken {
            token: SecretString::new(token),
            issued_at,
            expires_at,
        })
    }

    /// Returns the admin id the token was issued to.
    ///
    /// Every failure, whether malformed, wrongly signed, or expired, is the
    /// same `AuthError::TokenInvalid`.
    pub fn verify(&self, token: &str) -> Result<i64, AuthError> {
        self.decode(token)?.admin_id()
    }

    /// # Errors
    ///
    /// `AuthError::TokenInvalid` for any rejected token.
    pub fn decode(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // expiry is checked below against the injected clock
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp", "sub"]);
        if let Some(ref iss) = self.config.issuer {
            validation.set_issuer(&[iss]);
        }

        let claims = jsonwebtoken::decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map_err(|_| AuthError::TokenInvalid)?
            .claims;

        if claims.exp <= self.clock.now().timestamp() {
            return Err(AuthError::TokenInvalid);
        }

        Ok(claims)
    }

    pub fn expiry(&self) -> chrono::Duration {
        self.config.expiry
    }

    /// Expiry instant encoded in a token, without validating it.
    pub fn expires_at(claims: &TokenClaims) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(claims.exp, 0).single()
    }
}
