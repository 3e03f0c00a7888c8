use argon2::{Algorithm, Argon2, Params, PasswordVerifier, Version};
use password_hash::{PasswordHash, PasswordHasher as _, SaltString};
use rand::rngs::OsRng;

use crate::AuthError;

/// One-way password transformation used for admin credentials.
///
/// ```rust
/// use jobboard_admin::crypto::{Argon2Hasher, PasswordHasher};
///
/// let hasher = Argon2Hasher::default();
/// let hash = hasher.hash("admin123").unwrap();
/// assert!(hasher.verify("admin123", &hash).unwrap());
/// assert!(!hasher.verify("admin124", &hash).unwrap());
/// ```
pub trait PasswordHasher: Send + Sync {
    /// Hash with a fresh random salt. Two calls on the same input give
    /// different strings that both verify.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::PasswordHashError` if hashing fails.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// A mismatch is `Ok(false)`, never an error.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::PasswordHashError` if the stored hash is not a
    /// valid PHC string.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;

    /// A well-formed hash at this hasher's cost that no password matches.
    /// Verifying against it takes as long as checking a real credential.
    fn decoy_hash(&self) -> String;
}

// 16-byte salt and all-zero 32-byte output, unpadded B64
const DECOY_SALT: &str = "c29tZXNhbHRzb21lc2FsdA";
const DECOY_OUTPUT: &str = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Argon2id with configurable cost.
#[derive(Debug, Clone)]
pub struct Argon2Hasher {
    /// KiB
    memory_cost: u32,
    time_cost: u32,
    parallelism: u32,
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self {
            memory_cost: 19456,
            time_cost: 2,
            parallelism: 1,
        }
    }
}

impl Argon2Hasher {
    #[must_use]
    pub fn new(memory_cost: u32, time_cost: u32, parallelism: u32) -> Self {
        Self {
            memory_cost,
            time_cost,
            parallelism,
        }
    }

    /// 64 MiB, 3 passes, 4 lanes.
    #[must_use]
    pub fn production() -> Self {
        Self {
            memory_cost: 65536,
            time_cost: 3,
            parallelism: 4,
        }
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let params = Params::new(self.memory_cost, self.time_cost, self.parallelism, None)
            .map_err(|_| AuthError::PasswordHashError)?;

        Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|_| AuthError::PasswordHashError)
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed = PasswordHash::new(hash).map_err(|_| AuthError::PasswordHashError)?;

        // cost parameters are read back from the PHC string
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }

    fn decoy_hash(&self) -> String {
        format!(
            "$argon2id$v=19$m={},t={},p={}${DECOY_SALT}${DECOY_OUTPUT}",
            self.memory_cost, self.time_cost, self.parallelism
        )
    }
}

/// Hash on tokio's blocking pool so request handling is not stalled by Argon2.
pub(crate) async fn hash_blocking<H>(hasher: &H, password: &str) -> Result<String, AuthError>
where
    H: PasswordHasher + Clone + 'static,
{
    let hasher = hasher.clone();
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || hasher.hash(&password))
        .await
        .map_err(|e| AuthError::Internal(format!("hashing task failed: {e}")))?
}

pub(crate) async fn verify_blocking<H>(
    hasher: &H,
    password: &str,
    hash: &str,
) -> Result<bool, AuthError>
where
    H: PasswordHasher + Clone + 'static,
{
    let hasher = hasher.clone();
    let password = password.to_owned();
    let hash = hash.to_owned();
    tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
        .await
        .map_err(|e| AuthError::Internal(format!("verification task failed: {e}")))?
}
