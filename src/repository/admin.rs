use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::AuthError;

/// A stored admin as every read path sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminIdentity {
    pub id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// An admin together with its password hash.
///
/// Only [`AdminRepository::find_credentials_by_username`] returns this, and
/// only the login path asks for it.
#[derive(Clone)]
pub struct AdminCredentials {
    pub identity: AdminIdentity,
    pub password_hash: String,
}

impl AdminCredentials {
    pub fn into_identity(self) -> AdminIdentity {
        self.identity
    }
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("identity", &self.identity)
            .field("password_hash", &"[REDACTED]")
            .finish()
    }
}

#[cfg(any(test, feature = "mocks"))]
impl AdminIdentity {
    pub fn mock(id: i64, username: &str) -> Self {
        AdminIdentity {
            id,
            username: username.to_owned(),
            created_at: Utc::now(),
        }
    }
}

#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<AdminIdentity>, AuthError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<AdminIdentity>, AuthError>;

    /// The one projection that carries the password hash.
    async fn find_credentials_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminCredentials>, AuthError>;

    /// Fails with `AuthError::AlreadyExists` when the username is taken,
    /// including when a concurrent insert got there first.
    async fn create(&self, username: &str, password_hash: &str)
    -> Result<AdminIdentity, AuthError>;

    /// Inserts the admin only if the store holds no admins at all, as one
    /// atomic step. Fails with `AuthError::AlreadySeeded` otherwise.
    async fn create_seed(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<AdminIdentity, AuthError>;

    async fn count(&self) -> Result<u64, AuthError>;
}
