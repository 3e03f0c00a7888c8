#![allow(clippy::unwrap_used)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use crate::AuthError;

use super::admin::{AdminCredentials, AdminIdentity, AdminRepository};

/// In-memory credential store. Every check and insert happens under one lock,
/// so the uniqueness and seeding guarantees hold under concurrency.
#[derive(Clone, Default)]
pub struct MockAdminRepository {
    pub admins: Arc<Mutex<Vec<AdminCredentials>>>,
    unavailable: Arc<AtomicBool>,
}

impl MockAdminRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call fail with a database error until switched back.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.admins.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_available(&self) -> Result<(), AuthError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AuthError::DatabaseError("store unreachable".to_owned()));
        }
        Ok(())
    }

    fn insert(admins: &mut Vec<AdminCredentials>, username: &str, hash: &str) -> AdminIdentity {
        let identity = AdminIdentity {
            id: admins.len() as i64 + 1,
            username: username.to_owned(),
            created_at: Utc::now(),
        };
        admins.push(AdminCredentials {
            identity: identity.clone(),
            password_hash: hash.to_owned(),
        });
        identity
    }
}

#[async_trait]
impl AdminRepository for MockAdminRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<AdminIdentity>, AuthError> {
        self.check_available()?;
        let admins = self.admins.lock().unwrap();
        Ok(admins
            .iter()
            .find(|a| a.identity.id == id)
            .map(|a| a.identity.clone()))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<AdminIdentity>, AuthError> {
        Ok(self
            .find_credentials_by_username(username)
            .await?
            .map(AdminCredentials::into_identity))
    }

    async fn find_credentials_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminCredentials>, AuthError> {
        self.check_available()?;
        let admins = self.admins.lock().unwrap();
        Ok(admins
            .iter()
            .find(|a| a.identity.username == username)
            .cloned())
    }

    async fn create(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<AdminIdentity, AuthError> {
        self.check_available()?;
        let mut admins = self.admins.lock().unwrap();
        if admins.iter().any(|a| a.identity.username == username) {
            return Err(AuthError::AlreadyExists);
        }
        Ok(Self::insert(&mut admins, username, password_hash))
    }

    async fn create_seed(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<AdminIdentity, AuthError> {
        self.check_available()?;
        let mut admins = self.admins.lock().unwrap();
        if !admins.is_empty() {
            return Err(AuthError::AlreadySeeded);
        }
        Ok(Self::insert(&mut admins, username, password_hash))
    }

    async fn count(&self) -> Result<u64, AuthError> {
        self.check_available()?;
        Ok(self.admins.lock().unwrap().len() as u64)
    }
}
