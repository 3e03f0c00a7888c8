use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use crate::{AdminCredentials, AdminIdentity, AdminRepository, AuthError, LOG_TARGET};

#[derive(Clone)]
pub struct SqliteAdminRepository {
    pool: SqlitePool,
}

impl SqliteAdminRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct AdminRecord {
    id: i64,
    username: String,
    created_at: DateTime<Utc>,
}

#[derive(FromRow)]
struct CredentialsRecord {
    id: i64,
    username: String,
    hashed_password: String,
    created_at: DateTime<Utc>,
}

impl From<AdminRecord> for AdminIdentity {
    fn from(row: AdminRecord) -> Self {
        AdminIdentity {
            id: row.id,
            username: row.username,
            created_at: row.created_at,
        }
    }
}

impl From<CredentialsRecord> for AdminCredentials {
    fn from(row: CredentialsRecord) -> Self {
        AdminCredentials {
            identity: AdminIdentity {
                id: row.id,
                username: row.username,
                created_at: row.created_at,
            },
            password_hash: row.hashed_password,
        }
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

fn database_error(operation: &str, err: &sqlx::Error) -> AuthError {
    log::error!(target: LOG_TARGET, "msg=\"database error\", operation=\"{operation}\", error=\"{err}\"");
    AuthError::DatabaseError(err.to_string())
}

#[async_trait]
impl AdminRepository for SqliteAdminRepository {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn find_by_id(&self, id: i64) -> Result<Option<AdminIdentity>, AuthError> {
        let row: Option<AdminRecord> =
            sqlx::query_as("SELECT id, username, created_at FROM admins WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| database_error("find_by_id", &e))?;

        Ok(row.map(Into::into))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, username), err))]
    async fn find_by_username(&self, username: &str) -> Result<Option<AdminIdentity>, AuthError> {
        let row: Option<AdminRecord> =
            sqlx::query_as("SELECT id, username, created_at FROM admins WHERE username = ?")
                .bind(username)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| database_error("find_by_username", &e))?;

        Ok(row.map(Into::into))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, username), err))]
    async fn find_credentials_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminCredentials>, AuthError> {
        let row: Option<CredentialsRecord> = sqlx::query_as(
            "SELECT id, username, hashed_password, created_at FROM admins WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| database_error("find_credentials_by_username", &e))?;

        Ok(row.map(Into::into))
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, username, password_hash), err)
    )]
    async fn create(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<AdminIdentity, AuthError> {
        let row: AdminRecord = sqlx::query_as(
            "INSERT INTO admins (username, hashed_password, created_at) VALUES (?, ?, ?) RETURNING id, username, created_at",
        )
        .bind(username)
        .bind(password_hash)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AuthError::AlreadyExists
            } else {
                database_error("create", &e)
            }
        })?;

        Ok(row.into())
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, username, password_hash), err)
    )]
    async fn create_seed(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<AdminIdentity, AuthError> {
        // single statement: the emptiness check and the insert cannot interleave
        let row: Option<AdminRecord> = sqlx::query_as(
            "INSERT INTO admins (username, hashed_password, created_at) SELECT ?, ?, ? WHERE NOT EXISTS (SELECT 1 FROM admins) RETURNING id, username, created_at",
        )
        .bind(username)
        .bind(password_hash)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AuthError::AlreadySeeded
            } else {
                database_error("create_seed", &e)
            }
        })?;

        row.map(Into::into).ok_or(AuthError::AlreadySeeded)
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn count(&self) -> Result<u64, AuthError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM admins")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| database_error("count", &e))?;

        Ok(u64::try_from(count).unwrap_or(0))
    }
}
