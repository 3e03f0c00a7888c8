use crate::crypto::{Argon2Hasher, PasswordHasher, hash_blocking};
use crate::{AdminIdentity, AdminRepository, AuthError, LOG_TARGET, SecretString};

pub const DEFAULT_SEED_USERNAME: &str = "admin";
pub const DEFAULT_SEED_PASSWORD: &str = "admin123";

/// The well-known bootstrap account created by seeding.
#[derive(Debug, Clone)]
pub struct SeedCredentials {
    pub username: String,
    pub password: SecretString,
}

impl Default for SeedCredentials {
    fn default() -> Self {
        Self {
            username: DEFAULT_SEED_USERNAME.to_owned(),
            password: SecretString::new(DEFAULT_SEED_PASSWORD),
        }
    }
}

/// Creates the first admin when the store is empty. Runs at most once per
/// deployment; every later call fails with `AuthError::AlreadySeeded`.
pub struct SeedAdminAction<R, H = Argon2Hasher> {
    repository: R,
    hasher: H,
    credentials: SeedCredentials,
}

impl<R: AdminRepository> SeedAdminAction<R, Argon2Hasher> {
    pub fn new(repository: R) -> Self {
        Self::with_hasher(repository, SeedCredentials::default(), Argon2Hasher::default())
    }
}

impl<R, H> SeedAdminAction<R, H>
where
    R: AdminRepository,
    H: PasswordHasher + Clone + 'static,
{
    pub fn with_hasher(repository: R, credentials: SeedCredentials, hasher: H) -> Self {
        Self {
            repository,
            hasher,
            credentials,
        }
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(name = "seed_admin", skip_all, err))]
    pub async fn execute(&self) -> Result<AdminIdentity, AuthError> {
        if self.repository.count().await? > 0 {
            return Err(AuthError::AlreadySeeded);
        }

        let hashed = hash_blocking(&self.hasher, self.credentials.password.expose_secret()).await?;
        // the count above can be stale; create_seed is the real guard
        let admin = self
            .repository
            .create_seed(&self.credentials.username, &hashed)
            .await?;

        log::warn!(
            target: LOG_TARGET,
            "msg=\"default admin seeded, change its password\", admin_id={}, username=\"{}\"",
            admin.id,
            admin.username
        );

        Ok(admin)
    }
}
