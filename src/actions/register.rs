use crate::crypto::{Argon2Hasher, PasswordHasher, hash_blocking};
use crate::jwt::{IssuedToken, TokenService};
use crate::validators::{PasswordPolicy, UsernamePolicy};
use crate::{AdminIdentity, AdminRepository, AuthError, LOG_TARGET, SecretString};

#[derive(Debug, Clone)]
pub struct RegisteredAdmin {
    pub admin: AdminIdentity,
    pub token: IssuedToken,
}

pub struct RegisterAction<R, H = Argon2Hasher> {
    repository: R,
    tokens: TokenService,
    hasher: H,
    username_policy: UsernamePolicy,
    password_policy: PasswordPolicy,
}

impl<R: AdminRepository> RegisterAction<R, Argon2Hasher> {
    pub fn new(repository: R, tokens: TokenService) -> Self {
        Self::with_hasher(repository, tokens, Argon2Hasher::default())
    }
}

impl<R, H> RegisterAction<R, H>
where
    R: AdminRepository,
    H: PasswordHasher + Clone + 'static,
{
    pub fn with_hasher(repository: R, tokens: TokenService, hasher: H) -> Self {
        Self {
            repository,
            tokens,
            hasher,
            username_policy: UsernamePolicy::default(),
            password_policy: PasswordPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_policies(mut self, username: UsernamePolicy, password: PasswordPolicy) -> Self {
        self.username_policy = username;
        self.password_policy = password;
        self
    }

    /// Creates the admin and signs it a token.
    ///
    /// The lookup up front only saves a hash on the common duplicate path; the
    /// store's own uniqueness check decides concurrent registrations.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "register_admin", skip_all, err)
    )]
    pub async fn execute(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<RegisteredAdmin, AuthError> {
        self.username_policy.validate(username)?;
        self.password_policy.validate(password.expose_secret())?;
        // stored exactly as the login form will send it
        let username = username.trim();

        if self.repository.find_by_username(username).await?.is_some() {
            return Err(AuthError::AlreadyExists);
        }

        let hashed = hash_blocking(&self.hasher, password.expose_secret()).await?;
        let admin = self.repository.create(username, &hashed).await?;
        let token = self.tokens.issue(admin.id)?;

        log::info!(target: LOG_TARGET, "msg=\"admin registered\", admin_id={}", admin.id);

        Ok(RegisteredAdmin { admin, token })
    }
}
