use crate::crypto::{Argon2Hasher, PasswordHasher, verify_blocking};
use crate::jwt::{IssuedToken, TokenService};
use crate::{AdminIdentity, AdminRepository, AuthError, LOG_TARGET, SecretString};

#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub admin: AdminIdentity,
    pub token: IssuedToken,
}

pub struct LoginAction<R, H = Argon2Hasher> {
    repository: R,
    tokens: TokenService,
    hasher: H,
}

impl<R: AdminRepository> LoginAction<R, Argon2Hasher> {
    pub fn new(repository: R, tokens: TokenService) -> Self {
        Self::with_hasher(repository, tokens, Argon2Hasher::default())
    }
}

impl<R, H> LoginAction<R, H>
where
    R: AdminRepository,
    H: PasswordHasher + Clone + 'static,
{
    pub fn with_hasher(repository: R, tokens: TokenService, hasher: H) -> Self {
        Self {
            repository,
            tokens,
            hasher,
        }
    }

    /// Unknown usernames and wrong passwords both end in
    /// `AuthError::InvalidCredentials`. Store and hashing faults propagate
    /// unchanged so the caller can report them as server errors.
    #[cfg_attr(feature = "tracing", tracing::instrument(name = "login", skip_all, err))]
    pub async fn execute(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<LoginOutcome, AuthError> {
        let Some(credentials) = self
            .repository
            .find_credentials_by_username(username)
            .await?
        else {
            // same Argon2 work as a wrong password, so timing does not reveal
            // which usernames exist
            let decoy = self.hasher.decoy_hash();
            let _ = verify_blocking(&self.hasher, password.expose_secret(), &decoy).await;

            log::info!(target: LOG_TARGET, "msg=\"login rejected\"");
            return Err(AuthError::InvalidCredentials);
        };

        if !verify_blocking(
            &self.hasher,
            password.expose_secret(),
            &credentials.password_hash,
        )
        .await?
        {
            log::info!(target: LOG_TARGET, "msg=\"login rejected\"");
            return Err(AuthError::InvalidCredentials);
        }

        let admin = credentials.into_identity();
        let token = self.tokens.issue(admin.id)?;

        log::info!(target: LOG_TARGET, "msg=\"login succeeded\", admin_id={}", admin.id);

        Ok(LoginOutcome { admin, token })
    }
}
