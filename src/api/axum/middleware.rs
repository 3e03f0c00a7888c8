use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use super::error::AppError;
use super::routes::AppState;
use crate::{AdminIdentity, AdminRepository, AuthError};

/// Resolves the bearer token on a request to the admin it was issued to.
#[derive(Debug, Clone)]
pub struct AuthenticatedAdmin {
    admin: AdminIdentity,
}

impl AuthenticatedAdmin {
    pub fn into_inner(self) -> AdminIdentity {
        self.admin
    }

    pub fn admin(&self) -> &AdminIdentity {
        &self.admin
    }
}

pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()
        .and_then(|auth| auth.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(ToOwned::to_owned)
}

impl<R> FromRequestParts<AppState<R>> for AuthenticatedAdmin
where
    R: AdminRepository + Clone + Send + Sync + 'static,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<R>,
    ) -> Result<Self, Self::Rejection> {
        let token =
            extract_bearer_token(&parts.headers).ok_or(AppError(AuthError::TokenInvalid))?;

        let admin_id = state.tokens.verify(&token)?;

        let admin = state
            .admin_repo
            .find_by_id(admin_id)
            .await?
            .ok_or(AppError(AuthError::TokenInvalid))?;

        Ok(AuthenticatedAdmin { admin })
    }
}
