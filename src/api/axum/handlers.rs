//! HTTP handlers for the admin endpoints.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;

use super::error::AppError;
use super::middleware::AuthenticatedAdmin;
use super::routes::AppState;
use crate::AdminRepository;
use crate::actions::{LoginAction, RegisterAction, SeedAdminAction};
use crate::api::{
    AdminResponse, LOGIN_SUCCESS_MESSAGE, LoginRequest, LoginResponse, MessageResponse,
    RegisterRequest, RegisterResponse, SEED_SUCCESS_MESSAGE, STATUS_MESSAGE, SeedResponse,
};

/// GET /
pub async fn status() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: STATUS_MESSAGE.to_owned(),
    })
}

/// Register a new admin and sign it a token.
///
/// POST /register
pub async fn register<R>(
    State(state): State<AppState<R>>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError>
where
    R: AdminRepository + Clone + Send + Sync + 'static,
{
    let Json(body) = body?;
    let action = RegisterAction::with_hasher(state.admin_repo, state.tokens, state.hasher);
    let registered = action.execute(&body.username, &body.password).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            id: registered.admin.id,
            username: registered.admin.username,
            token: registered.token.token,
        }),
    ))
}

/// Check credentials and return a fresh token.
///
/// POST /login
pub async fn login<R>(
    State(state): State<AppState<R>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, AppError>
where
    R: AdminRepository + Clone + Send + Sync + 'static,
{
    let Json(body) = body?;
    let action = LoginAction::with_hasher(state.admin_repo, state.tokens, state.hasher);
    let outcome = action.execute(&body.username, &body.password).await?;

    Ok(Json(LoginResponse {
        success: true,
        message: LOGIN_SUCCESS_MESSAGE.to_owned(),
        token: outcome.token.token,
    }))
}

/// Create the default admin when none exists.
///
/// GET /seed
pub async fn seed<R>(
    State(state): State<AppState<R>>,
) -> Result<(StatusCode, Json<SeedResponse>), AppError>
where
    R: AdminRepository + Clone + Send + Sync + 'static,
{
    let action = SeedAdminAction::with_hasher(state.admin_repo, state.seed, state.hasher);
    let admin = action.execute().await?;

    Ok((
        StatusCode::CREATED,
        Json(SeedResponse {
            message: SEED_SUCCESS_MESSAGE.to_owned(),
            id: admin.id,
            username: admin.username,
        }),
    ))
}

/// The admin the bearer token belongs to.
///
/// GET /me
pub async fn me(admin: AuthenticatedAdmin) -> Json<AdminResponse> {
    Json(AdminResponse::from(admin.into_inner()))
}
