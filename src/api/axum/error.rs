use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::api::ErrorResponse;
use crate::{AuthError, LOG_TARGET};

/// converts `AuthError` into appropriate HTTP responses
#[derive(Debug)]
pub struct AppError(pub AuthError);

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        // serde detail stays in the log
        log::debug!(target: LOG_TARGET, "msg=\"request body rejected\", error=\"{rejection}\"");
        Self(AuthError::MalformedRequest)
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            AuthError::AlreadyExists
            | AuthError::AlreadySeeded
            | AuthError::Validation(_)
            | AuthError::MalformedRequest => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials | AuthError::TokenInvalid => StatusCode::UNAUTHORIZED,
            AuthError::PasswordHashError
            | AuthError::ConfigurationError(_)
            | AuthError::DatabaseError(_)
            | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if self.0.is_internal() {
            // the response body only carries the generic message
            log::error!(target: LOG_TARGET, "msg=\"request failed\", error=\"{}\"", self.0);
        }

        (status, Json(ErrorResponse::from(self.0))).into_response()
    }
}
