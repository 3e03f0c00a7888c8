//! Axum bindings for the admin endpoints.

mod cors;
mod error;
mod handlers;
mod middleware;
mod routes;

pub use cors::{from_origins as cors_from_origins, permissive as permissive_cors};
pub use error::AppError;
pub use middleware::{AuthenticatedAdmin, extract_bearer_token};
pub use routes::{ADMIN_BASE_PATH, AppState, admin_routes, app};
