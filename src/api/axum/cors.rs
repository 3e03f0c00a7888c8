//! CORS layers for the admin API.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;

/// Any origin, method, and header.
pub fn permissive() -> CorsLayer {
    CorsLayer::permissive()
}

/// Restricts callers to `allowed_origins`. An empty list, or one containing
/// `*`, falls back to [`permissive`].
pub fn from_origins(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() || allowed_origins.iter().any(|o| o == "*") {
        return permissive();
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|s| s.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .max_age(std::time::Duration::from_secs(3600))
}
