use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::AdminRepository;
use crate::actions::SeedCredentials;
use crate::crypto::Argon2Hasher;
use crate::jwt::TokenService;

/// Where the server binary mounts [`admin_routes`].
pub const ADMIN_BASE_PATH: &str = "/api/admin";

#[derive(Clone)]
pub struct AppState<R> {
    pub admin_repo: R,
    pub tokens: TokenService,
    pub hasher: Argon2Hasher,
    pub seed: SeedCredentials,
}

impl<R> AppState<R> {
    pub fn new(admin_repo: R, tokens: TokenService) -> Self {
        Self {
            admin_repo,
            tokens,
            hasher: Argon2Hasher::default(),
            seed: SeedCredentials::default(),
        }
    }

    #[must_use]
    pub fn with_hasher(mut self, hasher: Argon2Hasher) -> Self {
        self.hasher = hasher;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: SeedCredentials) -> Self {
        self.seed = seed;
        self
    }
}

pub fn admin_routes<R>() -> Router<AppState<R>>
where
    R: AdminRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(handlers::status))
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .route("/seed", get(handlers::seed::<R>))
        .route("/me", get(handlers::me))
}

/// The admin routes under [`ADMIN_BASE_PATH`] with request tracing and `cors`.
pub fn app<R>(state: AppState<R>, cors: CorsLayer) -> Router
where
    R: AdminRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .nest(ADMIN_BASE_PATH, admin_routes::<R>())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
