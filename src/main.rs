use std::error::Error;
use std::net::SocketAddr;

use jobboard_admin::api::axum::{AppState, app, cors_from_origins};
use jobboard_admin::config::AppConfig;
use jobboard_admin::jwt::TokenService;
use jobboard_admin::sqlite::{self, SqliteAdminRepository};
use jobboard_admin::tracing_config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // refuses to start without JWT_SECRET
    let config = AppConfig::from_env()?;
    tracing_config::init(&config.log)?;

    let pool = sqlite::connect(&config.database_url, config.max_connections).await?;
    tracing::info!(database_url = %config.database_url, "database ready");

    let state = AppState::new(
        SqliteAdminRepository::new(pool.clone()),
        TokenService::new(config.tokens.clone()),
    )
    .with_hasher(config.hasher.clone())
    .with_seed(config.seed.clone());

    let router = app(state, cors_from_origins(&config.cors_origins));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "admin API listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
