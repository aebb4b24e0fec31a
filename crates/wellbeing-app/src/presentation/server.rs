use anyhow::Context;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::time::Duration as StdDuration;
use tokio::net::TcpListener;
use tokio::signal::{self, ctrl_c};
use tower_http::cors::CorsLayer;
use tracing::info;

use super::middleware::request_tracing;
use super::routes;
use super::state::AppState;
use wellbeing_infrastructure::config::AppConfig;
use wellbeing_infrastructure::persistence::Database;

const SESSION_PURGE_INTERVAL: StdDuration = StdDuration::from_secs(10 * 60);

/// All HTTP routes with permissive CORS and request tracing
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::root))
        .route("/register", post(routes::register))
        .route("/token", post(routes::login))
        .route("/checklist", post(routes::save_checklist))
        .route("/checklist/{date}", get(routes::get_checklist))
        .route("/streaks", get(routes::get_streaks))
        .layer(middleware::from_fn(request_tracing))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Open the database, wire the state and serve until ctrl-c / SIGTERM
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let db_path = config.db_path.to_string_lossy().to_string();
    info!("Opening database at {}", db_path);

    let db = Database::new(&db_path)
        .await
        .context("failed to open database")?;
    db.run_migrations()
        .await
        .context("failed to run migrations")?;

    let state = AppState::new(db.pool().clone(), config.token_ttl);
    spawn_session_purge(state.clone());

    let address = config.bind_addr();
    let listener = TcpListener::bind(address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;
    info!("Server running on {}", address);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    db.pool().close().await;
    info!("Server shut down");
    Ok(())
}

fn spawn_session_purge(state: AppState) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_PURGE_INTERVAL);
        loop {
            interval.tick().await;
            if let Err(e) = state.services.auth.purge_expired_sessions().await {
                log::warn!("[auth] session purge failed: {}", e.format_with_code());
            }
        }
    });
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            log::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                log::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
