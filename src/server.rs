use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::net::TcpListener;

use crate::{
    Res,
    api::{self, AppState},
    config::Config,
    info, warning,
};

/// Builds the router with all routes bound to `state`.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(api::INDEX_PATH, get(api::index))
        .route(api::LOGIN_PATH, get(api::login))
        .route(api::CALLBACK_PATH, get(api::callback))
        .route(api::HEALTH_PATH, get(api::health))
        .with_state(state)
}

/// Binds `config.server_addr` and serves until Ctrl-C.
pub async fn start_api_server(config: Config) -> Res<()> {
    let listener = TcpListener::bind(config.server_addr).await?;
    serve(listener, &config).await
}

/// Serves on an already bound listener until Ctrl-C.
pub async fn serve(listener: TcpListener, config: &Config) -> Res<()> {
    let state = Arc::new(AppState::from_config(config)?);
    let app = router(state);

    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warning!("Cannot listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
