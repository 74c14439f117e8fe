//! Axum server setup and startup

use std::net::SocketAddr;

use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes::create_router;
use super::shared::AppStateHandle;

/// Run the API server until the shutdown signal flips
pub async fn run_server(
    addr: SocketAddr,
    cors_enabled: bool,
    state: AppStateHandle,
    mut shutdown_rx: tokio::sync::watch::Receiver<bool>,
) -> Result<(), std::io::Error> {
    let mut app = create_router(state).layer(TraceLayer::new_for_http());

    if cors_enabled {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("API server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.changed().await;
            log::info!("API server shutting down gracefully");
        })
        .await
}
