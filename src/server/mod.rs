pub mod app_state;

pub use app_state::AppState;

use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::common::types::AnyResult;
use crate::rest;

/// Bind the selection API and serve it on a background task.
///
/// The bind happens here so that an unavailable port surfaces to the
/// caller; the caller decides whether that is fatal (the kiosk keeps
/// running without its network interface). Once serving, there is no
/// graceful-stop path: the service lives until process exit.
pub async fn start(state: Arc<AppState>) -> AnyResult<()> {
    let host = state.config.server.host.clone();
    let port = state.config.server.port;

    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    info!("Selection API listening on {}:{}", host, port);

    let app = rest::router()
        .with_state(state)
        // The selection UI is served from a different origin
        .layer(CorsLayer::permissive())
        .layer(tower_http::trace::TraceLayer::new_for_http());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            error!("Selection API stopped unexpectedly: {}", e);
        }
    });

    Ok(())
}
