pub mod handlers;
pub mod models;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::server::AppState;

/// Use Case:
/// This module implements the kiosk's selection API.
/// It allows an external selection UI (tablet, remote control page) to:
/// 1. Check that the kiosk is up via /api/status
/// 2. Set, read, and clear the active selection
/// 3. Browse the song catalog via /api/songs (placeholder data for now)
///
/// Each request runs on its own tokio worker; the handlers only ever
/// touch the shared SelectionStore, which owns all locking.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/status", get(handlers::status))
        .route("/api/select", post(handlers::select))
        .route("/api/selection", get(handlers::get_selection))
        .route("/api/clear", post(handlers::clear))
        .route("/api/songs", get(handlers::songs))
}
