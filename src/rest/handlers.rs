use std::sync::Arc;

use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use tracing::info;

use crate::rest::models::*;
use crate::selection::SelectionError;
use crate::server::AppState;

/// GET /api/status
pub async fn status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "running",
        has_selection: state.store.has_selection(),
    })
}

/// POST /api/select
pub async fn select(
    State(state): State<Arc<AppState>>,
    body: Result<Json<SelectRequest>, JsonRejection>,
) -> Result<Json<SelectResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Json(request) = body.map_err(|rejection| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("JSON body required: {}", rejection.body_text()),
            }),
        )
    })?;

    let title = request.title.unwrap_or_default();
    match state.store.set(title, request.artist, request.metadata) {
        Ok(selection) => {
            info!("Selection set: {}", selection.title);
            Ok(Json(SelectResponse {
                success: true,
                message: format!("Selected: {}", selection.title),
                selection,
            }))
        }
        Err(e @ SelectionError::EmptyTitle) => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )),
    }
}

/// GET /api/selection
pub async fn get_selection(State(state): State<Arc<AppState>>) -> Json<SelectionResponse> {
    Json(SelectionResponse {
        success: true,
        selection: state.store.get(),
    })
}

/// POST /api/clear
pub async fn clear(State(state): State<Arc<AppState>>) -> Json<ClearResponse> {
    state.store.clear();
    info!("Selection cleared");
    Json(ClearResponse {
        success: true,
        message: "Selection cleared".to_string(),
    })
}

/// GET /api/songs
///
/// Placeholder catalog. A real implementation would back this with the
/// song database; the kiosk core deliberately does not model one.
pub async fn songs() -> Json<SongsResponse> {
    Json(SongsResponse {
        success: true,
        songs: vec![
            SongEntry {
                id: 1,
                title: "Sample Song 1".to_string(),
                artist: "Sample Artist 1".to_string(),
            },
            SongEntry {
                id: 2,
                title: "Sample Song 2".to_string(),
                artist: "Sample Artist 2".to_string(),
            },
        ],
    })
}
