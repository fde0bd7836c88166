use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::selection::Selection;

/// Request body for the `select` endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct SelectRequest {
    /// Required; an absent or empty title is a client error.
    pub title: Option<String>,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

/// Response for the `status` endpoint.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub has_selection: bool,
}

/// Response for a successful `select`.
#[derive(Debug, Serialize)]
pub struct SelectResponse {
    pub success: bool,
    pub message: String,
    pub selection: Selection,
}

/// Response for the `selection` endpoint. `selection` is null when
/// nothing is selected; both cases are success responses.
#[derive(Debug, Serialize)]
pub struct SelectionResponse {
    pub success: bool,
    pub selection: Option<Selection>,
}

/// Response for the `clear` endpoint.
#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub success: bool,
    pub message: String,
}

/// Response for the `songs` endpoint.
#[derive(Debug, Serialize)]
pub struct SongsResponse {
    pub success: bool,
    pub songs: Vec<SongEntry>,
}

/// A catalog entry. The catalog itself is placeholder data; a real song
/// database is out of scope for the kiosk core.
#[derive(Debug, Clone, Serialize)]
pub struct SongEntry {
    pub id: u32,
    pub title: String,
    pub artist: String,
}

/// Error body shared by all failure responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
