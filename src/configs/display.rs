use serde::{Deserialize, Serialize};

/// Display preferences passed through to the media surface.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub fullscreen: bool,
    pub width: u32,
    pub height: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            fullscreen: false,
            width: 1920,
            height: 1080,
        }
    }
}
