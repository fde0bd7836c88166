use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where attract-mode content comes from.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AttractMode {
    #[default]
    Local,
    Youtube,
}

/// Attract-mode rotation and playback settings.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct AttractConfig {
    pub mode: AttractMode,
    /// Directory scanned for the main rotation in local mode.
    pub local_dir: PathBuf,
    /// Optional directory of shop/promotional clips interleaved with the
    /// main rotation. Played in filename order, never reshuffled.
    pub shop_dir: Option<PathBuf>,
    /// Channel played on repeat in youtube mode.
    pub youtube_channel: String,
    /// Playback volume, 0-100.
    pub volume: u8,
    /// Opaque cover shown before a video starts.
    pub pre_roll_ms: u64,
    /// Opaque cover shown after a video ends.
    pub post_roll_ms: u64,
    /// How often the attract view re-reads the selection store.
    pub poll_interval_ms: u64,
    /// How often the waiting text toggles its flash color.
    pub flash_interval_ms: u64,
}

impl Default for AttractConfig {
    fn default() -> Self {
        Self {
            mode: AttractMode::Local,
            local_dir: PathBuf::from("videos"),
            shop_dir: None,
            youtube_channel: String::new(),
            volume: 80,
            pre_roll_ms: 1000,
            post_roll_ms: 1000,
            poll_interval_ms: 500,
            flash_interval_ms: 800,
        }
    }
}

impl AttractConfig {
    /// Volume normalized to 0.0-1.0.
    pub fn volume_level(&self) -> f32 {
        (self.volume.min(100) as f32) / 100.0
    }
}
