use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::configs::{AttractConfig, AttractMode};

/// File extensions accepted when scanning a video directory.
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv", "webm", "mov", "avi", "m4v"];

/// A playable video reference: a file on disk or a remote stream URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoRef {
    Local(PathBuf),
    Remote(String),
}

impl VideoRef {
    /// Whether the referenced resource can be played right now. Remote
    /// refs are assumed reachable; the player reports otherwise.
    pub fn is_available(&self) -> bool {
        match self {
            VideoRef::Local(path) => path.exists(),
            VideoRef::Remote(_) => true,
        }
    }

    /// Player-facing location string (path or URL).
    pub fn location(&self) -> String {
        match self {
            VideoRef::Local(path) => path.display().to_string(),
            VideoRef::Remote(url) => url.clone(),
        }
    }
}

impl std::fmt::Display for VideoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.location())
    }
}

/// The two immutable source sets feeding the attract rotation.
#[derive(Debug, Clone, Default)]
pub struct VideoSources {
    /// Shuffled on every rotation.
    pub main_videos: Vec<VideoRef>,
    /// Shop/promotional clips, kept in configured order.
    pub shop_videos: Vec<VideoRef>,
}

impl VideoSources {
    pub fn from_config(config: &AttractConfig) -> Self {
        let main_videos = match config.mode {
            AttractMode::Local => scan_dir(&config.local_dir),
            AttractMode::Youtube => {
                if config.youtube_channel.is_empty() {
                    warn!("youtube mode selected but no channel configured");
                    Vec::new()
                } else {
                    vec![VideoRef::Remote(format!(
                        "https://www.youtube.com/@{}/videos",
                        config.youtube_channel
                    ))]
                }
            }
        };

        let shop_videos = config
            .shop_dir
            .as_deref()
            .map(scan_dir)
            .unwrap_or_default();

        debug!(
            "attract sources: {} main, {} shop",
            main_videos.len(),
            shop_videos.len()
        );

        Self {
            main_videos,
            shop_videos,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.main_videos.is_empty() && self.shop_videos.is_empty()
    }
}

/// Collect video files from a directory, sorted by filename so the
/// configured order is stable across runs.
fn scan_dir(dir: &Path) -> Vec<VideoRef> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("cannot read video directory {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| VIDEO_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
                .unwrap_or(false)
        })
        .collect();
    paths.sort();

    paths.into_iter().map(VideoRef::Local).collect()
}
