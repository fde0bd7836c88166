use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use tokio::{process::Command, task::JoinHandle};
use tracing::{debug, info};

use super::surface::{MediaError, MediaEvent, MediaSurface};
use crate::attract::source::VideoRef;
use crate::configs::DisplayConfig;

const DEFAULT_PLAYER: &str = "mpv";

/// Media surface backed by an external mpv process.
///
/// Each `play` spawns one child and a watcher task that reports the exit
/// as a `MediaEvent`. `stop` kills the current child; a generation
/// counter keeps a late exit from a previous child from being delivered
/// as the current item's completion.
pub struct MpvSurface {
    player: String,
    events: flume::Sender<MediaEvent>,
    /// Normalized 0.0-1.0.
    volume: f32,
    display: DisplayConfig,
    generation: Arc<AtomicU64>,
    watcher: Option<JoinHandle<()>>,
}

impl MpvSurface {
    pub fn new(events: flume::Sender<MediaEvent>, volume: f32, display: DisplayConfig) -> Self {
        Self::with_player(DEFAULT_PLAYER, events, volume, display)
    }

    /// Use a different player binary (it must exit when playback ends).
    pub fn with_player(
        player: impl Into<String>,
        events: flume::Sender<MediaEvent>,
        volume: f32,
        display: DisplayConfig,
    ) -> Self {
        Self {
            player: player.into(),
            events,
            volume,
            display,
            generation: Arc::new(AtomicU64::new(0)),
            watcher: None,
        }
    }
}

impl MediaSurface for MpvSurface {
    fn show_black(&mut self) {
        // The kiosk shell window is itself opaque black; covering simply
        // means no child is rendering on top of it.
        debug!("surface covered");
    }

    fn play(&mut self, video: &VideoRef) -> Result<(), MediaError> {
        if let VideoRef::Local(path) = video {
            if !path.exists() {
                return Err(MediaError::Missing(path.clone()));
            }
        }

        let mut command = Command::new(&self.player);
        command.arg("--no-terminal");
        if self.display.fullscreen {
            command.arg("--fullscreen");
        } else {
            command.arg(format!(
                "--geometry={}x{}",
                self.display.width, self.display.height
            ));
        }
        command.arg(format!(
            "--volume={}",
            (self.volume.clamp(0.0, 1.0) * 100.0).round() as u32
        ));
        command.arg(video.location());
        command.kill_on_drop(true);

        let mut child = command.spawn()?;
        info!("playing {}", video);

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generations = self.generation.clone();
        let events = self.events.clone();
        let player = self.player.clone();

        self.watcher = Some(tokio::spawn(async move {
            let event = match child.wait().await {
                Ok(status) if status.success() => MediaEvent::Ended,
                Ok(status) => MediaEvent::Failed(format!("{} exited with {}", player, status)),
                Err(e) => MediaEvent::Failed(format!("failed to wait on {}: {}", player, e)),
            };
            // stop() bumps the generation, so an exit observed after a
            // teardown is discarded instead of completing the next item.
            if generations.load(Ordering::SeqCst) == generation {
                let _ = events.send(event);
            }
        }));

        Ok(())
    }

    fn stop(&mut self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(watcher) = self.watcher.take() {
            // Aborting the watcher drops the child handle; kill_on_drop
            // reaps the player process.
            watcher.abort();
        }
    }
}
