use std::path::PathBuf;

use thiserror::Error;

use crate::attract::source::VideoRef;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("media file not found: {0}")]
    Missing(PathBuf),
    #[error("failed to launch player: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Notification from a media surface, delivered on the shared event
/// channel so the attract loop processes it on its own task.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// Playback reached end of media.
    Ended,
    /// The renderer failed mid-playback.
    Failed(String),
}

/// The external media-rendering collaborator.
///
/// A surface must eventually emit exactly one `MediaEvent` for every
/// successful `play` call, unless `stop` tears the playback down first.
/// A surface that never signals completion stalls the attract loop on
/// the current item; the controller does not mask that.
pub trait MediaSurface: Send {
    /// Present the opaque cover used for pre/post-roll intervals.
    fn show_black(&mut self);

    /// Begin playback of `video` and subscribe to its completion.
    fn play(&mut self, video: &VideoRef) -> Result<(), MediaError>;

    /// Tear down the current playback, if any. Must not produce an event
    /// for the torn-down item.
    fn stop(&mut self);
}
