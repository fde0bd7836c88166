use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, info, warn};

use super::source::VideoRef;
use crate::media::MediaSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    /// Opaque cover before the video is revealed.
    PreBlack,
    Playing,
    /// Opaque cover after the video ends.
    PostBlack,
}

/// Per-start flags; opening/ending sequences may skip either roll.
#[derive(Debug, Clone, Copy)]
pub struct PlaybackOptions {
    pub pre_roll: bool,
    pub post_roll: bool,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            pre_roll: true,
            post_roll: true,
        }
    }
}

/// Drives one media element through idle -> pre-roll black -> playing ->
/// post-roll black -> idle.
///
/// The controller itself is synchronous; the attract loop feeds it timer
/// expirations and end-of-media notifications. A video that is missing
/// (or fails to launch) at playback time is treated as an immediate
/// completion: the controller returns to idle without entering Playing
/// so the loop moves on to the next item.
pub struct PlaybackController {
    surface: Box<dyn MediaSurface>,
    state: PlaybackState,
    current: Option<VideoRef>,
    opts: PlaybackOptions,
    entered_at: Instant,
    deadline: Option<Instant>,
    pre_roll: Duration,
    post_roll: Duration,
}

impl PlaybackController {
    pub fn new(surface: Box<dyn MediaSurface>, pre_roll: Duration, post_roll: Duration) -> Self {
        Self {
            surface,
            state: PlaybackState::Idle,
            current: None,
            opts: PlaybackOptions::default(),
            entered_at: Instant::now(),
            deadline: None,
            pre_roll,
            post_roll,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == PlaybackState::Idle
    }

    pub fn current(&self) -> Option<&VideoRef> {
        self.current.as_ref()
    }

    /// Expiry of the current black interval, if one is running.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Begin playback of `video`. Only valid from idle.
    pub fn start(&mut self, video: VideoRef, opts: PlaybackOptions) {
        if self.state != PlaybackState::Idle {
            warn!("start ignored while {:?}", self.state);
            return;
        }

        self.current = Some(video);
        self.opts = opts;

        if opts.pre_roll {
            self.surface.show_black();
            self.deadline = Some(Instant::now() + self.pre_roll);
            self.enter(PlaybackState::PreBlack);
        } else {
            self.enter_playing();
        }
    }

    /// A black-interval timer expired.
    pub fn timer_elapsed(&mut self) {
        match self.state {
            PlaybackState::PreBlack => {
                self.deadline = None;
                self.enter_playing();
            }
            PlaybackState::PostBlack => {
                self.deadline = None;
                self.current = None;
                self.enter(PlaybackState::Idle);
            }
            // Stale timer from a state already left.
            _ => {}
        }
    }

    /// End-of-media notification from the surface.
    pub fn media_ended(&mut self) {
        if self.state != PlaybackState::Playing {
            debug!("end-of-media ignored while {:?}", self.state);
            return;
        }

        self.surface.stop();
        if self.opts.post_roll {
            self.surface.show_black();
            self.deadline = Some(Instant::now() + self.post_roll);
            self.enter(PlaybackState::PostBlack);
        } else {
            self.current = None;
            self.enter(PlaybackState::Idle);
        }
    }

    fn enter_playing(&mut self) {
        let Some(video) = self.current.clone() else {
            self.enter(PlaybackState::Idle);
            return;
        };

        if !video.is_available() {
            info!("skipping missing video {}", video);
            self.finish_skipped();
            return;
        }

        match self.surface.play(&video) {
            Ok(()) => self.enter(PlaybackState::Playing),
            Err(e) => {
                warn!("skipping {}: {}", video, e);
                self.finish_skipped();
            }
        }
    }

    /// The finished continuation for items that never reached Playing:
    /// straight back to idle so the loop pulls the next item.
    fn finish_skipped(&mut self) {
        self.surface.stop();
        self.current = None;
        self.deadline = None;
        self.enter(PlaybackState::Idle);
    }

    fn enter(&mut self, state: PlaybackState) {
        debug!(
            "{:?} -> {:?} after {:?}",
            self.state,
            state,
            self.entered_at.elapsed()
        );
        self.state = state;
        self.entered_at = Instant::now();
    }
}
