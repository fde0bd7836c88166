use std::sync::Arc;
use std::time::Duration;

use tokio::time::{self, MissedTickBehavior};
use tracing::warn;

use super::playback::{PlaybackController, PlaybackOptions};
use super::scheduler::AttractScheduler;
use super::view::AttractView;
use crate::media::MediaEvent;
use crate::selection::SelectionStore;

/// The single cooperative loop behind attract mode.
///
/// Everything the loop owns (scheduler, controller, view) is touched
/// only from this task; the selection store is the one resource shared
/// with the HTTP workers, and media surfaces report back exclusively
/// through the event channel. Nothing here blocks: each iteration waits
/// on whichever of the black-interval deadline, the media-event channel,
/// or the poll/flash timers fires first.
pub struct AttractRunner {
    scheduler: AttractScheduler,
    controller: PlaybackController,
    store: Arc<SelectionStore>,
    view: Box<dyn AttractView>,
    events: flume::Receiver<MediaEvent>,
    poll_interval: Duration,
    flash_interval: Duration,
    flash_on: bool,
}

impl AttractRunner {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        scheduler: AttractScheduler,
        controller: PlaybackController,
        store: Arc<SelectionStore>,
        view: Box<dyn AttractView>,
        events: flume::Receiver<MediaEvent>,
        poll_interval: Duration,
        flash_interval: Duration,
    ) -> Self {
        Self {
            scheduler,
            controller,
            store,
            view,
            events,
            poll_interval,
            flash_interval,
            flash_on: false,
        }
    }

    pub async fn run(mut self) {
        // interval() panics on zero, so a zeroed-out config degrades to
        // the fastest tick instead of taking the kiosk down.
        let mut poll = time::interval(self.poll_interval.max(Duration::from_millis(1)));
        let mut flash = time::interval(self.flash_interval.max(Duration::from_millis(1)));
        poll.set_missed_tick_behavior(MissedTickBehavior::Delay);
        flash.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            // At most one start attempt per wakeup: a skipped item parks
            // on the next timer tick instead of spinning through the
            // whole rotation.
            if self.controller.is_idle() {
                if let Some(video) = self.scheduler.next_video() {
                    self.controller.start(video, PlaybackOptions::default());
                }
            }

            let deadline = self.controller.deadline();
            tokio::select! {
                _ = time::sleep_until(deadline.unwrap_or_else(time::Instant::now)), if deadline.is_some() => {
                    self.controller.timer_elapsed();
                }
                Ok(event) = self.events.recv_async() => {
                    match event {
                        MediaEvent::Ended => self.controller.media_ended(),
                        MediaEvent::Failed(reason) => {
                            warn!("playback failed, moving on: {}", reason);
                            self.controller.media_ended();
                        }
                    }
                }
                _ = poll.tick() => self.refresh_view(),
                _ = flash.tick() => {
                    self.flash_on = !self.flash_on;
                    if !self.store.has_selection() {
                        self.view.show_waiting(self.flash_on);
                    }
                }
            }
        }
    }

    fn refresh_view(&mut self) {
        match self.store.get() {
            Some(selection) => self.view.show_selection(&selection),
            None => self.view.show_waiting(self.flash_on),
        }
    }
}

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;
    use serde_json::Map;

    use super::*;
    use crate::attract::source::{VideoRef, VideoSources};
    use crate::media::{MediaError, MediaSurface};
    use crate::selection::Selection;

    #[derive(Clone, Default)]
    struct PlayLog(Arc<Mutex<Vec<String>>>);

    impl PlayLog {
        fn plays(&self) -> Vec<String> {
            self.0.lock().clone()
        }
    }

    struct FakeSurface {
        log: PlayLog,
    }

    impl MediaSurface for FakeSurface {
        fn show_black(&mut self) {}

        fn play(&mut self, video: &VideoRef) -> Result<(), MediaError> {
            self.log.0.lock().push(video.location());
            Ok(())
        }

        fn stop(&mut self) {}
    }

    #[derive(Clone, Default)]
    struct ViewLog(Arc<Mutex<Vec<String>>>);

    struct RecordingView {
        log: ViewLog,
    }

    impl AttractView for RecordingView {
        fn show_waiting(&mut self, flash_on: bool) {
            self.log.0.lock().push(format!("waiting {}", flash_on));
        }

        fn show_selection(&mut self, selection: &Selection) {
            self.log.0.lock().push(format!("selection {}", selection.title));
        }
    }

    struct Fixture {
        play_log: PlayLog,
        view_log: ViewLog,
        store: Arc<SelectionStore>,
        events: flume::Sender<MediaEvent>,
        runner: AttractRunner,
    }

    fn fixture(main: &[&str], shop: &[&str]) -> Fixture {
        let play_log = PlayLog::default();
        let view_log = ViewLog::default();
        let store = Arc::new(SelectionStore::new());
        let (tx, rx) = flume::unbounded();

        let sources = VideoSources {
            main_videos: main.iter().map(|n| VideoRef::Remote(n.to_string())).collect(),
            shop_videos: shop.iter().map(|n| VideoRef::Remote(n.to_string())).collect(),
        };
        let controller = PlaybackController::new(
            Box::new(FakeSurface {
                log: play_log.clone(),
            }),
            Duration::from_millis(1000),
            Duration::from_millis(1000),
        );
        let runner = AttractRunner::new(
            AttractScheduler::new(sources),
            controller,
            store.clone(),
            Box::new(RecordingView {
                log: view_log.clone(),
            }),
            rx,
            Duration::from_millis(500),
            Duration::from_millis(800),
        );

        Fixture {
            play_log,
            view_log,
            store,
            events: tx,
            runner,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn pre_roll_delays_playback_then_plays_shop_first() {
        let f = fixture(&["A", "B"], &["X"]);
        tokio::spawn(f.runner.run());

        // Still covered during the pre-roll.
        time::sleep(Duration::from_millis(900)).await;
        assert!(f.play_log.plays().is_empty());

        time::sleep(Duration::from_millis(200)).await;
        assert_eq!(f.play_log.plays(), vec!["X"]);
    }

    #[tokio::test(start_paused = true)]
    async fn end_of_media_advances_through_post_and_pre_roll() {
        let f = fixture(&["A"], &[]);
        tokio::spawn(f.runner.run());

        time::sleep(Duration::from_millis(1100)).await;
        assert_eq!(f.play_log.plays().len(), 1);

        f.events.send(MediaEvent::Ended).unwrap();
        // 1000ms post-roll + 1000ms pre-roll before the next item starts.
        time::sleep(Duration::from_millis(2200)).await;
        assert_eq!(f.play_log.plays().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_playback_also_advances() {
        let f = fixture(&["A"], &[]);
        tokio::spawn(f.runner.run());

        time::sleep(Duration::from_millis(1100)).await;
        assert_eq!(f.play_log.plays().len(), 1);

        f.events.send(MediaEvent::Failed("gone".into())).unwrap();
        time::sleep(Duration::from_millis(2200)).await;
        assert_eq!(f.play_log.plays().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_sources_idle_without_spinning() {
        let f = fixture(&[], &[]);
        tokio::spawn(f.runner.run());

        time::sleep(Duration::from_secs(10)).await;
        assert!(f.play_log.plays().is_empty());
        // The loop still serviced its timers.
        assert!(!f.view_log.0.lock().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn poll_tick_reflects_the_store() {
        let f = fixture(&[], &[]);
        let store = f.store.clone();
        let view_log = f.view_log.clone();
        tokio::spawn(f.runner.run());

        time::sleep(Duration::from_millis(600)).await;
        assert!(
            view_log
                .0
                .lock()
                .iter()
                .any(|entry| entry.starts_with("waiting"))
        );

        store.set("Lemon", "Kenshi Yonezu", Map::new()).unwrap();
        time::sleep(Duration::from_millis(600)).await;
        assert!(view_log.0.lock().contains(&"selection Lemon".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn waiting_text_flashes_both_ways() {
        let f = fixture(&[], &[]);
        let view_log = f.view_log.clone();
        tokio::spawn(f.runner.run());

        time::sleep(Duration::from_millis(2500)).await;
        let entries = view_log.0.lock().clone();
        assert!(entries.contains(&"waiting true".to_string()));
        assert!(entries.contains(&"waiting false".to_string()));
    }
}
