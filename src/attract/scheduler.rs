use std::collections::VecDeque;

use rand::seq::SliceRandom;
use tracing::debug;

use super::source::{VideoRef, VideoSources};

/// Produces the attract-mode rotation: shop/promotional clips first,
/// then one full shuffled pass over the main set, then shop clips again,
/// and so on. The sequence is lazy and infinite as long as either source
/// set is non-empty; it cannot be rewound, only `reset`.
#[derive(Debug)]
pub struct AttractScheduler {
    sources: VideoSources,
    priority_queue: VecDeque<VideoRef>,
    main_queue: VecDeque<VideoRef>,
    cycle_count: u64,
}

impl AttractScheduler {
    pub fn new(sources: VideoSources) -> Self {
        Self {
            sources,
            priority_queue: VecDeque::new(),
            main_queue: VecDeque::new(),
            cycle_count: 0,
        }
    }

    /// Next video to play, or `None` when both source sets are empty.
    ///
    /// Both queues start empty, so the very first pull refills through
    /// the same path as a rotation wrap; shop clips therefore precede
    /// the first main video as well as every later pass.
    pub fn next_video(&mut self) -> Option<VideoRef> {
        if let Some(video) = self.priority_queue.pop_front() {
            return Some(video);
        }
        if let Some(video) = self.main_queue.pop_front() {
            return Some(video);
        }
        if self.sources.is_empty() {
            return None;
        }

        self.refill();
        self.priority_queue
            .pop_front()
            .or_else(|| self.main_queue.pop_front())
    }

    /// Completed rotations over the main set (the initial seed counts as
    /// the first).
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    /// Drop both queues; the next pull reshuffles from the source sets.
    pub fn reset(&mut self) {
        self.priority_queue.clear();
        self.main_queue.clear();
        self.cycle_count = 0;
    }

    fn refill(&mut self) {
        self.cycle_count += 1;

        let mut rotation = self.sources.main_videos.clone();
        rotation.shuffle(&mut rand::thread_rng());
        self.main_queue = rotation.into();

        // Shop clips keep their configured order, round after round.
        self.priority_queue = self.sources.shop_videos.iter().cloned().collect();

        debug!(
            "rotation {}: {} main, {} shop",
            self.cycle_count,
            self.main_queue.len(),
            self.priority_queue.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(name: &str) -> VideoRef {
        VideoRef::Remote(name.to_string())
    }

    fn sources(main: &[&str], shop: &[&str]) -> VideoSources {
        VideoSources {
            main_videos: main.iter().map(|n| remote(n)).collect(),
            shop_videos: shop.iter().map(|n| remote(n)).collect(),
        }
    }

    #[test]
    fn shop_clip_precedes_first_rotation() {
        let mut scheduler = AttractScheduler::new(sources(&["A", "B"], &["X"]));

        assert_eq!(scheduler.next_video(), Some(remote("X")));

        let mut pass: Vec<VideoRef> = vec![
            scheduler.next_video().unwrap(),
            scheduler.next_video().unwrap(),
        ];
        pass.sort_by_key(|v| v.location());
        assert_eq!(pass, vec![remote("A"), remote("B")]);
    }

    #[test]
    fn shop_clip_returns_after_each_full_pass() {
        let mut scheduler = AttractScheduler::new(sources(&["A", "B"], &["X"]));

        // First round: X then both mains.
        scheduler.next_video();
        scheduler.next_video();
        scheduler.next_video();

        // Wrap: X again, then both mains in some order.
        assert_eq!(scheduler.next_video(), Some(remote("X")));
        let mut pass: Vec<VideoRef> = vec![
            scheduler.next_video().unwrap(),
            scheduler.next_video().unwrap(),
        ];
        pass.sort_by_key(|v| v.location());
        assert_eq!(pass, vec![remote("A"), remote("B")]);
    }

    #[test]
    fn each_pass_is_a_permutation_of_the_main_set() {
        let names = ["A", "B", "C", "D", "E"];
        let mut scheduler = AttractScheduler::new(sources(&names, &[]));

        for _ in 0..4 {
            let mut pass: Vec<String> = (0..names.len())
                .map(|_| scheduler.next_video().unwrap().location())
                .collect();
            pass.sort();
            assert_eq!(pass, names.iter().map(|n| n.to_string()).collect::<Vec<_>>());
        }
    }

    #[test]
    fn shop_clips_keep_configured_order() {
        let mut scheduler = AttractScheduler::new(sources(&["A"], &["X", "Y", "Z"]));

        for _ in 0..3 {
            assert_eq!(scheduler.next_video(), Some(remote("X")));
            assert_eq!(scheduler.next_video(), Some(remote("Y")));
            assert_eq!(scheduler.next_video(), Some(remote("Z")));
            assert_eq!(scheduler.next_video(), Some(remote("A")));
        }
    }

    #[test]
    fn empty_sources_always_yield_none() {
        let mut scheduler = AttractScheduler::new(VideoSources::default());

        for _ in 0..10 {
            assert_eq!(scheduler.next_video(), None);
        }
        assert_eq!(scheduler.cycle_count(), 0);
    }

    #[test]
    fn shop_only_sources_loop_the_shop_queue() {
        let mut scheduler = AttractScheduler::new(sources(&[], &["X", "Y"]));

        assert_eq!(scheduler.next_video(), Some(remote("X")));
        assert_eq!(scheduler.next_video(), Some(remote("Y")));
        assert_eq!(scheduler.next_video(), Some(remote("X")));
    }

    #[test]
    fn cycle_count_increments_per_wrap() {
        let mut scheduler = AttractScheduler::new(sources(&["A", "B"], &["X"]));
        assert_eq!(scheduler.cycle_count(), 0);

        scheduler.next_video();
        assert_eq!(scheduler.cycle_count(), 1);

        // Drain the rest of round one and wrap.
        scheduler.next_video();
        scheduler.next_video();
        scheduler.next_video();
        assert_eq!(scheduler.cycle_count(), 2);
    }

    #[test]
    fn reset_reseeds_from_sources() {
        let mut scheduler = AttractScheduler::new(sources(&["A", "B"], &["X"]));
        scheduler.next_video();
        scheduler.next_video();

        scheduler.reset();
        assert_eq!(scheduler.cycle_count(), 0);
        assert_eq!(scheduler.next_video(), Some(remote("X")));
    }
}
