pub mod playback;
pub mod runner;
pub mod scheduler;
pub mod source;
pub mod view;

pub use playback::{PlaybackController, PlaybackOptions, PlaybackState};
pub use runner::AttractRunner;
pub use scheduler::AttractScheduler;
pub use source::{VideoRef, VideoSources};
pub use view::{AttractView, LogView};
