pub mod mpv;
pub mod surface;

pub use mpv::MpvSurface;
pub use surface::{MediaError, MediaEvent, MediaSurface};
