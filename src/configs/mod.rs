pub mod attract;
pub mod base;
pub mod display;
pub mod logging;
pub mod server;

pub use attract::*;
pub use base::*;
pub use display::*;
pub use logging::*;
pub use server::*;
