pub mod store;

pub use store::{Selection, SelectionError, SelectionStore};
