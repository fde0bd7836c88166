use std::sync::Arc;

use crate::{configs::Config, selection::SelectionStore};

/// Top-level application state.
///
/// Handlers hold no state of their own; everything they touch lives here,
/// and all concurrency safety is delegated to the selection store.
pub struct AppState {
    pub store: Arc<SelectionStore>,
    pub config: Config,
}
