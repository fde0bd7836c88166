use tracing::info;

use crate::selection::Selection;

/// Display seam for the attract screen.
///
/// The graphical shell implements this over its labels; the daemon ships
/// a logging implementation so the core runs headless. Injected into the
/// attract loop rather than inherited from any windowing type.
pub trait AttractView: Send {
    /// No selection: show the waiting text, flashing its accent color.
    fn show_waiting(&mut self, flash_on: bool);

    /// A selection is active: show what is queued up.
    fn show_selection(&mut self, selection: &Selection);
}

/// Headless view that logs display transitions, deduplicated so the
/// periodic polls don't flood the log.
#[derive(Debug, Default)]
pub struct LogView {
    last: Option<String>,
}

impl LogView {
    pub fn new() -> Self {
        Self::default()
    }

    fn transition(&mut self, text: String) {
        if self.last.as_deref() != Some(text.as_str()) {
            info!("display: {}", text);
            self.last = Some(text);
        }
    }
}

impl AttractView for LogView {
    fn show_waiting(&mut self, _flash_on: bool) {
        self.transition("awaiting selection".to_string());
    }

    fn show_selection(&mut self, selection: &Selection) {
        let text = if selection.artist.is_empty() {
            format!("selected: {}", selection.title)
        } else {
            format!("selected: {} - {}", selection.title, selection.artist)
        };
        self.transition(text);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Map;

    use super::*;
    use crate::selection::SelectionStore;

    #[test]
    fn log_view_dedupes_repeated_states() {
        let store = SelectionStore::new();
        store.set("Song", "Artist", Map::new()).unwrap();
        let selection = store.get().unwrap();

        let mut view = LogView::new();
        view.show_waiting(false);
        assert_eq!(view.last.as_deref(), Some("awaiting selection"));

        view.show_selection(&selection);
        assert_eq!(view.last.as_deref(), Some("selected: Song - Artist"));

        // Same state again keeps the cached text.
        view.show_selection(&selection);
        assert_eq!(view.last.as_deref(), Some("selected: Song - Artist"));
    }
}
