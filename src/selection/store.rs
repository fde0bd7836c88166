use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::common::now_ms;

/// The currently chosen song. Held by the store as a single unit; readers
/// only ever see complete records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    /// Unix timestamp in milliseconds, stamped when the selection was set.
    pub created_at: u64,
}

#[derive(Debug, Error, PartialEq)]
pub enum SelectionError {
    #[error("title must not be empty")]
    EmptyTitle,
}

/// Thread-safe holder for at most one active selection.
///
/// The slot is guarded by a single mutex; every operation is a short O(1)
/// critical section with no I/O inside the lock.
#[derive(Debug, Default)]
pub struct SelectionStore {
    current: Mutex<Option<Selection>>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held selection wholesale. Returns a copy of the stored
    /// record, stamped with the current time.
    pub fn set(
        &self,
        title: impl Into<String>,
        artist: impl Into<String>,
        metadata: Map<String, Value>,
    ) -> Result<Selection, SelectionError> {
        let title = title.into();
        if title.is_empty() {
            return Err(SelectionError::EmptyTitle);
        }

        let selection = Selection {
            title,
            artist: artist.into(),
            metadata,
            created_at: now_ms(),
        };

        *self.current.lock() = Some(selection.clone());
        Ok(selection)
    }

    /// Snapshot of the current selection, if any.
    pub fn get(&self) -> Option<Selection> {
        self.current.lock().clone()
    }

    /// Drop the held selection. Idempotent.
    pub fn clear(&self) {
        *self.current.lock() = None;
    }

    pub fn has_selection(&self) -> bool {
        self.current.lock().is_some()
    }
}
