//! Selection bookkeeping.

use std::sync::Arc;

use breeze_state::{DriveAction, StateStore};

/// Synchronous selection operations.
///
/// The selection is an ordered list, not a set: selecting an id twice
/// records it twice, and removals elsewhere never prune it. Deselection
/// compensates by removing every occurrence.
#[derive(Debug, Clone)]
pub struct SelectionOps {
    store: Arc<StateStore>,
}

impl SelectionOps {
    /// Create the selection module.
    pub fn new(store: Arc<StateStore>) -> Self {
        Self { store }
    }

    /// Append an id to the selection, unconditionally.
    pub fn select_item(&self, id: impl Into<String>) {
        let mut selected = self.store.snapshot().selected;
        selected.push(id.into());
        self.store.dispatch(DriveAction::SetSelected(selected));
    }

    /// Replace the selection wholesale (marquee / bulk selection).
    pub fn select_multiple(&self, ids: Vec<String>) {
        self.store.dispatch(DriveAction::SetSelected(ids));
    }

    /// Remove every occurrence of an id from the selection.
    pub fn deselect_item(&self, id: &str) {
        let mut selected = self.store.snapshot().selected;
        selected.retain(|s| s != id);
        self.store.dispatch(DriveAction::SetSelected(selected));
    }

    /// Empty the selection.
    pub fn clear_selection(&self) {
        self.store.dispatch(DriveAction::ClearSelection);
    }
}
