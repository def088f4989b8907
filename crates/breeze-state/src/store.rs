//! Single-writer state store over a watch channel.

use tokio::sync::watch;

use breeze_core::types::id::FolderId;

use crate::action::DriveAction;
use crate::derive;
use crate::reducer::reduce;
use crate::state::DriveState;

/// Owns one [`DriveState`] per session and funnels every change through
/// the reducer.
///
/// `send_modify` makes each dispatch atomic with respect to readers; the
/// relative ordering of dispatches from overlapping async operations is
/// whatever order their completions run in.
#[derive(Debug)]
pub struct StateStore {
    tx: watch::Sender<DriveState>,
}

impl StateStore {
    /// Create a store holding the empty initial state.
    pub fn new() -> Self {
        Self {
            tx: watch::Sender::new(DriveState::default()),
        }
    }

    /// Apply one action through the reducer.
    pub fn dispatch(&self, action: DriveAction) {
        self.tx.send_modify(|state| *state = reduce(state, action));
    }

    /// Clone the current state.
    pub fn snapshot(&self) -> DriveState {
        self.tx.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<DriveState> {
        self.tx.subscribe()
    }

    /// The active folder id, derived from the breadcrumb stack.
    pub fn current_folder_id(&self) -> Option<FolderId> {
        derive::current_folder_id(&self.tx.borrow().current_path).cloned()
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}
