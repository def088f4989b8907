//! Target-folder scope for create and upload operations.

use breeze_core::types::id::FolderId;
use breeze_state::StateStore;

/// Where a new item should land.
///
/// Callers need to distinguish "no preference" (use the folder currently
/// being viewed) from an explicit request for root; this enum makes that
/// three-way choice explicit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetFolder {
    /// The folder currently open in the navigation stack.
    Current,
    /// The root container.
    Root,
    /// An explicit folder.
    In(FolderId),
}

impl TargetFolder {
    /// Resolve the scope against the live navigation state.
    pub(crate) fn resolve(&self, store: &StateStore) -> Option<FolderId> {
        match self {
            Self::Current => store.current_folder_id(),
            Self::Root => None,
            Self::In(id) => Some(id.clone()),
        }
    }
}
