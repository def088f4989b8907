//! The drive state value.

use serde::{Deserialize, Serialize};

use breeze_core::types::id::FolderId;
use breeze_entity::file::FileItem;
use breeze_entity::folder::Folder;

/// The full client-side mirror of the remote drive.
///
/// `files` and `folders` are flat, id-indexed-by-scan collections; the
/// tree shape is recovered on demand by parent-pointer filtering. Only
/// visited scopes are ever populated, so absence from a collection means
/// "not fetched", not "does not exist".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DriveState {
    /// Every locally known file.
    pub files: Vec<FileItem>,
    /// Every locally known folder.
    pub folders: Vec<Folder>,
    /// Breadcrumb stack of folder ids from root to the active folder.
    /// Empty means root.
    pub current_path: Vec<FolderId>,
    /// Ordered list of selected item ids. Duplicates are preserved and
    /// entries are not pruned when the item they reference is removed.
    pub selected: Vec<String>,
    /// Global loading flag shared by all fetches.
    pub loading: bool,
    /// Active search query applied to file listings.
    pub search_query: String,
}
