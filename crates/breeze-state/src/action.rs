//! The closed operation vocabulary of the state store.

use breeze_core::types::id::{FileId, FolderId};
use breeze_entity::file::FileItem;
use breeze_entity::folder::Folder;

/// Every way the drive state can change.
///
/// The reducer matches this exhaustively, so adding a variant without
/// handling it is a compile-time error.
#[derive(Debug, Clone, PartialEq)]
pub enum DriveAction {
    /// Replace the entire file collection.
    SetFiles(Vec<FileItem>),
    /// Replace the entire folder collection.
    SetFolders(Vec<Folder>),
    /// Append one file.
    AddFile(FileItem),
    /// Append one folder.
    AddFolder(Folder),
    /// Merge freshly fetched folders into the cached collection,
    /// keeping the cached entry on id collision.
    MergeFolders(Vec<Folder>),
    /// Replace the file with the same id; no-op when absent.
    UpdateFile(FileItem),
    /// Replace the folder with the same id; no-op when absent.
    UpdateFolder(Folder),
    /// Remove every file with this id; no-op when absent.
    RemoveFile(FileId),
    /// Remove every folder with this id; no-op when absent.
    RemoveFolder(FolderId),
    /// Replace the breadcrumb stack.
    SetCurrentPath(Vec<FolderId>),
    /// Replace the selection wholesale.
    SetSelected(Vec<String>),
    /// Set the global loading flag.
    SetLoading(bool),
    /// Set the active search query.
    SetSearchQuery(String),
    /// Empty the selection.
    ClearSelection,
}
