//! Pure state transition function.

use std::collections::HashSet;

use crate::action::DriveAction;
use crate::state::DriveState;

/// Apply one action to a state value, producing the next state.
///
/// Total and referentially pure: no side effects, no panics, every
/// action handled.
pub fn reduce(state: &DriveState, action: DriveAction) -> DriveState {
    let mut next = state.clone();
    match action {
        DriveAction::SetFiles(files) => {
            next.files = files;
        }
        DriveAction::SetFolders(folders) => {
            next.folders = folders;
        }
        DriveAction::AddFile(file) => {
            next.files.push(file);
        }
        DriveAction::AddFolder(folder) => {
            next.folders.push(folder);
        }
        DriveAction::MergeFolders(incoming) => {
            // First occurrence wins: a cached folder beats a duplicate from
            // a fresh fetch. Deliberate policy, see fetch_folders.
            let mut seen: HashSet<_> =
                next.folders.iter().map(|f| f.id.clone()).collect();
            for folder in incoming {
                if seen.insert(folder.id.clone()) {
                    next.folders.push(folder);
                }
            }
        }
        DriveAction::UpdateFile(file) => {
            if let Some(slot) = next.files.iter_mut().find(|f| f.id == file.id) {
                *slot = file;
            }
        }
        DriveAction::UpdateFolder(folder) => {
            if let Some(slot) = next.folders.iter_mut().find(|f| f.id == folder.id) {
                *slot = folder;
            }
        }
        DriveAction::RemoveFile(id) => {
            next.files.retain(|f| f.id != id);
        }
        DriveAction::RemoveFolder(id) => {
            next.folders.retain(|f| f.id != id);
        }
        DriveAction::SetCurrentPath(path) => {
            next.current_path = path;
        }
        DriveAction::SetSelected(selected) => {
            next.selected = selected;
        }
        DriveAction::SetLoading(loading) => {
            next.loading = loading;
        }
        DriveAction::SetSearchQuery(query) => {
            next.search_query = query;
        }
        DriveAction::ClearSelection => {
            next.selected.clear();
        }
    }
    next
}
