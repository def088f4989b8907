//! Breadcrumb navigation with epoch-fenced folder loading.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use breeze_core::types::id::FolderId;
use breeze_state::{DriveAction, StateStore};

use crate::files::FileOps;
use crate::folders::FolderOps;

/// Drives the breadcrumb stack and the paired file/folder fetch that
/// accompanies every navigation.
///
/// Every navigation bumps a monotonic epoch; the paired fetch closes over
/// the epoch it was issued under and its results are discarded when a
/// newer navigation has started in the meantime. Without the fence, a
/// late completion for an abandoned navigation would overwrite state
/// with contents of a folder the user already left.
#[derive(Debug, Clone)]
pub struct NavigationOps {
    store: Arc<StateStore>,
    files: FileOps,
    folders: FolderOps,
    epoch: Arc<AtomicU64>,
}

impl NavigationOps {
    /// Create the navigation module sharing the fetch paths of the file
    /// and folder modules.
    pub fn new(store: Arc<StateStore>, files: FileOps, folders: FolderOps) -> Self {
        Self {
            store,
            files,
            folders,
            epoch: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Navigate to a folder (`None` = root).
    ///
    /// Revisiting a folder already on the breadcrumb stack truncates the
    /// stack to it (jump to ancestor); anything else is a drill-down
    /// push, including folders not yet locally cached. Never fails: fetch
    /// errors are logged and swallowed.
    pub async fn navigate_to(&self, folder: Option<FolderId>) {
        let path = self.store.snapshot().current_path;
        let new_path = match folder {
            None => Vec::new(),
            Some(id) => match path.iter().position(|p| *p == id) {
                Some(k) => path[..=k].to_vec(),
                None => {
                    let mut grown = path;
                    grown.push(id);
                    grown
                }
            },
        };
        self.apply(new_path).await;
    }

    /// Pop one breadcrumb entry. No-op at root.
    pub async fn go_back(&self) {
        let path = self.store.snapshot().current_path;
        if path.is_empty() {
            return;
        }
        self.apply(path[..path.len() - 1].to_vec()).await;
    }

    /// Reset to root.
    pub async fn go_to_root(&self) {
        self.apply(Vec::new()).await;
    }

    /// Commit a new breadcrumb stack, clear the selection, and load the
    /// new scope. Loading clears once both fetches settle, whatever
    /// their outcome — unless a newer navigation took over.
    async fn apply(&self, new_path: Vec<FolderId>) {
        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        let scope = new_path.last().cloned();

        self.store.dispatch(DriveAction::SetCurrentPath(new_path));
        self.store.dispatch(DriveAction::ClearSelection);
        self.store.dispatch(DriveAction::SetLoading(true));

        let (files, folders) = tokio::join!(
            self.files.load(scope.as_ref()),
            self.folders.load(scope.as_ref()),
        );

        if self.epoch.load(Ordering::SeqCst) != epoch {
            // A newer navigation owns the state and the loading flag now.
            debug!(stale_epoch = epoch, "discarding stale navigation fetch");
            return;
        }

        match files {
            Ok(files) => self.store.dispatch(DriveAction::SetFiles(files)),
            Err(err) => self.files.fail(&err, "Failed to fetch files"),
        }
        match folders {
            Ok(folders) => self.folders.apply_listing(scope.as_ref(), folders),
            Err(err) => self.folders.fail(&err, "Failed to fetch folders"),
        }

        self.store.dispatch(DriveAction::SetLoading(false));
    }
}
