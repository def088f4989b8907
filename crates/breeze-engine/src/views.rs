//! Special flat views: shared, starred, recent, trash.

use std::sync::Arc;

use tracing::error;

use breeze_core::error::DriveError;
use breeze_core::result::DriveResult;
use breeze_core::traits::notify::Notifier;
use breeze_core::traits::remote::RemoteDrive;
use breeze_entity::payload;
use breeze_state::{DriveAction, StateStore};

/// Non-hierarchical listing operations.
///
/// Each view replaces the file collection outright; the shared view also
/// clears folders so a flat listing never shows folder entries left over
/// from a prior hierarchical view.
#[derive(Debug, Clone)]
pub struct ViewOps {
    remote: Arc<dyn RemoteDrive>,
    store: Arc<StateStore>,
    notifier: Arc<dyn Notifier>,
}

impl ViewOps {
    /// Create the special-views module.
    pub fn new(
        remote: Arc<dyn RemoteDrive>,
        store: Arc<StateStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            remote,
            store,
            notifier,
        }
    }

    fn fail(&self, err: &DriveError, fallback: &str) {
        error!(error = %err, "{}", fallback);
        self.notifier.error(err.remote_message().unwrap_or(fallback));
    }

    /// Replace the file collection with everything shared with the
    /// current user, and clear the folder collection.
    pub async fn fetch_shared_files(&self) {
        let result = async {
            let data = self.remote.list_shared_files().await?.require_success()?;
            payload::file_list(&data)
        }
        .await;
        match result {
            Ok(files) => {
                self.store.dispatch(DriveAction::SetFiles(files));
                self.store.dispatch(DriveAction::SetFolders(Vec::new()));
            }
            Err(err) => self.fail(&err, "Failed to fetch shared files"),
        }
    }

    /// Replace the file collection with the starred listing.
    pub async fn fetch_starred_files(&self) {
        let result = async {
            let data = self.remote.list_starred_files().await?.require_success()?;
            payload::file_list(&data)
        }
        .await;
        match result {
            Ok(files) => self.store.dispatch(DriveAction::SetFiles(files)),
            Err(err) => self.fail(&err, "Failed to fetch starred files"),
        }
    }

    /// Replace the file collection with the recent listing.
    pub async fn fetch_recent_files(&self) {
        let result = async {
            let data = self.remote.list_recent_files().await?.require_success()?;
            payload::file_list(&data)
        }
        .await;
        match result {
            Ok(files) => self.store.dispatch(DriveAction::SetFiles(files)),
            Err(err) => self.fail(&err, "Failed to fetch recent files"),
        }
    }

    /// Load both trash scopes in parallel and replace both collections.
    pub async fn fetch_trash(&self) {
        let result = async {
            let (files_env, folders_env) = tokio::join!(
                self.remote.list_trashed_files(),
                self.remote.list_trashed_folders(),
            );
            let files = payload::file_list(&files_env?.require_success()?)?;
            let folders = payload::folder_list(&folders_env?.require_success()?)?;
            Ok::<_, DriveError>((files, folders))
        }
        .await;
        match result {
            Ok((files, folders)) => {
                self.store.dispatch(DriveAction::SetFiles(files));
                self.store.dispatch(DriveAction::SetFolders(folders));
            }
            Err(err) => self.fail(&err, "Failed to fetch trash"),
        }
    }

    /// Bulk-purge the trash, then optimistically clear both local
    /// collections without re-fetching.
    pub async fn empty_trash(&self) -> DriveResult<()> {
        match self.remote.empty_trash().await {
            Ok(()) => {
                self.store.dispatch(DriveAction::SetFiles(Vec::new()));
                self.store.dispatch(DriveAction::SetFolders(Vec::new()));
                self.notifier.success("Trash emptied successfully");
                Ok(())
            }
            Err(err) => {
                self.fail(&err, "Failed to empty trash");
                Err(err)
            }
        }
    }
}
