//! Folder operations.

use std::sync::Arc;

use tracing::error;

use breeze_core::error::DriveError;
use breeze_core::result::DriveResult;
use breeze_core::traits::notify::Notifier;
use breeze_core::traits::remote::RemoteDrive;
use breeze_core::types::id::FolderId;
use breeze_core::types::share::SharePermission;
use breeze_entity::folder::Folder;
use breeze_entity::payload;
use breeze_state::{DriveAction, StateStore};

use crate::target::TargetFolder;

/// Async folder operations against the remote store.
///
/// Mirrors [`FileOps`](crate::files::FileOps) with one structural
/// difference: subfolder listings MERGE into the cached collection while
/// the root listing REPLACES it. Merging keeps sibling folders that
/// breadcrumb name lookups still need; the root listing stays
/// authoritative so deletions are reflected at least there.
#[derive(Debug, Clone)]
pub struct FolderOps {
    remote: Arc<dyn RemoteDrive>,
    store: Arc<StateStore>,
    notifier: Arc<dyn Notifier>,
}

impl FolderOps {
    /// Create the folder operation module.
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

    /// Fetch and map the folder listing for a scope, without touching state.
    pub(crate) async fn load(&self, parent: Option<&FolderId>) -> DriveResult<Vec<Folder>> {
        let data = self.remote.list_folders(parent).await?.require_success()?;
        payload::folder_list(&data)
    }

    /// Apply the scope-dependent listing policy: merge under a parent,
    /// replace at root.
    pub(crate) fn apply_listing(&self, parent: Option<&FolderId>, folders: Vec<Folder>) {
        if parent.is_some() {
            self.store.dispatch(DriveAction::MergeFolders(folders));
        } else {
            self.store.dispatch(DriveAction::SetFolders(folders));
        }
    }

    /// Log a settled failure and forward it to the notifier.
    pub(crate) fn fail(&self, err: &DriveError, fallback: &str) {
        error!(error = %err, "{}", fallback);
        self.notifier.error(err.remote_message().unwrap_or(fallback));
    }

    /// Fetch a parent-scoped listing and fold it into state per the
    /// merge/replace policy.
    pub async fn fetch_folders(&self, parent: Option<&FolderId>) {
        match self.load(parent).await {
            Ok(folders) => self.apply_listing(parent, folders),
            Err(err) => self.fail(&err, "Failed to fetch folders"),
        }
    }

    /// Create a folder and append the server's echo of it.
    pub async fn create(&self, name: &str, target: TargetFolder) -> DriveResult<()> {
        let parent = target.resolve(&self.store);
        let result = async {
            let data = self
                .remote
                .create_folder(name, parent.as_ref())
                .await?
                .require_success()?;
            let folder = payload::single_folder(&data)?;
            self.store.dispatch(DriveAction::AddFolder(folder));
            Ok(())
        }
        .await;
        match result {
            Ok(()) => {
                self.notifier
                    .success(&format!("Folder \"{name}\" created successfully"));
                Ok(())
            }
            Err(err) => {
                self.fail(&err, "Failed to create folder");
                Err(err)
            }
        }
    }

    /// Move a folder to the trash and drop it from the local mirror.
    pub async fn delete(&self, id: &FolderId) -> DriveResult<()> {
        self.remove_via(
            id,
            RemoveCall::Delete,
            "Folder moved to trash",
            "Failed to delete folder",
        )
        .await
    }

    /// Restore a trashed folder.
    pub async fn restore(&self, id: &FolderId) -> DriveResult<()> {
        self.remove_via(
            id,
            RemoveCall::Restore,
            "Folder restored successfully",
            "Failed to restore folder",
        )
        .await
    }

    /// Permanently delete a trashed folder.
    pub async fn purge(&self, id: &FolderId) -> DriveResult<()> {
        self.remove_via(
            id,
            RemoveCall::Purge,
            "Folder permanently deleted",
            "Failed to permanently delete folder",
        )
        .await
    }

    /// Rename a folder, installing the server's post-mutation
    /// representation.
    pub async fn rename(&self, id: &FolderId, name: &str) -> DriveResult<()> {
        let result = async {
            let data = self
                .remote
                .rename_folder(id, name)
                .await?
                .require_success()?;
            let folder = payload::single_folder(&data)?;
            self.store.dispatch(DriveAction::UpdateFolder(folder));
            Ok(())
        }
        .await;
        match result {
            Ok(()) => {
                self.notifier.success("Folder renamed successfully");
                Ok(())
            }
            Err(err) => {
                self.fail(&err, "Failed to rename folder");
                Err(err)
            }
        }
    }

    /// Toggle the starred flag on a folder.
    pub async fn star(&self, id: &FolderId) -> DriveResult<()> {
        let result = async {
            let data = self.remote.star_folder(id).await?.require_success()?;
            let folder = payload::single_folder(&data)?;
            let starred = folder.starred;
            self.store.dispatch(DriveAction::UpdateFolder(folder));
            Ok(starred)
        }
        .await;
        match result {
            Ok(starred) => {
                self.notifier.success(if starred {
                    "Folder starred"
                } else {
                    "Folder unstarred"
                });
                Ok(())
            }
            Err(err) => {
                self.fail(&err, "Failed to star folder");
                Err(err)
            }
        }
    }

    /// Grant a principal access to a folder.
    pub async fn share(
        &self,
        id: &FolderId,
        email: &str,
        permission: SharePermission,
    ) -> DriveResult<()> {
        let result = async {
            let data = self
                .remote
                .share_folder(id, email, permission)
                .await?
                .require_success()?;
            let folder = payload::single_folder(&data)?;
            self.store.dispatch(DriveAction::UpdateFolder(folder));
            Ok(())
        }
        .await;
        match result {
            Ok(()) => {
                self.notifier.success("Folder shared successfully");
                Ok(())
            }
            Err(err) => {
                self.fail(&err, "Failed to share folder");
                Err(err)
            }
        }
    }

    async fn remove_via(
        &self,
        id: &FolderId,
        call: RemoveCall,
        success_message: &str,
        fallback: &str,
    ) -> DriveResult<()> {
        let result = async {
            let envelope = match call {
                RemoveCall::Delete => self.remote.delete_folder(id).await,
                RemoveCall::Restore => self.remote.restore_folder(id).await,
                RemoveCall::Purge => self.remote.purge_folder(id).await,
            }?;
            envelope.require_success()?;
            self.store.dispatch(DriveAction::RemoveFolder(id.clone()));
            Ok(())
        }
        .await;
        match result {
            Ok(()) => {
                self.notifier.success(success_message);
                Ok(())
            }
            Err(err) => {
                self.fail(&err, fallback);
                Err(err)
            }
        }
    }
}

/// Which remove-style endpoint to hit.
#[derive(Debug, Clone, Copy)]
enum RemoveCall {
    Delete,
    Restore,
    Purge,
}
