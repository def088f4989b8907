//! File operations.

use std::sync::Arc;

use tracing::error;

use breeze_core::error::DriveError;
use breeze_core::result::DriveResult;
use breeze_core::traits::notify::Notifier;
use breeze_core::traits::remote::{FileUpload, RemoteDrive};
use breeze_core::types::id::{FileId, FolderId};
use breeze_core::types::share::SharePermission;
use breeze_entity::file::FileItem;
use breeze_entity::payload;
use breeze_state::{DriveAction, StateStore};

use crate::target::TargetFolder;

/// Async file operations against the remote store.
///
/// Reads swallow their errors after logging and notifying; writes notify
/// and propagate so the caller can react (keep a dialog open, revert a
/// pending row, retry).
#[derive(Debug, Clone)]
pub struct FileOps {
    remote: Arc<dyn RemoteDrive>,
    store: Arc<StateStore>,
    notifier: Arc<dyn Notifier>,
}

impl FileOps {
    /// Create the file operation module.
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

    /// Fetch and map the file listing for a scope, without touching state.
    /// The active search query is always applied.
    pub(crate) async fn load(&self, folder: Option<&FolderId>) -> DriveResult<Vec<FileItem>> {
        let search = self.store.snapshot().search_query;
        let data = self
            .remote
            .list_files(folder, &search)
            .await?
            .require_success()?;
        payload::file_list(&data)
    }

    /// Log a settled failure and forward it to the notifier, preferring
    /// the server-supplied message.
    pub(crate) fn fail(&self, err: &DriveError, fallback: &str) {
        error!(error = %err, "{}", fallback);
        self.notifier.error(err.remote_message().unwrap_or(fallback));
    }

    /// Fetch a folder-scoped listing and replace the file collection.
    /// Listings are always authoritative full replacements.
    pub async fn fetch_files(&self, folder: Option<&FolderId>) {
        self.store.dispatch(DriveAction::SetLoading(true));
        match self.load(folder).await {
            Ok(files) => self.store.dispatch(DriveAction::SetFiles(files)),
            Err(err) => self.fail(&err, "Failed to fetch files"),
        }
        self.store.dispatch(DriveAction::SetLoading(false));
    }

    /// Upload a file and append the server's echo of it.
    pub async fn upload(&self, upload: FileUpload, target: TargetFolder) -> DriveResult<()> {
        let name = upload.name.clone();
        let folder = target.resolve(&self.store);
        let result = async {
            let data = self
                .remote
                .upload_file(upload, folder.as_ref())
                .await?
                .require_success()?;
            let file = payload::single_file(&data)?;
            self.store.dispatch(DriveAction::AddFile(file));
            Ok(())
        }
        .await;
        match result {
            Ok(()) => {
                self.notifier
                    .success(&format!("\"{name}\" uploaded successfully"));
                Ok(())
            }
            Err(err) => {
                self.fail(&err, "Failed to upload file");
                Err(err)
            }
        }
    }

    /// Resolve a transient access URL for the file. No state mutation;
    /// the caller owns the save action.
    pub async fn download(&self, id: &FileId) -> DriveResult<String> {
        let result = async {
            let data = self.remote.download_file(id).await?.require_success()?;
            payload::download_url(&data)
        }
        .await;
        match result {
            Ok(url) => {
                self.notifier.success("Download started");
                Ok(url)
            }
            Err(err) => {
                self.fail(&err, "Failed to download file");
                Err(err)
            }
        }
    }

    /// Move a file to the trash and drop it from the local mirror.
    pub async fn delete(&self, id: &FileId) -> DriveResult<()> {
        self.remove_via(id, RemoveCall::Delete, "File moved to trash", "Failed to delete file")
            .await
    }

    /// Restore a trashed file. The trash view drops the entry.
    pub async fn restore(&self, id: &FileId) -> DriveResult<()> {
        self.remove_via(
            id,
            RemoveCall::Restore,
            "File restored successfully",
            "Failed to restore file",
        )
        .await
    }

    /// Permanently delete a trashed file.
    pub async fn purge(&self, id: &FileId) -> DriveResult<()> {
        self.remove_via(
            id,
            RemoveCall::Purge,
            "File permanently deleted",
            "Failed to permanently delete file",
        )
        .await
    }

    /// Rename a file, installing the server's post-mutation representation.
    pub async fn rename(&self, id: &FileId, name: &str) -> DriveResult<()> {
        let result = async {
            let data = self
                .remote
                .rename_file(id, name)
                .await?
                .require_success()?;
            let file = payload::single_file(&data)?;
            self.store.dispatch(DriveAction::UpdateFile(file));
            Ok(())
        }
        .await;
        match result {
            Ok(()) => {
                self.notifier.success("File renamed successfully");
                Ok(())
            }
            Err(err) => {
                self.fail(&err, "Failed to rename file");
                Err(err)
            }
        }
    }

    /// Toggle the starred flag. The server decides the new value; the
    /// notification reflects what came back.
    pub async fn star(&self, id: &FileId) -> DriveResult<()> {
        let result = async {
            let data = self.remote.star_file(id).await?.require_success()?;
            let file = payload::single_file(&data)?;
            let starred = file.starred;
            self.store.dispatch(DriveAction::UpdateFile(file));
            Ok(starred)
        }
        .await;
        match result {
            Ok(starred) => {
                self.notifier
                    .success(if starred { "File starred" } else { "File unstarred" });
                Ok(())
            }
            Err(err) => {
                self.fail(&err, "Failed to update file");
                Err(err)
            }
        }
    }

    /// Grant a principal access to a file.
    pub async fn share(
        &self,
        id: &FileId,
        email: &str,
        permission: SharePermission,
    ) -> DriveResult<()> {
        let result = async {
            let data = self
                .remote
                .share_file(id, email, permission)
                .await?
                .require_success()?;
            let file = payload::single_file(&data)?;
            self.store.dispatch(DriveAction::UpdateFile(file));
            Ok(())
        }
        .await;
        match result {
            Ok(()) => {
                self.notifier.success("File shared successfully");
                Ok(())
            }
            Err(err) => {
                self.fail(&err, "Failed to share file");
                Err(err)
            }
        }
    }

    /// Common path for the three endpoints whose success means "this id
    /// leaves whichever collection currently holds it".
    async fn remove_via(
        &self,
        id: &FileId,
        call: RemoveCall,
        success_message: &str,
        fallback: &str,
    ) -> DriveResult<()> {
        let result = async {
            let envelope = match call {
                RemoveCall::Delete => self.remote.delete_file(id).await,
                RemoveCall::Restore => self.remote.restore_file(id).await,
                RemoveCall::Purge => self.remote.purge_file(id).await,
            }?;
            envelope.require_success()?;
            self.store.dispatch(DriveAction::RemoveFile(id.clone()));
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
