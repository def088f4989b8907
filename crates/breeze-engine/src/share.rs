//! Polymorphic share entry point.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use breeze_core::result::DriveResult;
use breeze_core::traits::notify::Notifier;
use breeze_core::traits::remote::RemoteDrive;
use breeze_core::types::id::{FileId, FolderId};
use breeze_core::types::share::SharePermission;
use breeze_entity::payload;
use breeze_state::{DriveAction, StateStore};

/// Which entity a polymorphic operation addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// A file.
    File,
    /// A folder.
    Folder,
}

/// Capability to grant a principal access to one entity kind and install
/// the server's updated representation.
#[async_trait]
trait ShareGrantor: Send + Sync {
    async fn grant(&self, id: &str, email: &str, permission: SharePermission)
    -> DriveResult<()>;

    fn label(&self) -> &'static str;
}

#[derive(Debug)]
struct FileGrantor {
    remote: Arc<dyn RemoteDrive>,
    store: Arc<StateStore>,
}

#[async_trait]
impl ShareGrantor for FileGrantor {
    async fn grant(
        &self,
        id: &str,
        email: &str,
        permission: SharePermission,
    ) -> DriveResult<()> {
        let data = self
            .remote
            .share_file(&FileId::new(id), email, permission)
            .await?
            .require_success()?;
        let file = payload::single_file(&data)?;
        self.store.dispatch(DriveAction::UpdateFile(file));
        Ok(())
    }

    fn label(&self) -> &'static str {
        "File"
    }
}

#[derive(Debug)]
struct FolderGrantor {
    remote: Arc<dyn RemoteDrive>,
    store: Arc<StateStore>,
}

#[async_trait]
impl ShareGrantor for FolderGrantor {
    async fn grant(
        &self,
        id: &str,
        email: &str,
        permission: SharePermission,
    ) -> DriveResult<()> {
        let data = self
            .remote
            .share_folder(&FolderId::new(id), email, permission)
            .await?
            .require_success()?;
        let folder = payload::single_folder(&data)?;
        self.store.dispatch(DriveAction::UpdateFolder(folder));
        Ok(())
    }

    fn label(&self) -> &'static str {
        "Folder"
    }
}

/// One entry point for "share this item" regardless of kind, so
/// presentation code does not duplicate the call site. Dispatch happens
/// over [`ItemKind`], never a string discriminant.
#[derive(Debug)]
pub struct ShareOps {
    file: FileGrantor,
    folder: FolderGrantor,
    notifier: Arc<dyn Notifier>,
}

impl ShareOps {
    /// Create the share module.
    pub fn new(
        remote: Arc<dyn RemoteDrive>,
        store: Arc<StateStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            file: FileGrantor {
                remote: Arc::clone(&remote),
                store: Arc::clone(&store),
            },
            folder: FolderGrantor { remote, store },
            notifier,
        }
    }

    /// Grant `email` the given permission on an item.
    pub async fn share_item(
        &self,
        id: &str,
        kind: ItemKind,
        email: &str,
        permission: SharePermission,
    ) -> DriveResult<()> {
        let grantor: &dyn ShareGrantor = match kind {
            ItemKind::File => &self.file,
            ItemKind::Folder => &self.folder,
        };
        match grantor.grant(id, email, permission).await {
            Ok(()) => {
                self.notifier
                    .success(&format!("{} shared successfully", grantor.label()));
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "failed to share item");
                self.notifier
                    .error(err.remote_message().unwrap_or("Failed to share item"));
                Err(err)
            }
        }
    }
}
