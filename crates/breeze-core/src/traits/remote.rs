//! Remote data service trait — one method per (entity × operation) pair.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::DriveResult;
use crate::types::envelope::Envelope;
use crate::types::id::{FileId, FolderId};
use crate::types::share::SharePermission;

/// Content and metadata for a file upload.
#[derive(Debug, Clone)]
pub struct FileUpload {
    /// The file name (including extension).
    pub name: String,
    /// MIME type (if known).
    pub mime_type: Option<String>,
    /// The file content.
    pub bytes: Bytes,
}

impl FileUpload {
    /// Create an upload from a name and raw content.
    pub fn new(name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            mime_type: None,
            bytes: bytes.into(),
        }
    }

    /// Attach a MIME type.
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

/// Trait for the remote drive store.
///
/// Every method issues exactly one logical remote request and resolves to
/// the uniform [`Envelope`]; payload interpretation is left to the caller.
/// `None` folder scopes address the root. The trait is object-safe so the
/// engine can hold it as `Arc<dyn RemoteDrive>` and tests can substitute
/// a scripted implementation.
#[async_trait]
pub trait RemoteDrive: Send + Sync + std::fmt::Debug + 'static {
    // Files

    /// List files scoped to a folder and an optional search query.
    async fn list_files(
        &self,
        folder: Option<&FolderId>,
        search: &str,
    ) -> DriveResult<Envelope>;

    /// Upload a file into a folder (root when `None`).
    async fn upload_file(
        &self,
        upload: FileUpload,
        folder: Option<&FolderId>,
    ) -> DriveResult<Envelope>;

    /// Resolve a transient download URL for a file.
    async fn download_file(&self, id: &FileId) -> DriveResult<Envelope>;

    /// Move a file to the trash.
    async fn delete_file(&self, id: &FileId) -> DriveResult<Envelope>;

    /// Rename a file.
    async fn rename_file(&self, id: &FileId, name: &str) -> DriveResult<Envelope>;

    /// Toggle the starred flag on a file.
    async fn star_file(&self, id: &FileId) -> DriveResult<Envelope>;

    /// Grant a principal access to a file.
    async fn share_file(
        &self,
        id: &FileId,
        email: &str,
        permission: SharePermission,
    ) -> DriveResult<Envelope>;

    /// Restore a trashed file.
    async fn restore_file(&self, id: &FileId) -> DriveResult<Envelope>;

    /// Permanently delete a trashed file.
    async fn purge_file(&self, id: &FileId) -> DriveResult<Envelope>;

    /// List files shared with the current user.
    async fn list_shared_files(&self) -> DriveResult<Envelope>;

    /// List starred files.
    async fn list_starred_files(&self) -> DriveResult<Envelope>;

    /// List recently accessed files.
    async fn list_recent_files(&self) -> DriveResult<Envelope>;

    /// List trashed files.
    async fn list_trashed_files(&self) -> DriveResult<Envelope>;

    // Folders

    /// List folders under a parent (root when `None`).
    async fn list_folders(&self, parent: Option<&FolderId>) -> DriveResult<Envelope>;

    /// Create a folder under a parent (root when `None`).
    async fn create_folder(
        &self,
        name: &str,
        parent: Option<&FolderId>,
    ) -> DriveResult<Envelope>;

    /// Move a folder to the trash.
    async fn delete_folder(&self, id: &FolderId) -> DriveResult<Envelope>;

    /// Rename a folder.
    async fn rename_folder(&self, id: &FolderId, name: &str) -> DriveResult<Envelope>;

    /// Toggle the starred flag on a folder.
    async fn star_folder(&self, id: &FolderId) -> DriveResult<Envelope>;

    /// Grant a principal access to a folder.
    async fn share_folder(
        &self,
        id: &FolderId,
        email: &str,
        permission: SharePermission,
    ) -> DriveResult<Envelope>;

    /// Restore a trashed folder.
    async fn restore_folder(&self, id: &FolderId) -> DriveResult<Envelope>;

    /// Permanently delete a trashed folder.
    async fn purge_folder(&self, id: &FolderId) -> DriveResult<Envelope>;

    /// List trashed folders.
    async fn list_trashed_folders(&self) -> DriveResult<Envelope>;

    // Trash

    /// Permanently delete everything currently in the trash.
    async fn empty_trash(&self) -> DriveResult<()>;
}
