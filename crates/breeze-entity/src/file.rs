//! File entity model and its wire record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use breeze_core::types::id::{FileId, FolderId, UserId};

use crate::share::SharedPermission;

/// A file in the local drive mirror.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileItem {
    /// Unique file identifier.
    pub id: FileId,
    /// The file name (including extension).
    pub name: String,
    /// File size in bytes.
    pub size: u64,
    /// MIME type of the file.
    pub mime_type: Option<String>,
    /// Transient access URL, present only on download responses.
    pub url: Option<String>,
    /// The containing folder; `None` means root.
    pub parent_id: Option<FolderId>,
    /// The file owner.
    pub owner_id: UserId,
    /// Grants to non-owner principals.
    pub shared_with: Vec<SharedPermission>,
    /// Whether the owner starred this file.
    pub starred: bool,
    /// When the file was created.
    pub created_at: DateTime<Utc>,
    /// When the file was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Raw file record as returned by the remote store.
///
/// Field names follow the wire (`_id`, `folderId`, `ownerId`, ...);
/// everything the store may omit carries a serde default so that older or
/// partial records still map.
#[derive(Debug, Clone, Deserialize)]
pub struct WireFile {
    /// Remote identifier.
    #[serde(rename = "_id")]
    pub id: FileId,
    /// File name.
    pub name: String,
    /// Size in bytes.
    #[serde(default)]
    pub size: u64,
    /// MIME type.
    #[serde(default, rename = "mimeType")]
    pub mime_type: Option<String>,
    /// Transient access URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Folder scope; the canonical parent pointer.
    #[serde(default, rename = "folderId")]
    pub folder_id: Option<FolderId>,
    /// Owning user.
    #[serde(rename = "ownerId")]
    pub owner_id: UserId,
    /// Starred flag.
    #[serde(default, rename = "isStarred")]
    pub starred: bool,
    /// Share grants.
    #[serde(default, rename = "sharedWith")]
    pub shared_with: Vec<SharedPermission>,
    /// Creation timestamp. Unparseable values map to `None`.
    #[serde(default, rename = "createdAt", deserialize_with = "crate::timestamp::lenient")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last-update timestamp. Unparseable values map to `None`.
    #[serde(default, rename = "updatedAt", deserialize_with = "crate::timestamp::lenient")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<WireFile> for FileItem {
    fn from(wire: WireFile) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            size: wire.size,
            mime_type: wire.mime_type,
            url: wire.url,
            parent_id: wire.folder_id,
            owner_id: wire.owner_id,
            shared_with: wire.shared_with,
            starred: wire.starred,
            created_at: wire.created_at.unwrap_or(DateTime::UNIX_EPOCH),
            updated_at: wire.updated_at.unwrap_or(DateTime::UNIX_EPOCH),
        }
    }
}
