//! Folder entity model and its wire record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use breeze_core::types::id::{FolderId, UserId};

use crate::share::SharedPermission;

/// A folder in the local drive mirror.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    /// Unique folder identifier.
    pub id: FolderId,
    /// The folder name.
    pub name: String,
    /// The containing folder; `None` means root.
    pub parent_id: Option<FolderId>,
    /// The folder owner.
    pub owner_id: UserId,
    /// Grants to non-owner principals.
    pub shared_with: Vec<SharedPermission>,
    /// Whether the owner starred this folder.
    pub starred: bool,
    /// Cached child-item count reported by the store.
    pub file_count: u32,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// When the folder was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Raw folder record as returned by the remote store.
#[derive(Debug, Clone, Deserialize)]
pub struct WireFolder {
    /// Remote identifier.
    #[serde(rename = "_id")]
    pub id: FolderId,
    /// Folder name.
    pub name: String,
    /// Parent folder.
    #[serde(default, rename = "parentId")]
    pub parent_id: Option<FolderId>,
    /// Owning user.
    #[serde(rename = "ownerId")]
    pub owner_id: UserId,
    /// Share grants.
    #[serde(default, rename = "sharedWith")]
    pub shared_with: Vec<SharedPermission>,
    /// Starred flag.
    #[serde(default, rename = "isStarred")]
    pub starred: bool,
    /// Cached child-item count.
    #[serde(default, rename = "fileCount")]
    pub file_count: u32,
    /// Creation timestamp. Unparseable values map to `None`.
    #[serde(default, rename = "createdAt", deserialize_with = "crate::timestamp::lenient")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last-update timestamp. Unparseable values map to `None`.
    #[serde(default, rename = "updatedAt", deserialize_with = "crate::timestamp::lenient")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<WireFolder> for Folder {
    fn from(wire: WireFolder) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            parent_id: wire.parent_id,
            owner_id: wire.owner_id,
            shared_with: wire.shared_with,
            starred: wire.starred,
            file_count: wire.file_count,
            created_at: wire.created_at.unwrap_or(DateTime::UNIX_EPOCH),
            updated_at: wire.updated_at.unwrap_or(DateTime::UNIX_EPOCH),
        }
    }
}
