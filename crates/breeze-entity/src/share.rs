//! Share grant record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use breeze_core::types::id::UserId;
use breeze_core::types::share::SharePermission;

/// A grant associating a non-owner principal with a permission level on a
/// file or folder. Deserializes directly from the wire representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedPermission {
    /// The grantee user.
    #[serde(rename = "userId")]
    pub user_id: UserId,
    /// The grantee email address.
    pub email: String,
    /// The granted permission level.
    pub permission: SharePermission,
    /// When the grant was made. Missing or unparseable on older records;
    /// defaults to epoch.
    #[serde(
        rename = "sharedAt",
        default = "epoch",
        deserialize_with = "crate::timestamp::lenient_or_epoch"
    )]
    pub granted_at: DateTime<Utc>,
}

fn epoch() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH
}
