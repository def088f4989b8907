//! Shared domain-level types.

pub mod envelope;
pub mod id;
pub mod share;

pub use envelope::Envelope;
pub use id::{FileId, FolderId, UserId};
pub use share::SharePermission;
