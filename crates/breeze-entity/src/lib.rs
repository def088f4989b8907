//! # breeze-entity
//!
//! Domain entity models for Breeze Drive and the entity mapper that
//! normalizes heterogeneous remote wire records into them.

pub mod file;
pub mod folder;
pub mod payload;
pub mod share;

mod timestamp;

pub use file::{FileItem, WireFile};
pub use folder::{Folder, WireFolder};
pub use share::SharedPermission;
