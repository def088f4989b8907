//! # breeze-engine
//!
//! The drive synchronization and navigation engine: six operation
//! modules (file, folder, navigation, selection, share, special views)
//! over one [`StateStore`](breeze_state::StateStore), wired together by
//! the per-session [`DriveEngine`] composition root.

pub mod engine;
pub mod files;
pub mod folders;
pub mod navigation;
pub mod notify;
pub mod selection;
pub mod session;
pub mod share;
pub mod target;
pub mod views;

pub use engine::DriveEngine;
pub use notify::LogNotifier;
pub use session::SessionSignals;
pub use share::ItemKind;
pub use target::TargetFolder;
