//! # breeze-state
//!
//! The in-memory drive mirror: an immutable [`DriveState`] value, the
//! closed [`DriveAction`] vocabulary, the pure reducer over it, the
//! derivation functions that compute the current-folder view, and a
//! single-writer [`StateStore`] built on `tokio::sync::watch`.

pub mod action;
pub mod derive;
pub mod reducer;
pub mod state;
pub mod store;

pub use action::DriveAction;
pub use derive::{FolderContents, current_folder_contents, current_folder_id};
pub use reducer::reduce;
pub use state::DriveState;
pub use store::StateStore;
