//! Collaborator traits consumed by the drive engine.
//!
//! Traits are defined here in `breeze-core` and implemented elsewhere:
//! [`RemoteDrive`] by `breeze-remote`, [`Notifier`] by whichever front
//! end hosts the engine.

pub mod notify;
pub mod remote;

pub use notify::Notifier;
pub use remote::{FileUpload, RemoteDrive};
