//! # breeze-core
//!
//! Core crate for Breeze Drive. Contains the collaborator traits, typed
//! identifiers, the uniform remote response envelope, configuration
//! schemas, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Breeze crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::DriveError;
pub use result::DriveResult;
