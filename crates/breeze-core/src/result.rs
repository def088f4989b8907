//! Convenience result type alias for Breeze Drive.

use crate::error::DriveError;

/// A specialized `Result` type for Breeze Drive operations.
///
/// This is defined as a convenience so that every crate does not need to
/// write `Result<T, DriveError>` explicitly.
pub type DriveResult<T> = Result<T, DriveError>;
