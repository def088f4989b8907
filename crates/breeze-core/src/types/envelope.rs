//! The uniform response envelope returned by every remote endpoint.

use serde::{Deserialize, Serialize};

use crate::error::DriveError;
use crate::result::DriveResult;

/// Every remote response settles into this shape: a success flag, a
/// human-readable message, and a payload whose concrete shape varies by
/// endpoint (bare array, `{files: [...]}`, `{folder: {...}}`, ...).
///
/// Payload interpretation is the entity mapper's concern; the envelope
/// itself only decides success or failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    /// Whether the remote operation succeeded.
    #[serde(default)]
    pub success: bool,
    /// Server-supplied human-readable message.
    #[serde(default)]
    pub message: Option<String>,
    /// The endpoint-specific payload.
    #[serde(default)]
    pub data: serde_json::Value,
}

impl Envelope {
    /// Build a successful envelope around a payload. Used by tests and by
    /// synthetic completions that never crossed the wire.
    pub fn ok(data: serde_json::Value) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    /// Unwrap the payload, converting a `success: false` envelope into a
    /// remote-operation error carrying the server message when present.
    pub fn require_success(self) -> DriveResult<serde_json::Value> {
        if self.success {
            Ok(self.data)
        } else {
            Err(DriveError::remote(
                self.message
                    .unwrap_or_else(|| "Remote operation failed".to_string()),
            ))
        }
    }
}
