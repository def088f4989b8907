//! Newtype wrappers around the remote store's opaque string identifiers.
//!
//! The backing store issues opaque hex strings, not UUIDs, so each ID type
//! wraps a `String`. Using distinct types prevents accidentally passing a
//! `FolderId` where a `FileId` is expected.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Macro to define a newtype ID wrapper around an opaque `String`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Create an identifier from any string-like value.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Return the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Return the inner string value.
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Unique identifier for a user.
    UserId
);

define_id!(
    /// Unique identifier for a file.
    FileId
);

define_id!(
    /// Unique identifier for a folder.
    FolderId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_id_display() {
        let id = FileId::new("66f3a2b1c9d4e8");
        assert_eq!(id.to_string(), "66f3a2b1c9d4e8");
    }

    #[test]
    fn test_ids_of_same_value_are_equal() {
        assert_eq!(FolderId::from("abc"), FolderId::new("abc".to_string()));
    }

    #[test]
    fn test_serde_transparent() {
        let id = FolderId::new("f1");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"f1\"");
        let parsed: FolderId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(id, parsed);
    }
}
