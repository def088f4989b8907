//! Share permission level.

use serde::{Deserialize, Serialize};

/// Permission level granted to a non-owner principal on a file or folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SharePermission {
    /// Read-only access.
    View,
    /// Read and modify access.
    Edit,
}

impl SharePermission {
    /// Return the permission as the wire string (`"VIEW"` / `"EDIT"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::View => "VIEW",
            Self::Edit => "EDIT",
        }
    }
}

impl std::fmt::Display for SharePermission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SharePermission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "VIEW" => Ok(Self::View),
            "EDIT" => Ok(Self::Edit),
            other => Err(format!("unknown permission level: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_representation() {
        assert_eq!(
            serde_json::to_string(&SharePermission::View).expect("serialize"),
            "\"VIEW\""
        );
        let parsed: SharePermission =
            serde_json::from_str("\"EDIT\"").expect("deserialize");
        assert_eq!(parsed, SharePermission::Edit);
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("view".parse::<SharePermission>(), Ok(SharePermission::View));
        assert!("owner".parse::<SharePermission>().is_err());
    }
}
