//! Envelope payload extraction.
//!
//! The store is not consistent about payload shape: list endpoints return
//! either a bare array or a wrapper object (`{"files": [...]}`,
//! `{"folders": [...]}`), and single-entity endpoints return either the
//! record itself or a wrapper (`{"file": {...}}`, `{"folder": {...}}`).
//! These helpers accept both.

use serde_json::Value;

use breeze_core::error::DriveError;
use breeze_core::result::DriveResult;

use crate::file::{FileItem, WireFile};
use crate::folder::{Folder, WireFolder};

/// Extract a file listing from a payload. An unrecognized shape yields an
/// empty listing, matching the store's behavior for empty scopes.
pub fn file_list(data: &Value) -> DriveResult<Vec<FileItem>> {
    let records = list_value(data, "files");
    let wires: Vec<WireFile> = serde_json::from_value(records)?;
    Ok(wires.into_iter().map(FileItem::from).collect())
}

/// Extract a folder listing from a payload.
pub fn folder_list(data: &Value) -> DriveResult<Vec<Folder>> {
    let records = list_value(data, "folders");
    let wires: Vec<WireFolder> = serde_json::from_value(records)?;
    Ok(wires.into_iter().map(Folder::from).collect())
}

/// Extract a single file record from a payload.
pub fn single_file(data: &Value) -> DriveResult<FileItem> {
    let wire: WireFile = serde_json::from_value(single_value(data, "file"))?;
    Ok(wire.into())
}

/// Extract a single folder record from a payload.
pub fn single_folder(data: &Value) -> DriveResult<Folder> {
    let wire: WireFolder = serde_json::from_value(single_value(data, "folder"))?;
    Ok(wire.into())
}

/// Extract a transient download URL from a payload.
pub fn download_url(data: &Value) -> DriveResult<String> {
    data.get("url")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| DriveError::serialization("download response carried no URL"))
}

fn list_value(data: &Value, wrapper_key: &str) -> Value {
    if data.is_array() {
        data.clone()
    } else {
        data.get(wrapper_key)
            .filter(|v| v.is_array())
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new()))
    }
}

fn single_value(data: &Value, wrapper_key: &str) -> Value {
    data.get(wrapper_key)
        .filter(|v| v.is_object())
        .cloned()
        .unwrap_or_else(|| data.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(id: &str) -> Value {
        json!({"_id": id, "name": "x", "ownerId": "u-1"})
    }

    #[test]
    fn test_bare_array_listing() {
        let files = file_list(&json!([record("a"), record("b")])).expect("map");
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].id.as_str(), "a");
    }

    #[test]
    fn test_wrapped_listing() {
        let files = file_list(&json!({"files": [record("a")]})).expect("map");
        assert_eq!(files.len(), 1);

        let folders = folder_list(&json!({"folders": [record("d")]})).expect("map");
        assert_eq!(folders[0].id.as_str(), "d");
    }

    #[test]
    fn test_one_malformed_timestamp_does_not_empty_the_listing() {
        let mut bad = record("b");
        bad["createdAt"] = json!("yesterday-ish");
        let files = file_list(&json!([record("a"), bad])).expect("map");
        assert_eq!(files.len(), 2);
        assert_eq!(files[1].created_at, chrono::DateTime::UNIX_EPOCH);
    }

    #[test]
    fn test_unrecognized_shape_is_empty() {
        assert!(file_list(&json!({"count": 0})).expect("map").is_empty());
        assert!(folder_list(&Value::Null).expect("map").is_empty());
    }

    #[test]
    fn test_single_record_bare_and_wrapped() {
        let bare = single_folder(&record("d-1")).expect("map");
        assert_eq!(bare.id.as_str(), "d-1");

        let wrapped = single_folder(&json!({"folder": record("d-2")})).expect("map");
        assert_eq!(wrapped.id.as_str(), "d-2");
    }

    #[test]
    fn test_download_url() {
        let url = download_url(&json!({"url": "https://cdn/x"})).expect("url");
        assert_eq!(url, "https://cdn/x");
        assert!(download_url(&json!({})).is_err());
    }
}
