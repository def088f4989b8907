//! Derivation functions over the drive state.

use breeze_core::types::id::FolderId;
use breeze_entity::file::FileItem;
use breeze_entity::folder::Folder;

/// The items contained in one folder, derived by parent-pointer filtering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FolderContents {
    /// Files whose parent is the scoped folder.
    pub files: Vec<FileItem>,
    /// Folders whose parent is the scoped folder.
    pub folders: Vec<Folder>,
}

/// The active folder: the last breadcrumb entry, or `None` at root.
pub fn current_folder_id(current_path: &[FolderId]) -> Option<&FolderId> {
    current_path.last()
}

/// Derive the contents of `current` by scanning both flat collections for
/// matching parent pointers. O(n) on every call; no index is maintained.
pub fn current_folder_contents(
    files: &[FileItem],
    folders: &[Folder],
    current: Option<&FolderId>,
) -> FolderContents {
    FolderContents {
        files: files
            .iter()
            .filter(|f| f.parent_id.as_ref() == current)
            .cloned()
            .collect(),
        folders: folders
            .iter()
            .filter(|f| f.parent_id.as_ref() == current)
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(id: &str, parent: Option<&str>) -> FileItem {
        let mut record = serde_json::json!({
            "_id": id,
            "name": format!("{id}.txt"),
            "ownerId": "u-1",
        });
        if let Some(p) = parent {
            record["folderId"] = serde_json::json!(p);
        }
        let wire: breeze_entity::file::WireFile =
            serde_json::from_value(record).expect("fixture");
        wire.into()
    }

    fn folder(id: &str, parent: Option<&str>) -> Folder {
        let mut record = serde_json::json!({
            "_id": id,
            "name": id,
            "ownerId": "u-1",
        });
        if let Some(p) = parent {
            record["parentId"] = serde_json::json!(p);
        }
        let wire: breeze_entity::folder::WireFolder =
            serde_json::from_value(record).expect("fixture");
        wire.into()
    }

    #[test]
    fn test_root_contents_are_null_parented_items() {
        let files = vec![file("a", None), file("b", Some("d1"))];
        let folders = vec![folder("d1", None), folder("d2", Some("d1"))];

        let contents = current_folder_contents(&files, &folders, None);
        assert_eq!(contents.files.len(), 1);
        assert_eq!(contents.files[0].id.as_str(), "a");
        assert_eq!(contents.folders.len(), 1);
        assert_eq!(contents.folders[0].id.as_str(), "d1");
    }

    #[test]
    fn test_subfolder_contents() {
        let files = vec![file("a", None), file("b", Some("d1"))];
        let folders = vec![folder("d1", None), folder("d2", Some("d1"))];

        let scope = FolderId::new("d1");
        let contents = current_folder_contents(&files, &folders, Some(&scope));
        assert_eq!(contents.files[0].id.as_str(), "b");
        assert_eq!(contents.folders[0].id.as_str(), "d2");
    }

    #[test]
    fn test_current_folder_id() {
        assert_eq!(current_folder_id(&[]), None);
        let path = vec![FolderId::new("d1"), FolderId::new("d2")];
        assert_eq!(current_folder_id(&path), Some(&FolderId::new("d2")));
    }
}
