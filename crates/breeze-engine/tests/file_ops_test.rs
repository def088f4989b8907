//! File and folder operation contracts: echo-based mutation, removal
//! semantics, and the read/write error-propagation split.

mod helpers;

use bytes::Bytes;
use serde_json::json;

use breeze_core::traits::remote::FileUpload;
use breeze_core::types::id::{FileId, FolderId};
use breeze_core::types::share::SharePermission;
use breeze_engine::TargetFolder;
use helpers::{MockRemote, RecordingNotifier, file_record, folder_record};

fn upload(name: &str) -> FileUpload {
    FileUpload::new(name, Bytes::from_static(b"contents")).with_mime_type("text/plain")
}

#[tokio::test]
async fn test_upload_appends_server_echo() {
    let remote = MockRemote::new();
    remote.respond("upload:root:a.txt", file_record("a", None));
    let notifier = RecordingNotifier::new();
    let engine = helpers::engine(remote.clone(), notifier.clone());

    engine
        .upload_file(upload("a.txt"), TargetFolder::Root)
        .await
        .expect("upload should succeed");

    assert_eq!(engine.state().files.len(), 1);
    assert_eq!(notifier.successes(), ["\"a.txt\" uploaded successfully"]);
}

#[tokio::test]
async fn test_upload_defaults_to_current_folder() {
    let remote = MockRemote::new();
    remote.respond("upload:d1:a.txt", file_record("a", Some("d1")));
    let engine = helpers::engine(remote.clone(), RecordingNotifier::new());

    engine.navigate_to_folder(Some(FolderId::new("d1"))).await;
    engine
        .upload_file(upload("a.txt"), TargetFolder::Current)
        .await
        .expect("upload should succeed");

    assert_eq!(remote.call_count("upload:d1:a.txt"), 1);
}

#[tokio::test]
async fn test_write_failure_notifies_and_rethrows() {
    let remote = MockRemote::new();
    remote.fail("upload:root:a.txt");
    let notifier = RecordingNotifier::new();
    let engine = helpers::engine(remote.clone(), notifier.clone());

    let result = engine.upload_file(upload("a.txt"), TargetFolder::Root).await;
    assert!(result.is_err());
    assert!(engine.state().files.is_empty());
    // The server message is surfaced, not the generic fallback.
    assert_eq!(notifier.errors(), ["upload:root:a.txt rejected"]);
}

#[tokio::test]
async fn test_read_failure_is_swallowed() {
    let remote = MockRemote::new();
    remote.fail("files:root");
    let notifier = RecordingNotifier::new();
    let engine = helpers::engine(remote.clone(), notifier.clone());

    // fetch_files returns unit: the caller only observes unchanged state.
    engine.fetch_files(None).await;
    assert!(engine.state().files.is_empty());
    assert!(!engine.state().loading);
    assert_eq!(notifier.errors().len(), 1);
}

#[tokio::test]
async fn test_delete_removes_exactly_one_entry() {
    let remote = MockRemote::new();
    remote.respond(
        "files:root",
        json!([file_record("a", None), file_record("b", None)]),
    );
    let engine = helpers::engine(remote.clone(), RecordingNotifier::new());
    engine.fetch_files(None).await;

    engine
        .delete_file(&FileId::new("a"))
        .await
        .expect("delete should succeed");

    let state = engine.state();
    assert_eq!(state.files.len(), 1);
    assert_eq!(state.files[0].id.as_str(), "b");
}

#[tokio::test]
async fn test_rename_installs_server_representation() {
    let remote = MockRemote::new();
    remote.respond("files:root", json!([file_record("a", None)]));
    // The server echoes a wrapper object and normalizes the name its way.
    remote.respond(
        "rename_file:a:newname",
        json!({"file": {"_id": "a", "name": "newname.txt", "ownerId": "u-1"}}),
    );
    let engine = helpers::engine(remote.clone(), RecordingNotifier::new());
    engine.fetch_files(None).await;

    engine
        .rename_file(&FileId::new("a"), "newname")
        .await
        .expect("rename should succeed");

    assert_eq!(engine.state().files[0].name, "newname.txt");
}

#[tokio::test]
async fn test_star_notification_tracks_server_flag() {
    let remote = MockRemote::new();
    remote.respond("files:root", json!([file_record("a", None)]));
    remote.respond(
        "star_file:a",
        json!({"_id": "a", "name": "a.txt", "ownerId": "u-1", "isStarred": true}),
    );
    let notifier = RecordingNotifier::new();
    let engine = helpers::engine(remote.clone(), notifier.clone());
    engine.fetch_files(None).await;

    engine
        .star_file(&FileId::new("a"))
        .await
        .expect("star should succeed");

    assert!(engine.state().files[0].starred);
    assert_eq!(notifier.successes(), ["File starred"]);
}

#[tokio::test]
async fn test_download_mutates_nothing() {
    let remote = MockRemote::new();
    remote.respond("files:root", json!([file_record("a", None)]));
    remote.respond("download:a", json!({"url": "https://cdn.example/a"}));
    let engine = helpers::engine(remote.clone(), RecordingNotifier::new());
    engine.fetch_files(None).await;
    let before = engine.state();

    let url = engine
        .download_file(&FileId::new("a"))
        .await
        .expect("download should succeed");

    assert_eq!(url, "https://cdn.example/a");
    assert_eq!(engine.state(), before);
}

#[tokio::test]
async fn test_create_folder_appends_echo_under_current_folder() {
    let remote = MockRemote::new();
    remote.respond(
        "create_folder:d1:Reports",
        json!({"folder": folder_record("d2", Some("d1"))}),
    );
    let engine = helpers::engine(remote.clone(), RecordingNotifier::new());
    engine.navigate_to_folder(Some(FolderId::new("d1"))).await;

    engine
        .create_folder("Reports", TargetFolder::Current)
        .await
        .expect("create should succeed");

    let state = engine.state();
    assert_eq!(state.folders.len(), 1);
    assert_eq!(state.folders[0].parent_id, Some(FolderId::new("d1")));
}

#[tokio::test]
async fn test_share_item_dispatches_by_kind() {
    let remote = MockRemote::new();
    remote.respond("folders:root", json!([folder_record("d1", None)]));
    remote.respond(
        "share_folder:d1:ana@example.com",
        json!({"folder": {
            "_id": "d1",
            "name": "d1",
            "ownerId": "u-1",
            "sharedWith": [{"userId": "u-2", "email": "ana@example.com", "permission": "VIEW"}],
        }}),
    );
    let notifier = RecordingNotifier::new();
    let engine = helpers::engine(remote.clone(), notifier.clone());
    engine.fetch_folders(None).await;

    engine
        .share_item(
            "d1",
            breeze_engine::ItemKind::Folder,
            "ana@example.com",
            SharePermission::View,
        )
        .await
        .expect("share should succeed");

    let state = engine.state();
    assert_eq!(state.folders[0].shared_with.len(), 1);
    assert_eq!(state.folders[0].shared_with[0].email, "ana@example.com");
    assert_eq!(notifier.successes(), ["Folder shared successfully"]);
}

#[tokio::test]
async fn test_restore_drops_entry_from_trash_view() {
    let remote = MockRemote::new();
    remote.respond("trash_files", json!([file_record("a", None)]));
    let engine = helpers::engine(remote.clone(), RecordingNotifier::new());
    engine.fetch_trash().await;
    assert_eq!(engine.state().files.len(), 1);

    engine
        .restore_file(&FileId::new("a"))
        .await
        .expect("restore should succeed");
    assert!(engine.state().files.is_empty());
}
