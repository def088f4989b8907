//! Shared test helpers: a scripted remote and a recording notifier.
#![allow(dead_code)] // each test binary uses a different subset

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};

use breeze_core::error::DriveError;
use breeze_core::result::DriveResult;
use breeze_core::traits::notify::Notifier;
use breeze_core::traits::remote::{FileUpload, RemoteDrive};
use breeze_core::types::envelope::Envelope;
use breeze_core::types::id::{FileId, FolderId};
use breeze_core::types::share::SharePermission;
use breeze_engine::DriveEngine;

/// Scripted in-memory remote.
///
/// Every trait method settles through one path keyed by a short call
/// string (`"files:root"`, `"rename_file:f1"`, ...): the key is recorded,
/// an optional artificial delay elapses, then either a scripted failure
/// or the canned payload (default: empty array) comes back.
#[derive(Debug, Default)]
pub struct MockRemote {
    responses: Mutex<HashMap<String, Value>>,
    failures: Mutex<HashSet<String>>,
    delays: Mutex<HashMap<String, Duration>>,
    pub calls: Mutex<Vec<String>>,
}

impl MockRemote {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Script a payload for a call key.
    pub fn respond(&self, key: &str, data: Value) {
        self.responses
            .lock()
            .unwrap()
            .insert(key.to_string(), data);
    }

    /// Script a remote failure for a call key.
    pub fn fail(&self, key: &str) {
        self.failures.lock().unwrap().insert(key.to_string());
    }

    /// Script artificial latency for a call key.
    pub fn delay(&self, key: &str, millis: u64) {
        self.delays
            .lock()
            .unwrap()
            .insert(key.to_string(), Duration::from_millis(millis));
    }

    /// Keys of every call made so far, in order.
    pub fn recorded(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, key: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| *c == key).count()
    }

    async fn settle(&self, key: String) -> DriveResult<Envelope> {
        self.calls.lock().unwrap().push(key.clone());
        let delay = self.delays.lock().unwrap().get(&key).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.failures.lock().unwrap().contains(&key) {
            return Err(DriveError::remote(format!("{key} rejected")));
        }
        let data = self
            .responses
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new()));
        Ok(Envelope::ok(data))
    }
}

fn scope(folder: Option<&FolderId>) -> &str {
    folder.map(FolderId::as_str).unwrap_or("root")
}

#[async_trait]
impl RemoteDrive for MockRemote {
    async fn list_files(
        &self,
        folder: Option<&FolderId>,
        search: &str,
    ) -> DriveResult<Envelope> {
        let key = if search.is_empty() {
            format!("files:{}", scope(folder))
        } else {
            format!("files:{}:{search}", scope(folder))
        };
        self.settle(key).await
    }

    async fn upload_file(
        &self,
        upload: FileUpload,
        folder: Option<&FolderId>,
    ) -> DriveResult<Envelope> {
        self.settle(format!("upload:{}:{}", scope(folder), upload.name))
            .await
    }

    async fn download_file(&self, id: &FileId) -> DriveResult<Envelope> {
        self.settle(format!("download:{id}")).await
    }

    async fn delete_file(&self, id: &FileId) -> DriveResult<Envelope> {
        self.settle(format!("delete_file:{id}")).await
    }

    async fn rename_file(&self, id: &FileId, name: &str) -> DriveResult<Envelope> {
        self.settle(format!("rename_file:{id}:{name}")).await
    }

    async fn star_file(&self, id: &FileId) -> DriveResult<Envelope> {
        self.settle(format!("star_file:{id}")).await
    }

    async fn share_file(
        &self,
        id: &FileId,
        email: &str,
        _permission: SharePermission,
    ) -> DriveResult<Envelope> {
        self.settle(format!("share_file:{id}:{email}")).await
    }

    async fn restore_file(&self, id: &FileId) -> DriveResult<Envelope> {
        self.settle(format!("restore_file:{id}")).await
    }

    async fn purge_file(&self, id: &FileId) -> DriveResult<Envelope> {
        self.settle(format!("purge_file:{id}")).await
    }

    async fn list_shared_files(&self) -> DriveResult<Envelope> {
        self.settle("shared".to_string()).await
    }

    async fn list_starred_files(&self) -> DriveResult<Envelope> {
        self.settle("starred".to_string()).await
    }

    async fn list_recent_files(&self) -> DriveResult<Envelope> {
        self.settle("recent".to_string()).await
    }

    async fn list_trashed_files(&self) -> DriveResult<Envelope> {
        self.settle("trash_files".to_string()).await
    }

    async fn list_folders(&self, parent: Option<&FolderId>) -> DriveResult<Envelope> {
        self.settle(format!("folders:{}", scope(parent))).await
    }

    async fn create_folder(
        &self,
        name: &str,
        parent: Option<&FolderId>,
    ) -> DriveResult<Envelope> {
        self.settle(format!("create_folder:{}:{}", scope(parent), name))
            .await
    }

    async fn delete_folder(&self, id: &FolderId) -> DriveResult<Envelope> {
        self.settle(format!("delete_folder:{id}")).await
    }

    async fn rename_folder(&self, id: &FolderId, name: &str) -> DriveResult<Envelope> {
        self.settle(format!("rename_folder:{id}:{name}")).await
    }

    async fn star_folder(&self, id: &FolderId) -> DriveResult<Envelope> {
        self.settle(format!("star_folder:{id}")).await
    }

    async fn share_folder(
        &self,
        id: &FolderId,
        email: &str,
        _permission: SharePermission,
    ) -> DriveResult<Envelope> {
        self.settle(format!("share_folder:{id}:{email}")).await
    }

    async fn restore_folder(&self, id: &FolderId) -> DriveResult<Envelope> {
        self.settle(format!("restore_folder:{id}")).await
    }

    async fn purge_folder(&self, id: &FolderId) -> DriveResult<Envelope> {
        self.settle(format!("purge_folder:{id}")).await
    }

    async fn list_trashed_folders(&self) -> DriveResult<Envelope> {
        self.settle("trash_folders".to_string()).await
    }

    async fn empty_trash(&self) -> DriveResult<()> {
        self.settle("empty_trash".to_string()).await.map(|_| ())
    }
}

/// Notifier capturing every signal for assertions.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub messages: Mutex<Vec<(&'static str, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(kind, _)| *kind == "error")
            .map(|(_, msg)| msg.clone())
            .collect()
    }

    pub fn successes(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(kind, _)| *kind == "success")
            .map(|(_, msg)| msg.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn loading_started(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(("loading", message.to_string()));
    }

    fn success(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(("success", message.to_string()));
    }

    fn error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(("error", message.to_string()));
    }
}

/// A wire file record.
pub fn file_record(id: &str, parent: Option<&str>) -> Value {
    let mut record = json!({
        "_id": id,
        "name": format!("{id}.txt"),
        "ownerId": "u-1",
        "size": 16,
    });
    if let Some(parent) = parent {
        record["folderId"] = json!(parent);
    }
    record
}

/// A wire folder record.
pub fn folder_record(id: &str, parent: Option<&str>) -> Value {
    let mut record = json!({
        "_id": id,
        "name": id,
        "ownerId": "u-1",
    });
    if let Some(parent) = parent {
        record["parentId"] = json!(parent);
    }
    record
}

/// Build an engine over scripted collaborators.
pub fn engine(remote: Arc<MockRemote>, notifier: Arc<RecordingNotifier>) -> DriveEngine {
    DriveEngine::new(remote, notifier)
}
