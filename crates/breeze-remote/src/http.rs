//! Reqwest-backed remote drive client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;
use serde_json::{Value, json};
use tracing::debug;

use breeze_core::config::remote::RemoteConfig;
use breeze_core::error::{DriveError, ErrorKind};
use breeze_core::result::DriveResult;
use breeze_core::traits::remote::{FileUpload, RemoteDrive};
use breeze_core::types::envelope::Envelope;
use breeze_core::types::id::{FileId, FolderId};
use breeze_core::types::share::SharePermission;

/// HTTP client for the drive REST API.
///
/// One method per endpoint; every response body is decoded into the
/// uniform [`Envelope`]. Non-2xx statuses are surfaced as remote errors
/// carrying the server message when the body still parses.
#[derive(Debug, Clone)]
pub struct HttpRemoteDrive {
    client: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl HttpRemoteDrive {
    /// Build a client from configuration.
    pub fn new(config: &RemoteConfig) -> DriveResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                DriveError::with_source(
                    ErrorKind::Configuration,
                    format!("Failed to build HTTP client: {e}"),
                    e,
                )
            })?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            bearer_token: config.bearer_token.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn execute(&self, builder: reqwest::RequestBuilder) -> DriveResult<Envelope> {
        let builder = match &self.bearer_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };
        let response = builder.send().await.map_err(|e| {
            DriveError::with_source(ErrorKind::Transport, format!("Request failed: {e}"), e)
        })?;

        let status = response.status();
        debug!(%status, "remote response");

        if !status.is_success() {
            // Error bodies usually still carry the envelope; prefer its
            // message over the bare status line.
            let message = response
                .json::<Envelope>()
                .await
                .ok()
                .and_then(|env| env.message)
                .unwrap_or_else(|| format!("Remote returned HTTP {status}"));
            return Err(DriveError::remote(message));
        }

        response.json::<Envelope>().await.map_err(|e| {
            DriveError::with_source(
                ErrorKind::Serialization,
                format!("Malformed response body: {e}"),
                e,
            )
        })
    }

    async fn get(&self, path: &str) -> DriveResult<Envelope> {
        self.execute(self.client.get(self.endpoint(path))).await
    }

    async fn post_json(&self, path: &str, body: Value) -> DriveResult<Envelope> {
        self.execute(self.client.post(self.endpoint(path)).json(&body))
            .await
    }

    async fn patch_json(&self, path: &str, body: Value) -> DriveResult<Envelope> {
        self.execute(self.client.patch(self.endpoint(path)).json(&body))
            .await
    }

    async fn post_empty(&self, path: &str) -> DriveResult<Envelope> {
        self.execute(self.client.post(self.endpoint(path))).await
    }

    async fn patch_empty(&self, path: &str) -> DriveResult<Envelope> {
        self.execute(self.client.patch(self.endpoint(path))).await
    }

    async fn delete(&self, path: &str) -> DriveResult<Envelope> {
        self.execute(self.client.delete(self.endpoint(path))).await
    }
}

/// Pull the `_id` of every record in a trash listing, whether the array
/// arrives bare or wrapped under `key`.
fn id_list(data: &Value, key: &str) -> Vec<String> {
    data.as_array()
        .or_else(|| data.get(key).and_then(Value::as_array))
        .map(|records| {
            records
                .iter()
                .filter_map(|r| r.get("_id").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[async_trait]
impl RemoteDrive for HttpRemoteDrive {
    async fn list_files(
        &self,
        folder: Option<&FolderId>,
        search: &str,
    ) -> DriveResult<Envelope> {
        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(folder) = folder {
            query.push(("folderId", folder.as_str()));
        }
        if !search.is_empty() {
            query.push(("search", search));
        }
        self.execute(self.client.get(self.endpoint("files")).query(&query))
            .await
    }

    async fn upload_file(
        &self,
        upload: FileUpload,
        folder: Option<&FolderId>,
    ) -> DriveResult<Envelope> {
        let mut part = multipart::Part::bytes(upload.bytes.to_vec()).file_name(upload.name);
        if let Some(mime) = &upload.mime_type {
            part = part.mime_str(mime).map_err(|e| {
                DriveError::with_source(
                    ErrorKind::Internal,
                    format!("Invalid MIME type: {e}"),
                    e,
                )
            })?;
        }
        let mut form = multipart::Form::new().part("file", part);
        if let Some(folder) = folder {
            form = form.text("folderId", folder.as_str().to_string());
        }
        self.execute(self.client.post(self.endpoint("files/upload")).multipart(form))
            .await
    }

    async fn download_file(&self, id: &FileId) -> DriveResult<Envelope> {
        self.get(&format!("files/{id}/download")).await
    }

    async fn delete_file(&self, id: &FileId) -> DriveResult<Envelope> {
        self.delete(&format!("files/{id}")).await
    }

    async fn rename_file(&self, id: &FileId, name: &str) -> DriveResult<Envelope> {
        self.patch_json(&format!("files/{id}"), json!({ "name": name }))
            .await
    }

    async fn star_file(&self, id: &FileId) -> DriveResult<Envelope> {
        self.patch_empty(&format!("files/{id}/star")).await
    }

    async fn share_file(
        &self,
        id: &FileId,
        email: &str,
        permission: SharePermission,
    ) -> DriveResult<Envelope> {
        self.post_json(
            &format!("files/{id}/share"),
            json!({ "email": email, "permission": permission }),
        )
        .await
    }

    async fn restore_file(&self, id: &FileId) -> DriveResult<Envelope> {
        self.post_empty(&format!("files/{id}/restore")).await
    }

    async fn purge_file(&self, id: &FileId) -> DriveResult<Envelope> {
        self.delete(&format!("files/{id}/permanent")).await
    }

    async fn list_shared_files(&self) -> DriveResult<Envelope> {
        self.get("files/shared").await
    }

    async fn list_starred_files(&self) -> DriveResult<Envelope> {
        self.get("files/starred").await
    }

    async fn list_recent_files(&self) -> DriveResult<Envelope> {
        self.get("files/recent").await
    }

    async fn list_trashed_files(&self) -> DriveResult<Envelope> {
        self.get("files/trash/list").await
    }

    async fn list_folders(&self, parent: Option<&FolderId>) -> DriveResult<Envelope> {
        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(parent) = parent {
            query.push(("parentId", parent.as_str()));
        }
        self.execute(self.client.get(self.endpoint("folders")).query(&query))
            .await
    }

    async fn create_folder(
        &self,
        name: &str,
        parent: Option<&FolderId>,
    ) -> DriveResult<Envelope> {
        self.post_json(
            "folders",
            json!({
                "name": name,
                "parentId": parent.map(FolderId::as_str),
            }),
        )
        .await
    }

    async fn delete_folder(&self, id: &FolderId) -> DriveResult<Envelope> {
        self.delete(&format!("folders/{id}")).await
    }

    async fn rename_folder(&self, id: &FolderId, name: &str) -> DriveResult<Envelope> {
        self.patch_json(&format!("folders/{id}"), json!({ "name": name }))
            .await
    }

    async fn star_folder(&self, id: &FolderId) -> DriveResult<Envelope> {
        self.patch_empty(&format!("folders/{id}/star")).await
    }

    async fn share_folder(
        &self,
        id: &FolderId,
        email: &str,
        permission: SharePermission,
    ) -> DriveResult<Envelope> {
        self.post_json(
            &format!("folders/{id}/share"),
            json!({ "email": email, "permission": permission }),
        )
        .await
    }

    async fn restore_folder(&self, id: &FolderId) -> DriveResult<Envelope> {
        self.post_empty(&format!("folders/{id}/restore")).await
    }

    async fn purge_folder(&self, id: &FolderId) -> DriveResult<Envelope> {
        self.delete(&format!("folders/{id}/permanent")).await
    }

    async fn list_trashed_folders(&self) -> DriveResult<Envelope> {
        self.get("folders/trash/list").await
    }

    async fn empty_trash(&self) -> DriveResult<()> {
        // The store has no bulk purge endpoint: list both trash scopes,
        // then fan out per-item permanent deletes.
        let (files_env, folders_env) =
            tokio::try_join!(self.list_trashed_files(), self.list_trashed_folders())?;
        let file_ids = id_list(&files_env.require_success()?, "files");
        let folder_ids = id_list(&folders_env.require_success()?, "folders");

        let file_purges = futures::future::try_join_all(file_ids.iter().map(|id| {
            let id = FileId::new(id.clone());
            async move {
                self.purge_file(&id).await?.require_success()?;
                Ok::<_, DriveError>(())
            }
        }));
        let folder_purges = futures::future::try_join_all(folder_ids.iter().map(|id| {
            let id = FolderId::new(id.clone());
            async move {
                self.purge_folder(&id).await?.require_success()?;
                Ok::<_, DriveError>(())
            }
        }));
        tokio::try_join!(file_purges, folder_purges)?;
        Ok(())
    }
}
