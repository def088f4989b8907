//! Per-session composition root.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;

use breeze_core::result::DriveResult;
use breeze_core::traits::notify::Notifier;
use breeze_core::traits::remote::{FileUpload, RemoteDrive};
use breeze_core::types::id::{FileId, FolderId};
use breeze_core::types::share::SharePermission;
use breeze_state::derive::{self, FolderContents};
use breeze_state::{DriveAction, DriveState, StateStore};

use crate::files::FileOps;
use crate::folders::FolderOps;
use crate::navigation::NavigationOps;
use crate::selection::SelectionOps;
use crate::session::SessionSignals;
use crate::share::{ItemKind, ShareOps};
use crate::target::TargetFolder;
use crate::views::ViewOps;

/// One drive engine per authenticated session.
///
/// Owns the state store and all six operation modules, and republishes
/// them as a single merged surface. Construct it when a session is
/// established and drop it on session end; there is no global instance.
#[derive(Debug)]
pub struct DriveEngine {
    store: Arc<StateStore>,
    files: FileOps,
    folders: FolderOps,
    navigation: NavigationOps,
    selection: SelectionOps,
    share: ShareOps,
    views: ViewOps,
    notifier: Arc<dyn Notifier>,
    initial_load_started: AtomicBool,
}

impl DriveEngine {
    /// Wire the store and all operation modules around the two
    /// collaborators.
    pub fn new(remote: Arc<dyn RemoteDrive>, notifier: Arc<dyn Notifier>) -> Self {
        let store = Arc::new(StateStore::new());
        let files = FileOps::new(
            Arc::clone(&remote),
            Arc::clone(&store),
            Arc::clone(&notifier),
        );
        let folders = FolderOps::new(
            Arc::clone(&remote),
            Arc::clone(&store),
            Arc::clone(&notifier),
        );
        let navigation = NavigationOps::new(Arc::clone(&store), files.clone(), folders.clone());
        let selection = SelectionOps::new(Arc::clone(&store));
        let share = ShareOps::new(
            Arc::clone(&remote),
            Arc::clone(&store),
            Arc::clone(&notifier),
        );
        let views = ViewOps::new(remote, Arc::clone(&store), Arc::clone(&notifier));
        Self {
            store,
            files,
            folders,
            navigation,
            selection,
            share,
            views,
            notifier,
            initial_load_started: AtomicBool::new(false),
        }
    }

    // State surface

    /// Clone the current state.
    pub fn state(&self) -> DriveState {
        self.store.snapshot()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<DriveState> {
        self.store.subscribe()
    }

    /// The active folder id (`None` at root).
    pub fn current_folder_id(&self) -> Option<FolderId> {
        self.store.current_folder_id()
    }

    /// The current folder's contents, derived by parent-pointer filtering.
    pub fn current_folder_contents(&self) -> FolderContents {
        let state = self.store.snapshot();
        derive::current_folder_contents(
            &state.files,
            &state.folders,
            state.current_path.last(),
        )
    }

    // Initial load

    /// Run the one-time root load once the session is ready.
    ///
    /// Safe to call on every session-signal change: the load runs at most
    /// once per engine lifetime, and only when `established` holds while
    /// `resolving` does not.
    pub async fn ensure_initial_load(&self, session: SessionSignals) {
        if !session.ready() {
            return;
        }
        if self.initial_load_started.swap(true, Ordering::SeqCst) {
            return;
        }

        self.notifier.loading_started("Loading your drive");
        self.store.dispatch(DriveAction::SetLoading(true));
        let (files, folders) =
            tokio::join!(self.files.load(None), self.folders.load(None));
        match files {
            Ok(files) => self.store.dispatch(DriveAction::SetFiles(files)),
            Err(err) => self.files.fail(&err, "Failed to fetch files"),
        }
        match folders {
            Ok(folders) => self.store.dispatch(DriveAction::SetFolders(folders)),
            Err(err) => self.folders.fail(&err, "Failed to fetch folders"),
        }
        self.store.dispatch(DriveAction::SetLoading(false));
    }

    // Search

    /// Set the search query applied to subsequent file listings.
    pub fn search_files(&self, query: impl Into<String>) {
        self.store.dispatch(DriveAction::SetSearchQuery(query.into()));
    }

    /// Clear the search query.
    pub fn clear_search(&self) {
        self.store
            .dispatch(DriveAction::SetSearchQuery(String::new()));
    }

    // File operations

    /// Fetch a folder-scoped file listing (replace semantics).
    pub async fn fetch_files(&self, folder: Option<&FolderId>) {
        self.files.fetch_files(folder).await;
    }

    /// Upload a file.
    pub async fn upload_file(
        &self,
        upload: FileUpload,
        target: TargetFolder,
    ) -> DriveResult<()> {
        self.files.upload(upload, target).await
    }

    /// Resolve a transient download URL.
    pub async fn download_file(&self, id: &FileId) -> DriveResult<String> {
        self.files.download(id).await
    }

    /// Move a file to the trash.
    pub async fn delete_file(&self, id: &FileId) -> DriveResult<()> {
        self.files.delete(id).await
    }

    /// Rename a file.
    pub async fn rename_file(&self, id: &FileId, name: &str) -> DriveResult<()> {
        self.files.rename(id, name).await
    }

    /// Toggle a file's starred flag.
    pub async fn star_file(&self, id: &FileId) -> DriveResult<()> {
        self.files.star(id).await
    }

    /// Share a file with a principal.
    pub async fn share_file(
        &self,
        id: &FileId,
        email: &str,
        permission: SharePermission,
    ) -> DriveResult<()> {
        self.files.share(id, email, permission).await
    }

    /// Restore a trashed file.
    pub async fn restore_file(&self, id: &FileId) -> DriveResult<()> {
        self.files.restore(id).await
    }

    /// Permanently delete a trashed file.
    pub async fn permanently_delete_file(&self, id: &FileId) -> DriveResult<()> {
        self.files.purge(id).await
    }

    // Folder operations

    /// Fetch a parent-scoped folder listing (merge under a parent,
    /// replace at root).
    pub async fn fetch_folders(&self, parent: Option<&FolderId>) {
        self.folders.fetch_folders(parent).await;
    }

    /// Create a folder.
    pub async fn create_folder(&self, name: &str, target: TargetFolder) -> DriveResult<()> {
        self.folders.create(name, target).await
    }

    /// Move a folder to the trash.
    pub async fn delete_folder(&self, id: &FolderId) -> DriveResult<()> {
        self.folders.delete(id).await
    }

    /// Rename a folder.
    pub async fn rename_folder(&self, id: &FolderId, name: &str) -> DriveResult<()> {
        self.folders.rename(id, name).await
    }

    /// Toggle a folder's starred flag.
    pub async fn star_folder(&self, id: &FolderId) -> DriveResult<()> {
        self.folders.star(id).await
    }

    /// Share a folder with a principal.
    pub async fn share_folder(
        &self,
        id: &FolderId,
        email: &str,
        permission: SharePermission,
    ) -> DriveResult<()> {
        self.folders.share(id, email, permission).await
    }

    /// Restore a trashed folder.
    pub async fn restore_folder(&self, id: &FolderId) -> DriveResult<()> {
        self.folders.restore(id).await
    }

    /// Permanently delete a trashed folder.
    pub async fn permanently_delete_folder(&self, id: &FolderId) -> DriveResult<()> {
        self.folders.purge(id).await
    }

    // Navigation

    /// Navigate to a folder (`None` = root).
    pub async fn navigate_to_folder(&self, folder: Option<FolderId>) {
        self.navigation.navigate_to(folder).await;
    }

    /// Pop one breadcrumb entry. No-op at root.
    pub async fn go_back(&self) {
        self.navigation.go_back().await;
    }

    /// Reset to root.
    pub async fn go_to_root(&self) {
        self.navigation.go_to_root().await;
    }

    // Selection

    /// Append an id to the selection.
    pub fn select_item(&self, id: impl Into<String>) {
        self.selection.select_item(id);
    }

    /// Replace the selection wholesale.
    pub fn select_multiple(&self, ids: Vec<String>) {
        self.selection.select_multiple(ids);
    }

    /// Remove every occurrence of an id from the selection.
    pub fn deselect_item(&self, id: &str) {
        self.selection.deselect_item(id);
    }

    /// Empty the selection.
    pub fn clear_selection(&self) {
        self.selection.clear_selection();
    }

    // Share

    /// Share any item by kind.
    pub async fn share_item(
        &self,
        id: &str,
        kind: ItemKind,
        email: &str,
        permission: SharePermission,
    ) -> DriveResult<()> {
        self.share.share_item(id, kind, email, permission).await
    }

    // Special views

    /// Load the shared-with-me view.
    pub async fn fetch_shared_files(&self) {
        self.views.fetch_shared_files().await;
    }

    /// Load the starred view.
    pub async fn fetch_starred_files(&self) {
        self.views.fetch_starred_files().await;
    }

    /// Load the recent view.
    pub async fn fetch_recent_files(&self) {
        self.views.fetch_recent_files().await;
    }

    /// Load both trash scopes.
    pub async fn fetch_trash(&self) {
        self.views.fetch_trash().await;
    }

    /// Purge the trash and optimistically clear both collections.
    pub async fn empty_trash(&self) -> DriveResult<()> {
        self.views.empty_trash().await
    }
}
