//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use std::fs;
use std::io;
use std::sync::Arc;

use log::info;

use crate::adapter::repositories::fs_local_tree::FsLocalTree;
use crate::application::dto::upload_request::UploadRequest;
use crate::application::use_cases::upload_tree::UploadTreeUseCase;
use crate::domain::entities::upload_outcome::UploadOutcome;
use crate::domain::errors::UploadError;
use crate::domain::repositories::progress_display::ProgressDisplayFactory;
use crate::domain::repositories::remote_storage::{RemoteStorage, StorageConnector};

/// Upload Workflow
///
/// Checks the local target, logs in, and uploads the target under the
/// account's root folder.
pub struct UploadWorkflow {
    connector: Arc<dyn StorageConnector>,
    displays: Arc<dyn ProgressDisplayFactory>,
    local_tree: Arc<FsLocalTree>,
}

impl UploadWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(
        connector: Arc<dyn StorageConnector>,
        displays: Arc<dyn ProgressDisplayFactory>,
    ) -> Self {
        Self {
            connector,
            displays,
            local_tree: Arc::new(FsLocalTree::new()),
        }
    }

    /// Execute the upload workflow
    pub async fn execute(&self, request: UploadRequest) -> Result<UploadOutcome, UploadError> {
        let path = request.target.path().to_path_buf();

        // Never log in for a target that cannot be uploaded
        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(UploadError::PathNotFound(path));
            }
            Err(source) => return Err(UploadError::Local { path, source }),
        };
        if request.target.requires_file() && !metadata.is_file() {
            return Err(UploadError::Usage(format!(
                "Not a regular file: {}",
                path.display()
            )));
        }

        info!("Logging in as {}...", request.email);
        let storage: Arc<dyn RemoteStorage> = self
            .connector
            .connect(&request.email, &request.password)
            .await
            .map_err(|cause| UploadError::Auth { cause })?
            .into();
        let root = storage.root_dir();

        if metadata.is_dir() {
            println!("Uploading directory: {}", path.display());
        }

        let use_case = UploadTreeUseCase::new(
            self.local_tree.clone(),
            storage,
            self.displays.clone(),
            request.channel_capacity,
        );
        let outcome = use_case.execute(&path, &root).await?;

        if outcome.is_directory() {
            println!("Directory uploaded successfully!");
            println!(
                "  {} folders, {} files, {} bytes",
                outcome.folders_created, outcome.files_uploaded, outcome.bytes_uploaded
            );
        } else {
            println!(
                "File uploaded successfully! Node ID: {}",
                outcome.root.handle()
            );
        }

        Ok(outcome)
    }
}
