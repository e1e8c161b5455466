//! # Upload Tree Use Case
//!
//! ローカルのファイルまたはディレクトリツリーをリモートフォルダにアップロードする

use std::io;
use std::path::Path;
use std::sync::Arc;

use log::{info, warn};

use crate::application::services::progress_reporter::ProgressReporter;
use crate::domain::entities::local_entry::LocalEntry;
use crate::domain::entities::remote_node::{RemoteDir, RemoteFile, RemoteNode};
use crate::domain::entities::upload_outcome::UploadOutcome;
use crate::domain::errors::UploadError;
use crate::domain::repositories::local_tree::LocalTree;
use crate::domain::repositories::progress_display::ProgressDisplayFactory;
use crate::domain::repositories::remote_storage::RemoteStorage;
use crate::domain::services::parent_stack::ParentStack;

/// ツリーアップロードユースケース
///
/// ディレクトリごとにリモートフォルダを1つ作成してから、その中身を処理する
/// （深さ優先・前順序）。1ファイルのアップロードが終わってから次に進む。
/// いずれかのエントリで失敗した時点で走査全体を中断し、作成済みの
/// リモートノードは残したままにする。
pub struct UploadTreeUseCase<T: LocalTree> {
    local_tree: Arc<T>,
    storage: Arc<dyn RemoteStorage>,
    displays: Arc<dyn ProgressDisplayFactory>,
    channel_capacity: usize,
}

impl<T: LocalTree> UploadTreeUseCase<T> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `local_tree` - ローカルツリー
    /// * `storage` - ログイン済みのリモートストレージ
    /// * `displays` - ファイルごとの進捗表示ファクトリ
    /// * `channel_capacity` - 進捗チャネルの容量
    pub fn new(
        local_tree: Arc<T>,
        storage: Arc<dyn RemoteStorage>,
        displays: Arc<dyn ProgressDisplayFactory>,
        channel_capacity: usize,
    ) -> Self {
        Self {
            local_tree,
            storage,
            displays,
            channel_capacity,
        }
    }

    /// `local_path` を `remote_parent` の下にアップロードする
    ///
    /// # Returns
    ///
    /// 走査ルートに対応するリモートノードと件数
    ///
    /// # Errors
    ///
    /// ローカルの読み取り、フォルダ作成、アップロードのいずれかに失敗した
    /// 場合、その時点でエラーを返す
    pub async fn execute(
        &self,
        local_path: &Path,
        remote_parent: &RemoteDir,
    ) -> Result<UploadOutcome, UploadError> {
        let mut parents = ParentStack::new(remote_parent.clone());
        let mut outcome: Option<UploadOutcome> = None;

        for item in self.local_tree.walk(local_path) {
            let entry = item?;
            let parent = parents.parent_for(entry.depth).cloned().ok_or_else(|| {
                UploadError::Local {
                    path: entry.path.clone(),
                    source: io::Error::other("entry is outside of the traversal root"),
                }
            })?;

            let node = if entry.is_dir() {
                let dir = self.create_dir(&parent, &entry).await?;
                parents.enter(entry.depth, dir.clone());
                RemoteNode::Dir(dir)
            } else {
                RemoteNode::File(self.upload_file(&parent, &entry).await?)
            };

            let outcome = outcome.get_or_insert_with(|| UploadOutcome::new(node.clone()));
            match node {
                RemoteNode::Dir(_) => outcome.folders_created += 1,
                RemoteNode::File(_) => {
                    outcome.files_uploaded += 1;
                    outcome.bytes_uploaded += entry.size;
                }
            }
        }

        outcome.ok_or_else(|| UploadError::PathNotFound(local_path.to_path_buf()))
    }

    async fn create_dir(
        &self,
        parent: &RemoteDir,
        entry: &LocalEntry,
    ) -> Result<RemoteDir, UploadError> {
        let dir = self
            .storage
            .create_dir(parent, &entry.name)
            .await
            .map_err(|cause| UploadError::CreateDir {
                name: entry.name.clone(),
                cause,
            })?;

        info!("Created folder {} ({})", entry.path.display(), dir);
        Ok(dir)
    }

    async fn upload_file(
        &self,
        parent: &RemoteDir,
        entry: &LocalEntry,
    ) -> Result<RemoteFile, UploadError> {
        let display = self.displays.create(&entry.name, entry.size);
        let reporter = ProgressReporter::spawn(display, self.channel_capacity);

        let result = self
            .storage
            .upload_file(
                parent,
                &entry.path,
                &entry.name,
                entry.size,
                reporter.sender(),
            )
            .await;

        // 次のファイルに進む前にワーカーを必ず終了させる
        match reporter.finish(result.is_ok()).await {
            Ok(received) if result.is_ok() && received != entry.size => warn!(
                "Progress for {} reported {} of {} bytes",
                entry.path.display(),
                received,
                entry.size
            ),
            Ok(_) => {}
            Err(e) => warn!("Progress reporting failed: {:#}", e),
        }

        let file = result.map_err(|cause| UploadError::Upload {
            path: entry.path.clone(),
            cause,
        })?;

        info!(
            "Uploaded {} ({} bytes) as {}",
            entry.path.display(),
            entry.size,
            file
        );
        Ok(file)
    }
}
