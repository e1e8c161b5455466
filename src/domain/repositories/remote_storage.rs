//! # Remote Storage Trait
//!
//! クラウドストレージへのログインとノード作成を抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;
use tokio::sync::mpsc;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::remote_node::{RemoteDir, RemoteFile};

/// アップロード中のバイト数差分を送るチャネル
pub type ProgressSender = mpsc::Sender<u64>;

/// リモートストレージ
///
/// ログイン済みセッションを表し、フォルダ作成とファイルアップロードを担当する
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RemoteStorage: Send + Sync {
    /// アカウントのルートフォルダ
    fn root_dir(&self) -> RemoteDir;

    /// `parent` の下にフォルダを作成する
    ///
    /// # Arguments
    ///
    /// * `parent` - 親フォルダ
    /// * `name` - 作成するフォルダ名
    ///
    /// # Returns
    ///
    /// 作成されたフォルダのハンドル
    async fn create_dir(&self, parent: &RemoteDir, name: &str) -> Result<RemoteDir>;

    /// ローカルファイルを `parent` にアップロードする
    ///
    /// # Arguments
    ///
    /// * `parent` - アップロード先フォルダ
    /// * `local_path` - ローカルファイルのパス
    /// * `name` - リモートでのファイル名
    /// * `size` - ファイルサイズ（バイト）
    /// * `progress` - 読み込んだバイト数の差分を送るチャネル
    ///
    /// # Returns
    ///
    /// アップロードされたファイルのハンドル
    ///
    /// # Errors
    ///
    /// 読み込みまたは転送に失敗した場合にエラーを返す
    async fn upload_file(
        &self,
        parent: &RemoteDir,
        local_path: &Path,
        name: &str,
        size: u64,
        progress: Option<ProgressSender>,
    ) -> Result<RemoteFile>;
}

/// ストレージコネクタ
///
/// 認証してリモートストレージのセッションを作成する
#[async_trait]
pub trait StorageConnector: Send + Sync {
    /// メールアドレスとパスワードでログインする
    ///
    /// # Errors
    ///
    /// 認証情報が誤っているか、ネットワークに失敗した場合にエラーを返す
    async fn connect(&self, email: &str, password: &str) -> Result<Box<dyn RemoteStorage>>;
}
