//! # Upload Errors
//!
//! アップロード処理のエラー分類
//!
//! どのエラーもプロセスにとって致命的で、回復や部分成功のサマリーはない

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// アップロードエラー
#[derive(Debug, Error)]
pub enum UploadError {
    /// 必須オプションの欠落・不正
    #[error("{0}")]
    Usage(String),

    /// 指定されたパスが存在しない
    #[error("Path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    /// ローカルの stat / 読み取りエラー
    #[error("Failed to read {}: {source}", .path.display())]
    Local {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// ログイン失敗（認証情報またはネットワーク）
    #[error("Failed to login: {cause:#}")]
    Auth { cause: anyhow::Error },

    /// リモートフォルダの作成失敗
    #[error("Failed to create remote folder {name}: {cause:#}")]
    CreateDir { name: String, cause: anyhow::Error },

    /// ファイルのアップロード失敗
    #[error("Failed to upload file {}: {cause:#}", .path.display())]
    Upload { path: PathBuf, cause: anyhow::Error },
}

impl UploadError {
    /// 使用法エラーかどうか
    pub fn is_usage(&self) -> bool {
        matches!(self, UploadError::Usage(_))
    }

    /// プロセスの終了コード
    ///
    /// 全てのエラーは終了コード1で終わる
    pub fn exit_code(&self) -> u8 {
        1
    }
}
