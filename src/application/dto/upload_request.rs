//! # Upload Request DTO
//!
//! アップロード実行に必要な入力のData Transfer Object

use std::path::{Path, PathBuf};

/// 進捗チャネルのデフォルト容量
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// アップロード対象
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadTarget {
    /// ファイルまたはディレクトリ
    Path(PathBuf),
    /// ファイルのみ（ディレクトリは使用法エラー）
    File(PathBuf),
}

impl UploadTarget {
    /// 対象のパス
    pub fn path(&self) -> &Path {
        match self {
            UploadTarget::Path(path) | UploadTarget::File(path) => path,
        }
    }

    /// ファイルのみを許可するかどうか
    pub fn requires_file(&self) -> bool {
        matches!(self, UploadTarget::File(_))
    }
}

/// アップロードリクエスト
#[derive(Clone)]
pub struct UploadRequest {
    /// MEGAアカウントのメールアドレス
    pub email: String,
    /// MEGAアカウントのパスワード
    pub password: String,
    /// アップロード対象
    pub target: UploadTarget,
    /// 進捗チャネルの容量
    pub channel_capacity: usize,
}

impl UploadRequest {
    /// 新しいアップロードリクエストを作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use megaup::application::dto::upload_request::{UploadRequest, UploadTarget};
    ///
    /// let request = UploadRequest::new(
    ///     "alice@example.com".to_string(),
    ///     "hunter2".to_string(),
    ///     UploadTarget::Path("./photos".into()),
    /// );
    ///
    /// assert_eq!(request.target.path().to_str(), Some("./photos"));
    /// assert!(!request.target.requires_file());
    /// assert_eq!(request.channel_capacity, 64);
    /// ```
    pub fn new(email: String, password: String, target: UploadTarget) -> Self {
        Self {
            email,
            password,
            target,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }

    /// 進捗チャネルの容量を指定する（0は1に切り上げ）
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity.max(1);
        self
    }
}

// パスワードをログに出さない
impl std::fmt::Debug for UploadRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadRequest")
            .field("email", &self.email)
            .field("password", &"***")
            .field("target", &self.target)
            .field("channel_capacity", &self.channel_capacity)
            .finish()
    }
}
