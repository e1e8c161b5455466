//! # Local Tree Trait
//!
//! ローカルファイルシステムの走査を抽象化

use std::path::Path;

use crate::domain::entities::local_entry::LocalEntry;
use crate::domain::errors::UploadError;

/// 走査結果の1要素（stat / 読み取りエラーは `UploadError::Local` として返る）
pub type WalkItem = Result<LocalEntry, UploadError>;

/// ローカルツリー
///
/// パスを深さ優先・前順序で走査し、ルート自身を最初に返す。
/// 各ディレクトリ内の順序はOSの読み取り順のまま（ソートしない）
pub trait LocalTree: Send + Sync {
    /// `root` から走査を開始する
    fn walk<'a>(&'a self, root: &Path) -> Box<dyn Iterator<Item = WalkItem> + Send + 'a>;
}
