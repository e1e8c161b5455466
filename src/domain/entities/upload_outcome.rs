//! # UploadOutcome
//!
//! アップロード結果の集計

use super::remote_node::RemoteNode;

/// アップロード結果
///
/// 走査ルートに対応するリモートノードと、作成・アップロードの件数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOutcome {
    /// 走査ルートに対応するリモートノード
    pub root: RemoteNode,
    /// 作成したリモートフォルダ数（ルートを含む）
    pub folders_created: usize,
    /// アップロードしたファイル数
    pub files_uploaded: usize,
    /// アップロードした合計バイト数
    pub bytes_uploaded: u64,
}

impl UploadOutcome {
    /// ルートノードから結果を作成
    pub fn new(root: RemoteNode) -> Self {
        Self {
            root,
            folders_created: 0,
            files_uploaded: 0,
            bytes_uploaded: 0,
        }
    }

    /// ルートがディレクトリかどうか
    pub fn is_directory(&self) -> bool {
        matches!(self.root, RemoteNode::Dir(_))
    }
}
