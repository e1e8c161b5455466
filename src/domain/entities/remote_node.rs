//! # Remote Node Handles
//!
//! リモートノードを指す不変のハンドル

use std::fmt;

/// リモートフォルダのハンドル
///
/// クライアントから返され、以降の作成・アップロード呼び出しに値渡しされる
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemoteDir {
    handle: String,
}

impl RemoteDir {
    /// ハンドル文字列からフォルダハンドルを作成
    pub fn new(handle: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
        }
    }

    /// ハンドル文字列を返す
    pub fn handle(&self) -> &str {
        &self.handle
    }
}

impl fmt::Display for RemoteDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.handle)
    }
}

/// アップロード済みファイルのハンドル
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemoteFile {
    handle: String,
}

impl RemoteFile {
    /// ハンドル文字列からファイルハンドルを作成
    pub fn new(handle: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
        }
    }

    /// ハンドル文字列を返す
    pub fn handle(&self) -> &str {
        &self.handle
    }
}

impl fmt::Display for RemoteFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.handle)
    }
}

/// 走査ルートに対応して作成されたリモートノード
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteNode {
    Dir(RemoteDir),
    File(RemoteFile),
}

impl RemoteNode {
    /// ハンドル文字列を返す
    pub fn handle(&self) -> &str {
        match self {
            RemoteNode::Dir(dir) => dir.handle(),
            RemoteNode::File(file) => file.handle(),
        }
    }
}
