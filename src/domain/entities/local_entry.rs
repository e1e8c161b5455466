//! # LocalEntry Value Object
//!
//! ローカルファイルシステム走査の1ステップ

use std::path::PathBuf;

/// エントリの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// ディレクトリ（リモートにフォルダを作成する）
    Directory,
    /// ディレクトリ以外（通常ファイル、シンボリックリンクなど）
    File,
}

/// ローカルエントリ
///
/// 走査ルートからの深さ（ルート = 0）と、ファイルの場合はバイトサイズを持つ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalEntry {
    /// エントリのパス
    pub path: PathBuf,
    /// リモートで使う名前（パスのベース名）
    pub name: String,
    /// 走査ルートからの深さ
    pub depth: usize,
    /// エントリの種類
    pub kind: EntryKind,
    /// ファイルサイズ（ディレクトリは0）
    pub size: u64,
}

impl LocalEntry {
    /// ディレクトリエントリを作成
    pub fn directory(path: impl Into<PathBuf>, name: impl Into<String>, depth: usize) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            depth,
            kind: EntryKind::Directory,
            size: 0,
        }
    }

    /// ファイルエントリを作成
    pub fn file(
        path: impl Into<PathBuf>,
        name: impl Into<String>,
        depth: usize,
        size: u64,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            depth,
            kind: EntryKind::File,
            size,
        }
    }

    /// ディレクトリかどうか
    #[inline]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_entry() {
        let entry = LocalEntry::directory("/tmp/photos", "photos", 0);
        assert!(entry.is_dir());
        assert_eq!(entry.size, 0);
        assert_eq!(entry.name, "photos");
    }

    #[test]
    fn test_file_entry() {
        let entry = LocalEntry::file("/tmp/photos/a.jpg", "a.jpg", 1, 2048);
        assert!(!entry.is_dir());
        assert_eq!(entry.depth, 1);
        assert_eq!(entry.size, 2048);
    }
}
