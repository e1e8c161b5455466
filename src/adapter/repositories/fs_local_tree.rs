//! File System Local Tree Implementation
//!
//! LocalTreeのファイルシステム実装（walkdirで前順序に走査）

use std::fs;
use std::io;
use std::path::Path;

use log::debug;
use walkdir::{DirEntry, WalkDir};

use crate::domain::entities::local_entry::LocalEntry;
use crate::domain::errors::UploadError;
use crate::domain::repositories::local_tree::{LocalTree, WalkItem};

/// ファイルシステムベースのローカルツリー
///
/// シンボリックリンクは辿らずにファイルとして扱い、サイズはリンク先のものを使う
pub struct FsLocalTree;

impl FsLocalTree {
    /// 新しいローカルツリーを作成
    pub fn new() -> Self {
        Self
    }

    /// 走査ルートのリモート名を決める
    ///
    /// `.` や `..` で終わるパスは正規化してから最後の要素を使う
    pub fn root_name(path: &Path) -> Result<String, UploadError> {
        if let Some(name) = path.file_name() {
            return Ok(name.to_string_lossy().into_owned());
        }

        let canonical = fs::canonicalize(path).map_err(|source| UploadError::Local {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(canonical
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| canonical.to_string_lossy().into_owned()))
    }

    fn to_entry(entry: DirEntry) -> WalkItem {
        let path = entry.path().to_path_buf();
        let depth = entry.depth();
        let name = if depth == 0 {
            Self::root_name(&path)?
        } else {
            entry.file_name().to_string_lossy().into_owned()
        };

        if entry.file_type().is_dir() {
            debug!("Directory {} (depth {})", path.display(), depth);
            return Ok(LocalEntry::directory(path, name, depth));
        }

        let size = fs::metadata(&path)
            .map_err(|source| UploadError::Local {
                path: path.clone(),
                source,
            })?
            .len();

        debug!("File {} (depth {}, {} bytes)", path.display(), depth, size);
        Ok(LocalEntry::file(path, name, depth, size))
    }

    fn walk_error(err: walkdir::Error) -> UploadError {
        let path = err.path().map(Path::to_path_buf).unwrap_or_default();
        let source = err
            .into_io_error()
            .unwrap_or_else(|| io::Error::other("filesystem loop detected"));
        UploadError::Local { path, source }
    }
}

impl LocalTree for FsLocalTree {
    fn walk<'a>(&'a self, root: &Path) -> Box<dyn Iterator<Item = WalkItem> + Send + 'a> {
        let walker = WalkDir::new(root).follow_links(false).into_iter();
        Box::new(walker.map(|result| result.map_err(Self::walk_error).and_then(Self::to_entry)))
    }
}

impl Default for FsLocalTree {
    fn default() -> Self {
        Self::new()
    }
}
