//! # Parent Stack Service
//!
//! 前順序走査で、各エントリのアップロード先フォルダを決める

use crate::domain::entities::remote_node::RemoteDir;

/// 深さごとのリモート親フォルダのスタック
///
/// `stack[d]` は深さ `d` のエントリの親。深さ0のエントリ（走査ルート）の親は
/// 呼び出し側が渡したリモートフォルダになる。
#[derive(Debug, Clone)]
pub struct ParentStack {
    stack: Vec<RemoteDir>,
}

impl ParentStack {
    /// 走査ルートの親フォルダから作成
    pub fn new(root_parent: RemoteDir) -> Self {
        Self {
            stack: vec![root_parent],
        }
    }

    /// 深さ `depth` のエントリの親フォルダを返す
    ///
    /// より深いフォルダは走査済みなので捨てる。前順序でない入力では `None`
    pub fn parent_for(&mut self, depth: usize) -> Option<&RemoteDir> {
        if depth >= self.stack.len() {
            return None;
        }
        self.stack.truncate(depth + 1);
        self.stack.last()
    }

    /// 深さ `depth` で作成したフォルダを、その子の親として登録する
    pub fn enter(&mut self, depth: usize, dir: RemoteDir) {
        self.stack.truncate(depth + 1);
        self.stack.push(dir);
    }

    /// 現在のスタックの深さ
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_entry_goes_to_root_parent() {
        let mut stack = ParentStack::new(RemoteDir::new("root"));
        assert_eq!(stack.parent_for(0), Some(&RemoteDir::new("root")));
    }

    #[test]
    fn test_children_go_to_entered_dir() {
        let mut stack = ParentStack::new(RemoteDir::new("root"));
        stack.enter(0, RemoteDir::new("photos"));
        assert_eq!(stack.parent_for(1), Some(&RemoteDir::new("photos")));

        stack.enter(1, RemoteDir::new("2024"));
        assert_eq!(stack.parent_for(2), Some(&RemoteDir::new("2024")));
        assert_eq!(stack.len(), 3);
    }

    #[test]
    fn test_returning_to_shallower_depth_drops_finished_dirs() {
        let mut stack = ParentStack::new(RemoteDir::new("root"));
        stack.enter(0, RemoteDir::new("a"));
        stack.enter(1, RemoteDir::new("a/b"));
        stack.enter(2, RemoteDir::new("a/b/c"));

        // a の次の子（深さ1）は a の下に入る
        assert_eq!(stack.parent_for(1), Some(&RemoteDir::new("a")));
        assert_eq!(stack.len(), 2);

        stack.enter(1, RemoteDir::new("a/d"));
        assert_eq!(stack.parent_for(2), Some(&RemoteDir::new("a/d")));
    }

    #[test]
    fn test_depth_without_parent_is_rejected() {
        let mut stack = ParentStack::new(RemoteDir::new("root"));
        assert_eq!(stack.parent_for(2), None);
    }
}
