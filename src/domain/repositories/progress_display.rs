//! # Progress Display Trait
//!
//! 単一ファイルのアップロード進捗の表示を抽象化

/// 進捗表示
pub trait ProgressDisplay: Send {
    /// `delta` バイト進める
    fn advance(&mut self, delta: u64);

    /// 完了状態を表示する
    fn finish(&mut self);

    /// 途中で終わった状態のまま表示を閉じる
    fn abandon(&mut self);
}

/// 進捗表示のファクトリ
pub trait ProgressDisplayFactory: Send + Sync {
    /// ファイル名と合計サイズから進捗表示を作成する
    fn create(&self, file_name: &str, total: u64) -> Box<dyn ProgressDisplay>;
}
