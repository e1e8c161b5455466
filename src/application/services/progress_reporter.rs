//! # Progress Reporter
//!
//! 単一ファイルのアップロード進捗を、有界チャネルと専用ワーカーで表示する

use anyhow::{Context, Result};
use log::debug;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::domain::repositories::progress_display::ProgressDisplay;
use crate::domain::repositories::remote_storage::ProgressSender;

/// 進捗レポーター
///
/// アップロード側はチャネルにバイト数の差分を送り、ワーカーが受け取って
/// 表示を進める。チャネルが満杯のときは送信側が待つので差分は失われない。
/// `finish` がアップロードの成否を伝えてチャネルを閉じ、ワーカーの終了を待つ。
/// 表示を完了にするか中断にするかは受信バイト数ではなく成否で決まる。
pub struct ProgressReporter {
    sender: Option<ProgressSender>,
    outcome: Option<oneshot::Sender<bool>>,
    worker: JoinHandle<u64>,
}

impl ProgressReporter {
    /// ワーカーを起動する
    ///
    /// # Arguments
    ///
    /// * `display` - 進捗表示
    /// * `capacity` - チャネル容量（0は1に切り上げ）
    pub fn spawn(mut display: Box<dyn ProgressDisplay>, capacity: usize) -> Self {
        let (sender, mut receiver) = mpsc::channel::<u64>(capacity.max(1));
        let (outcome, outcome_receiver) = oneshot::channel::<bool>();

        let worker = tokio::spawn(async move {
            let mut received = 0u64;
            while let Some(delta) = receiver.recv().await {
                received += delta;
                display.advance(delta);
            }

            // finish されずに破棄された場合は失敗扱い
            if outcome_receiver.await.unwrap_or(false) {
                display.finish();
            } else {
                display.abandon();
            }
            received
        });

        Self {
            sender: Some(sender),
            outcome: Some(outcome),
            worker,
        }
    }

    /// アップロード呼び出しに渡す送信側
    pub fn sender(&self) -> Option<ProgressSender> {
        self.sender.clone()
    }

    /// アップロードの成否を伝え、ワーカーの終了を待つ
    ///
    /// 送信側のクローンが全て破棄されるまで戻らない
    ///
    /// # Arguments
    ///
    /// * `succeeded` - アップロードが成功したかどうか
    ///
    /// # Returns
    ///
    /// ワーカーが受け取った合計バイト数
    pub async fn finish(mut self, succeeded: bool) -> Result<u64> {
        if let Some(outcome) = self.outcome.take() {
            let _ = outcome.send(succeeded);
        }
        self.sender.take();
        let received = self
            .worker
            .await
            .context("Progress worker terminated abnormally")?;
        debug!("Progress worker finished after {} bytes", received);
        Ok(received)
    }
}
