//! # Application Services
//!
//! - **ProgressReporter**: 進捗チャネルとワーカーの管理

pub mod progress_reporter;
