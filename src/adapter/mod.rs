//! Adapter Layer
//!
//! 外部システム（MEGA, ファイルシステム, 端末）との統合

pub mod config;
pub mod mega;
pub mod progress;
pub mod repositories;
