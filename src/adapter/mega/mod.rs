//! MEGA Adapter Modules
//!
//! MEGA統合のためのアダプターモジュール

pub mod client;
pub mod progress_reader;
