//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **UploadTreeUseCase**: ローカルのファイル/ディレクトリツリーのアップロード

pub mod upload_tree;
