//! # megaup
//!
//! ローカルのファイルまたはディレクトリツリーを MEGA アカウントにアップロードするツール
//!
//! 4層で構成されています：
//!
//! - **Domain層**: ハンドル、ローカルエントリ、エラー分類、Repository trait
//! - **Application層**: ツリーアップロードのユースケースと進捗レポーター
//! - **Adapter層**: 外部システムとの統合（MEGA, ファイルシステム, 端末表示）
//! - **Driver層**: CLI、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
// カバレッジ計測時に外部サービス依存コードを除外するために使用
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
