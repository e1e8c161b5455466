//! # Domain Layer
//!
//! このモジュールはアップロードの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - MEGA クライアントやファイルシステム実装を知らない
//! - フレームワークに依存しない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: エンティティとバリューオブジェクト（RemoteDir, LocalEntryなど）
//! - **errors**: アップロード処理のエラー分類
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（走査中の親フォルダ管理）

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
