//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **RemoteDir / RemoteFile**: リモートノードのハンドル
//! - **LocalEntry**: ローカル走査の1ステップ
//! - **UploadOutcome**: アップロード結果の集計

pub mod local_entry;
pub mod remote_node;
pub mod upload_outcome;
