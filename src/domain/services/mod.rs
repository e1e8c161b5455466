//! # Domain Services
//!
//! エンティティに属さないビジネスルール
//!
//! - **ParentStack**: 前順序走査中の深さごとの親フォルダ管理

pub mod parent_stack;
