//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **GridSpec**: グリッド形状とスケールのバリューオブジェクト
//! - **UploadBatch / ImageGroup**: 保存済み画像の順序付きコレクションとそのグループ分割

pub mod grid_spec;
pub mod upload_batch;
