//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **StoreUploadsUseCase**: アップロードファイルのワークスペース保存
//! - **ComposeMontageUseCase**: グループ分割とグリッド合成

pub mod compose_montage;
pub mod store_uploads;
