//! # Domain Layer
//!
//! このモジュールはビジネスの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - 外部依存を持たない（Rust標準ライブラリと最小限の依存のみ）
//! - フレームワークに依存しない
//! - HTTPや画像デコードの詳細について何も知らない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（GridSpec, UploadBatchなど）
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（配置計算と命名規則）

pub mod entities;
pub mod repositories;
pub mod services;
