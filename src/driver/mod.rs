//! # Driver Layer (Presentation)
//!
//! HTTPサーバーとCLIの外部インターフェースを提供
//!
//! ## 特徴
//!
//! - Use Caseを呼び出してビジネスフローを起動
//! - 依存性注入（DI）を行い、全てを組み立てる
//! - ユーザーとのインターフェース
//!
//! ## 構成要素
//!
//! - **cli**: CLI引数のパース
//! - **error**: HTTPレスポンスへのエラーマッピング
//! - **handlers**: 各ルートのリクエスト処理
//! - **pages**: 埋め込みHTML
//! - **server**: 依存の組み立てとサーバー起動

pub mod cli;
pub mod error;
pub mod handlers;
pub mod pages;
pub mod server;

pub use cli::Args;
pub use server::MontageServer;
