//! Adapter Layer
//!
//! 外部システム（画像処理, ファイルシステム）との統合

pub mod config;
pub mod montage;
pub mod repositories;
