//! # Result Repository Trait
//!
//! 合成結果の参照を抽象化するトレイト

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// 合成結果の一覧エントリ
#[derive(Debug, Clone, Serialize)]
pub struct CompositeEntry {
    /// ファイル名
    pub file_name: String,
    /// 作成日時（UTC）
    pub created_at: DateTime<Utc>,
    /// ファイルサイズ（バイト）
    pub size_bytes: u64,
}

/// 結果リポジトリ
///
/// 結果ディレクトリに蓄積された合成画像の列挙と読み込みを担当する
#[async_trait]
pub trait ResultRepository: Send + Sync {
    /// 合成画像を列挙する
    ///
    /// # Returns
    ///
    /// 合成画像のエントリのベクター（バッチの新しい順、バッチ内はグループ番号順）
    ///
    /// # Errors
    ///
    /// 結果ディレクトリの走査に失敗した場合にエラーを返す
    async fn list_composites(&self) -> Result<Vec<CompositeEntry>>;

    /// 名前を指定して合成画像を読み込む
    ///
    /// # Arguments
    ///
    /// * `file_name` - 合成画像のファイル名（単一のパス要素）
    ///
    /// # Returns
    ///
    /// ファイル内容。存在しない場合と安全でない名前の場合は `None`
    ///
    /// # Errors
    ///
    /// 読み込みがI/Oエラーで失敗した場合にエラーを返す
    async fn load_composite(&self, file_name: &str) -> Result<Option<Vec<u8>>>;
}
