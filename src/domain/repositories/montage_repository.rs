//! # Montage Repository Trait
//!
//! 画像グループのグリッド合成を抽象化するトレイト

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::domain::entities::grid_spec::GridSpec;
use crate::domain::entities::upload_batch::ImageGroup;

/// 合成結果の情報
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositeInfo {
    /// キャンバス幅（ピクセル）
    pub width: u32,
    /// キャンバス高（ピクセル）
    pub height: u32,
}

/// 合成リポジトリ
///
/// 画像グループを1枚のグリッド合成画像として出力するリポジトリ
#[async_trait]
pub trait MontageRepository: Send + Sync {
    /// グループを合成して保存する
    ///
    /// # Arguments
    ///
    /// * `group` - 合成する画像グループ
    /// * `grid` - グリッド形状
    /// * `output_path` - 出力先のPNGパス
    ///
    /// # Returns
    ///
    /// 生成したキャンバスの寸法
    ///
    /// # Errors
    ///
    /// 画像の読み込み・合成・保存のいずれかに失敗した場合にエラーを返す
    async fn compose_group(
        &self,
        group: &ImageGroup,
        grid: &GridSpec,
        output_path: &Path,
    ) -> Result<CompositeInfo>;
}
