//! # Compose Montage Use Case
//!
//! グループ分割とグリッド合成ユースケース

use anyhow::Result;
use chrono::Utc;
use log::info;
use std::path::Path;
use std::sync::Arc;

use crate::domain::entities::grid_spec::GridSpec;
use crate::domain::entities::upload_batch::UploadBatch;
use crate::domain::repositories::montage_repository::MontageRepository;
use crate::domain::services::naming;

/// 合成結果のサマリー
#[derive(Debug, Clone)]
pub struct MontageSummary {
    /// 生成した合成画像のファイル名（グループ順）
    pub composite_files: Vec<String>,
    /// グループ数
    pub group_count: usize,
    /// 入力画像数
    pub image_count: usize,
}

/// グリッド合成ユースケース
///
/// バッチを rows*cols 枚ずつのグループに分割し、グループごとに
/// 1枚の合成PNGを結果ディレクトリへ出力する
pub struct ComposeMontageUseCase<M: MontageRepository> {
    montage_repository: Arc<M>,
}

impl<M: MontageRepository> ComposeMontageUseCase<M> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `montage_repository` - 合成リポジトリ
    pub fn new(montage_repository: Arc<M>) -> Self {
        Self { montage_repository }
    }

    /// バッチをグループごとに合成する
    ///
    /// # Arguments
    ///
    /// * `batch` - 保存済み画像のバッチ
    /// * `grid` - グリッド形状
    /// * `output_dir` - 合成結果の出力ディレクトリ
    ///
    /// # Returns
    ///
    /// 合成結果のサマリー（ファイル名はグループ順）
    ///
    /// # Errors
    ///
    /// いずれかのグループの合成または保存に失敗した場合にエラーを返す
    pub async fn execute(
        &self,
        batch: &UploadBatch,
        grid: &GridSpec,
        output_dir: &Path,
    ) -> Result<MontageSummary> {
        if batch.is_empty() {
            return Ok(MontageSummary {
                composite_files: Vec::new(),
                group_count: 0,
                image_count: 0,
            });
        }

        // バッチ内の全グループが同じタイムスタンプを共有する
        let timestamp = Utc::now();
        let groups = batch.split_into_groups(grid.cell_count());

        let mut composite_files = Vec::with_capacity(groups.len());
        for group in &groups {
            if group.len() < grid.cell_count() {
                info!(
                    "Group {} has only {} of {} images, remaining cells stay empty",
                    group.index(),
                    group.len(),
                    grid.cell_count()
                );
            }

            let file_name = naming::composite_file_name(&timestamp, group.index());
            let output_path = output_dir.join(&file_name);
            self.montage_repository
                .compose_group(group, grid, &output_path)
                .await?;

            composite_files.push(file_name);
        }

        Ok(MontageSummary {
            composite_files,
            group_count: groups.len(),
            image_count: batch.len(),
        })
    }
}
