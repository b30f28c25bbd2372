//! # Image Montage Repository Implementation
//!
//! MontageRepositoryのimageクレート実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::info;
use std::path::{Path, PathBuf};

use crate::adapter::montage::canvas;
use crate::domain::entities::grid_spec::GridSpec;
use crate::domain::entities::upload_batch::ImageGroup;
use crate::domain::repositories::montage_repository::{CompositeInfo, MontageRepository};

/// imageクレートベースの合成リポジトリ
///
/// グループ内の画像をデコードし、スケール適用後に1枚の
/// グリッドキャンバスへ合成してPNGとして保存する
pub struct ImageMontageRepository {
    /// セル間の余白（ピクセル）
    gap: u32,
}

impl ImageMontageRepository {
    /// 新しいリポジトリを作成
    ///
    /// # Arguments
    ///
    /// * `gap` - セル間の余白（ピクセル）
    pub fn new(gap: u32) -> Self {
        Self { gap }
    }

    /// 画像を読み込んで合成し、PNGとして保存する（内部実装）
    fn compose_group_internal(
        paths: &[PathBuf],
        grid: &GridSpec,
        gap: u32,
        output_path: &Path,
    ) -> Result<CompositeInfo> {
        let mut images = Vec::with_capacity(paths.len());
        for path in paths {
            // 保存名は拡張子を持たないことがあるため、形式は内容から判定する
            let reader = image::ImageReader::open(path)
                .and_then(|reader| reader.with_guessed_format())
                .context(format!("Failed to open image: {}", path.display()))?;
            let img = reader
                .decode()
                .context(format!("Failed to decode image: {}", path.display()))?;
            images.push(img.to_rgb8());
        }

        let images = canvas::apply_scale(images, grid.scale())?;
        let composite = canvas::compose_grid(&images, grid, gap)?;

        composite.save(output_path).context(format!(
            "Failed to save composite: {}",
            output_path.display()
        ))?;

        info!(
            "Saved composite {} ({}x{})",
            output_path.display(),
            composite.width(),
            composite.height()
        );

        Ok(CompositeInfo {
            width: composite.width(),
            height: composite.height(),
        })
    }
}

#[async_trait]
impl MontageRepository for ImageMontageRepository {
    async fn compose_group(
        &self,
        group: &ImageGroup,
        grid: &GridSpec,
        output_path: &Path,
    ) -> Result<CompositeInfo> {
        let paths: Vec<PathBuf> = group.images().iter().map(|img| img.path.clone()).collect();
        let grid = *grid;
        let gap = self.gap;
        let output_path = output_path.to_path_buf();

        // デコードとエンコードはCPUバウンドなのでspawn_blockingでラップ
        tokio::task::spawn_blocking(move || {
            Self::compose_group_internal(&paths, &grid, gap, &output_path)
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}
