//! # Filesystem Result Repository Implementation
//!
//! ResultRepositoryのファイルシステム実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::domain::repositories::result_repository::{CompositeEntry, ResultRepository};
use crate::domain::services::naming;

/// ファイルシステムベースの結果リポジトリ
///
/// 結果ディレクトリ直下のPNGだけを合成結果として扱う
pub struct FsResultRepository {
    output_dir: PathBuf,
}

impl FsResultRepository {
    /// 新しいリポジトリを作成
    ///
    /// # Arguments
    ///
    /// * `output_dir` - 合成結果の出力ディレクトリ
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// 結果ディレクトリ内のPNGを列挙する（内部実装）
    fn list_composites_internal(output_dir: &Path) -> Result<Vec<CompositeEntry>> {
        if !output_dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for entry in WalkDir::new(output_dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("png") {
                continue;
            }
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };

            let metadata = match entry.metadata() {
                Ok(m) => m,
                Err(e) => {
                    warn!("Failed to read metadata for {}: {}", path.display(), e);
                    continue;
                }
            };
            let created_at = metadata
                .modified()
                .map(DateTime::<Utc>::from)
                .unwrap_or_else(|_| Utc::now());

            entries.push(CompositeEntry {
                file_name: file_name.to_string(),
                created_at,
                size_bytes: metadata.len(),
            });
        }

        // バッチの新しい順、バッチ内はグループ番号順。
        // 同一バッチでもmtimeは書き込み順にずれるため、並びは
        // 名前のバッチ時刻プレフィックスとグループ番号から導く
        entries.sort_by(|a, b| {
            let (batch_a, group_a) = naming::composite_sort_key(&a.file_name);
            let (batch_b, group_b) = naming::composite_sort_key(&b.file_name);
            batch_b
                .cmp(batch_a)
                .then_with(|| group_a.cmp(&group_b))
                .then_with(|| a.file_name.cmp(&b.file_name))
        });

        Ok(entries)
    }

    /// 名前で合成画像を読む（内部実装）
    ///
    /// パス要素として安全でない名前と存在しないファイルはNone
    fn load_composite_internal(output_dir: &Path, file_name: &str) -> Result<Option<Vec<u8>>> {
        if !naming::is_safe_component(file_name) {
            return Ok(None);
        }

        let path = output_dir.join(file_name);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => {
                Err(e).context(format!("Failed to read composite: {}", path.display()))
            }
        }
    }
}

#[async_trait]
impl ResultRepository for FsResultRepository {
    async fn list_composites(&self) -> Result<Vec<CompositeEntry>> {
        let output_dir = self.output_dir.clone();

        // ディレクトリ走査はブロッキング処理なのでspawn_blockingでラップ
        tokio::task::spawn_blocking(move || Self::list_composites_internal(&output_dir))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }

    async fn load_composite(&self, file_name: &str) -> Result<Option<Vec<u8>>> {
        let output_dir = self.output_dir.clone();
        let file_name = file_name.to_string();

        tokio::task::spawn_blocking(move || {
            Self::load_composite_internal(&output_dir, &file_name)
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}
