//! # Filesystem Workspace Repository Implementation
//!
//! WorkspaceRepositoryのファイルシステム実装
//!
//! アップロード作業ディレクトリ配下にリクエストごとのワークスペースを作り、
//! 古くなったエントリを掃除する。結果ディレクトリには触れない。

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::repositories::workspace_repository::WorkspaceRepository;

/// ファイルシステムベースのワークスペースリポジトリ
pub struct FsWorkspaceRepository {
    /// アップロード作業ディレクトリ
    upload_root: PathBuf,
    /// 掃除対象から除外する結果ディレクトリ
    output_dir: PathBuf,
    /// 最終更新からこの時間が経過したエントリを掃除対象とみなす
    stale_after: Duration,
}

impl FsWorkspaceRepository {
    /// 新しいリポジトリを作成
    ///
    /// # Arguments
    ///
    /// * `upload_root` - アップロード作業ディレクトリ
    /// * `output_dir` - 掃除対象から除外する結果ディレクトリ
    /// * `stale_after` - 掃除対象とみなす経過時間
    pub fn new(upload_root: PathBuf, output_dir: PathBuf, stale_after: Duration) -> Self {
        Self {
            upload_root,
            output_dir,
            stale_after,
        }
    }

    /// 古くなったエントリを削除する（内部実装）
    fn sweep_stale_internal(
        upload_root: &Path,
        output_dir: &Path,
        stale_after: Duration,
    ) -> Result<usize> {
        if !upload_root.exists() {
            fs::create_dir_all(upload_root).context(format!(
                "Failed to create upload directory: {}",
                upload_root.display()
            ))?;
            return Ok(0);
        }

        let entries = fs::read_dir(upload_root).context(format!(
            "Failed to read upload directory: {}",
            upload_root.display()
        ))?;

        let mut removed = 0;
        for entry in entries {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!("Failed to read upload directory entry: {}", e);
                    continue;
                }
            };

            let path = entry.path();
            if path == output_dir {
                continue;
            }
            if !Self::is_stale(&path, stale_after) {
                continue;
            }

            let file_type = match entry.file_type() {
                Ok(t) => t,
                Err(e) => {
                    warn!("Failed to read file type of {}: {}", path.display(), e);
                    continue;
                }
            };

            let result = if file_type.is_dir() {
                fs::remove_dir_all(&path)
            } else {
                fs::remove_file(&path)
            };

            match result {
                Ok(()) => removed += 1,
                Err(e) => {
                    // 掃除の失敗は後続のリクエスト処理を止めない
                    warn!("Failed to remove {}: {}", path.display(), e);
                }
            }
        }

        if removed > 0 {
            info!(
                "Removed {} stale entries from {}",
                removed,
                upload_root.display()
            );
        }

        Ok(removed)
    }

    /// 最終更新からの経過時間が閾値以上かどうかを判定する
    ///
    /// メタデータを読めないエントリは掃除対象にしない
    fn is_stale(path: &Path, stale_after: Duration) -> bool {
        let Ok(metadata) = fs::metadata(path) else {
            return false;
        };
        let Ok(modified) = metadata.modified() else {
            return false;
        };
        modified
            .elapsed()
            .map(|age| age >= stale_after)
            .unwrap_or(false)
    }

    /// ワークスペースを作成する（内部実装）
    fn create_workspace_internal(upload_root: &Path, request_id: &str) -> Result<PathBuf> {
        let workspace = upload_root.join(request_id);
        fs::create_dir_all(&workspace).context(format!(
            "Failed to create workspace: {}",
            workspace.display()
        ))?;
        Ok(workspace)
    }

    /// ファイルを書き込む（内部実装）
    fn store_file_internal(workspace: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
        let path = workspace.join(file_name);
        fs::write(&path, bytes).context(format!(
            "Failed to write uploaded file: {}",
            path.display()
        ))?;
        Ok(path)
    }

    /// ワークスペースを削除する（内部実装）
    fn remove_workspace_internal(workspace: &Path) -> Result<()> {
        fs::remove_dir_all(workspace).context(format!(
            "Failed to remove workspace: {}",
            workspace.display()
        ))
    }
}

#[async_trait]
impl WorkspaceRepository for FsWorkspaceRepository {
    async fn sweep_stale(&self) -> Result<usize> {
        let upload_root = self.upload_root.clone();
        let output_dir = self.output_dir.clone();
        let stale_after = self.stale_after;

        // ファイルI/Oはブロッキング処理なのでspawn_blockingでラップ
        tokio::task::spawn_blocking(move || {
            Self::sweep_stale_internal(&upload_root, &output_dir, stale_after)
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }

    async fn create_workspace(&self, request_id: &str) -> Result<PathBuf> {
        let upload_root = self.upload_root.clone();
        let request_id = request_id.to_string();

        tokio::task::spawn_blocking(move || {
            Self::create_workspace_internal(&upload_root, &request_id)
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }

    async fn store_file(
        &self,
        workspace: &Path,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<PathBuf> {
        let workspace = workspace.to_path_buf();
        let file_name = file_name.to_string();

        tokio::task::spawn_blocking(move || {
            Self::store_file_internal(&workspace, &file_name, &bytes)
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }

    async fn remove_workspace(&self, workspace: &Path) -> Result<()> {
        let workspace = workspace.to_path_buf();

        tokio::task::spawn_blocking(move || Self::remove_workspace_internal(&workspace))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}
