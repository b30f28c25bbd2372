//! # Store Uploads Use Case
//!
//! アップロードファイルのワークスペース保存ユースケース

use anyhow::Result;
use std::sync::Arc;

use crate::application::dto::uploaded_file::UploadedFile;
use crate::domain::entities::upload_batch::{StoredImage, UploadBatch};
use crate::domain::repositories::workspace_repository::WorkspaceRepository;
use crate::domain::services::naming;

/// アップロード保存ユースケース
///
/// 古いワークスペースを掃除した上でリクエスト専用のワークスペースを作り、
/// 受信順の連番を付けてファイルを保存する
pub struct StoreUploadsUseCase<W: WorkspaceRepository> {
    workspace_repository: Arc<W>,
}

impl<W: WorkspaceRepository> StoreUploadsUseCase<W> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `workspace_repository` - ワークスペースリポジトリ
    pub fn new(workspace_repository: Arc<W>) -> Self {
        Self {
            workspace_repository,
        }
    }

    /// アップロードファイルを保存してバッチを作成する
    ///
    /// # Arguments
    ///
    /// * `request_id` - リクエスト識別子（ワークスペース名に使用）
    /// * `files` - 受信したファイル（受信順）
    ///
    /// # Returns
    ///
    /// 保存済み画像のバッチ
    ///
    /// # Errors
    ///
    /// ワークスペースの作成またはファイルの書き込みに失敗した場合にエラーを返す
    pub async fn execute(&self, request_id: &str, files: Vec<UploadedFile>) -> Result<UploadBatch> {
        // 前回リクエストの残骸を先に掃除する（結果ディレクトリは保持される）
        self.workspace_repository.sweep_stale().await?;

        let workspace = self.workspace_repository.create_workspace(request_id).await?;

        let mut images = Vec::with_capacity(files.len());
        for (sequence, file) in files.into_iter().enumerate() {
            let UploadedFile {
                original_name,
                bytes,
            } = file;

            let sanitized = naming::sanitize_file_name(&original_name);
            let stored_name = naming::sequenced_file_name(sequence, &sanitized);
            let path = self
                .workspace_repository
                .store_file(&workspace, &stored_name, bytes)
                .await?;

            images.push(StoredImage {
                sequence,
                path,
                original_name,
            });
        }

        Ok(UploadBatch::new(workspace, images))
    }
}
