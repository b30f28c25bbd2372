//! # Workspace Repository Trait
//!
//! リクエストごとの作業ディレクトリ管理を抽象化するトレイト

use anyhow::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// ワークスペースリポジトリ
///
/// アップロードファイルの一時保存先となるワークスペースの
/// 作成・書き込み・掃除を担当するリポジトリ
#[async_trait]
pub trait WorkspaceRepository: Send + Sync {
    /// 古くなったワークスペースを掃除する
    ///
    /// 結果ディレクトリには触れない。個々のエントリの削除失敗は
    /// 警告ログに記録され、処理は継続される。
    ///
    /// # Returns
    ///
    /// 削除したエントリ数
    ///
    /// # Errors
    ///
    /// 作業ディレクトリ自体を読めない場合にエラーを返す
    async fn sweep_stale(&self) -> Result<usize>;

    /// リクエスト専用のワークスペースを作成する
    ///
    /// # Arguments
    ///
    /// * `request_id` - リクエスト識別子
    ///
    /// # Returns
    ///
    /// 作成したワークスペースのパス
    ///
    /// # Errors
    ///
    /// ディレクトリの作成に失敗した場合にエラーを返す
    async fn create_workspace(&self, request_id: &str) -> Result<PathBuf>;

    /// ワークスペースにファイルを書き込む
    ///
    /// # Arguments
    ///
    /// * `workspace` - 書き込み先ワークスペース
    /// * `file_name` - 保存ファイル名
    /// * `bytes` - ファイル内容
    ///
    /// # Returns
    ///
    /// 書き込んだファイルのパス
    ///
    /// # Errors
    ///
    /// 書き込みに失敗した場合にエラーを返す
    async fn store_file(
        &self,
        workspace: &Path,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<PathBuf>;

    /// ワークスペースを削除する
    ///
    /// # Arguments
    ///
    /// * `workspace` - 削除するワークスペース
    ///
    /// # Errors
    ///
    /// 削除に失敗した場合にエラーを返す
    async fn remove_workspace(&self, workspace: &Path) -> Result<()>;
}
