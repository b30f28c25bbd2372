//! # HTTP Server Bootstrap
//!
//! 依存の組み立てとルーティング
//!
//! ## 処理の流れ
//!
//! 1. 設定からリポジトリとユースケースを組み立てる
//! 2. 作業ディレクトリと結果ディレクトリを用意する
//! 3. ルーターを構築してリクエストを処理し続ける

use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use log::info;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::adapter::config::Config;
use crate::adapter::repositories::fs_result_repository::FsResultRepository;
use crate::adapter::repositories::fs_workspace_repository::FsWorkspaceRepository;
use crate::adapter::repositories::image_montage_repository::ImageMontageRepository;
use crate::application::use_cases::compose_montage::ComposeMontageUseCase;
use crate::application::use_cases::store_uploads::StoreUploadsUseCase;
use crate::driver::handlers;

/// ハンドラ間で共有するアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub(crate) store_uploads: Arc<StoreUploadsUseCase<FsWorkspaceRepository>>,
    pub(crate) compose_montage: Arc<ComposeMontageUseCase<ImageMontageRepository>>,
    pub(crate) workspace_repository: Arc<FsWorkspaceRepository>,
    pub(crate) result_repository: Arc<FsResultRepository>,
    pub(crate) output_dir: PathBuf,
}

/// グリッド合成サーバー
pub struct MontageServer {
    config: Config,
    state: AppState,
}

impl MontageServer {
    /// 設定から依存を組み立てる
    ///
    /// # Arguments
    ///
    /// * `config` - サーバー設定
    pub fn new(config: Config) -> Self {
        // チルダ付きパスを展開してからディレクトリを決める
        let upload_root = PathBuf::from(shellexpand::tilde(&config.upload_dir).as_ref());
        let output_dir = upload_root.join(&config.output_dir);

        // Repositoryの実装を生成
        let workspace_repository = Arc::new(FsWorkspaceRepository::new(
            upload_root,
            output_dir.clone(),
            Duration::from_secs(config.workspace_ttl_secs),
        ));
        let montage_repository = Arc::new(ImageMontageRepository::new(config.cell_gap));
        let result_repository = Arc::new(FsResultRepository::new(output_dir.clone()));

        // UseCaseを生成（依存性注入）
        let store_uploads = Arc::new(StoreUploadsUseCase::new(workspace_repository.clone()));
        let compose_montage = Arc::new(ComposeMontageUseCase::new(montage_repository));

        let state = AppState {
            store_uploads,
            compose_montage,
            workspace_repository,
            result_repository,
            output_dir,
        };

        Self { config, state }
    }

    /// ルーターを構築する
    pub fn router(&self) -> Router {
        Router::new()
            .route("/", get(handlers::index))
            .route("/healthz", get(handlers::healthz))
            .route("/upload", post(handlers::upload))
            .route("/result/:file_name", get(handlers::result))
            .route("/results", get(handlers::list_results))
            .with_state(self.state.clone())
            .layer(DefaultBodyLimit::max(self.config.max_upload_bytes))
    }

    /// サーバーを起動してリクエストを処理し続ける
    ///
    /// # Errors
    ///
    /// ディレクトリの作成またはアドレスのバインドに失敗した場合にエラーを返す
    pub async fn run(self) -> Result<()> {
        // 結果ディレクトリを作ると作業ディレクトリも一緒に作られる
        fs::create_dir_all(&self.state.output_dir).context(format!(
            "Failed to create output directory: {}",
            self.state.output_dir.display()
        ))?;
        info!("Output directory: {}", self.state.output_dir.display());

        let addr = bind_address(&self.config);
        let app = self.router();

        info!("Listening on http://{}", addr);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .context(format!("Failed to bind {}", addr))?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// バインド先アドレスを組み立てる
pub fn bind_address(config: &Config) -> String {
    format!("{}:{}", config.host, config.port)
}
