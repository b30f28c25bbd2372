//! # HTTP Handlers
//!
//! 各ルートのリクエスト処理

use axum::extract::multipart::Field;
use axum::extract::{Multipart, Path as AxumPath, State};
use axum::http::{header, HeaderValue};
use axum::response::{Html, Redirect, Response};
use axum::Json;
use log::{debug, info, warn};
use std::str::FromStr;
use uuid::Uuid;

use crate::application::dto::uploaded_file::UploadedFile;
use crate::domain::entities::grid_spec::GridSpec;
use crate::domain::repositories::result_repository::{CompositeEntry, ResultRepository};
use crate::domain::repositories::workspace_repository::WorkspaceRepository;
use crate::driver::error::{ApiError, ApiResult};
use crate::driver::pages::INDEX_HTML;
use crate::driver::server::AppState;

/// トップページ（アップロードフォーム）
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// 死活監視
pub async fn healthz() -> &'static str {
    "ok"
}

/// アップロードを受け付けてグリッド合成を実行する
///
/// multipartから rows / cols / scale と files[] を読み取り、
/// 保存・グループ合成のあと最初の合成結果へリダイレクトする
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Redirect> {
    let mut rows: Option<String> = None;
    let mut cols: Option<String> = None;
    let mut scale: Option<String> = None;
    let mut files: Vec<UploadedFile> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("invalid multipart request: {}", e)))?
    {
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("rows") => rows = Some(read_text_field(field).await?),
            Some("cols") => cols = Some(read_text_field(field).await?),
            Some("scale") => scale = Some(read_text_field(field).await?),
            Some("files[]") => {
                let original_name = field.file_name().unwrap_or("").to_string();
                if original_name.is_empty() {
                    // ファイル未選択のまま送信されたパートはスキップ
                    debug!("Skipping file part without a file name");
                    continue;
                }

                let bytes = field.bytes().await.map_err(|e| {
                    ApiError::BadRequest(format!("failed to read uploaded file: {}", e))
                })?;
                files.push(UploadedFile::new(original_name, bytes.to_vec()));
            }
            _ => {
                // 未知のフィールドは無視する
            }
        }
    }

    let rows = parse_grid_field::<u32>(rows, "rows")?;
    let cols = parse_grid_field::<u32>(cols, "cols")?;
    let scale = parse_grid_field::<f32>(scale, "scale")?;
    let grid = GridSpec::new(rows, cols, scale).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let request_id = Uuid::new_v4().to_string();
    info!(
        "Upload request {}: {} files, grid {}x{}, scale {}",
        request_id,
        files.len(),
        rows,
        cols,
        scale
    );

    let batch = state.store_uploads.execute(&request_id, files).await?;
    let summary = state
        .compose_montage
        .execute(&batch, &grid, &state.output_dir)
        .await?;

    // 合成が終わったワークスペースは後始末する。失敗しても掃除に任せる
    if let Err(e) = state
        .workspace_repository
        .remove_workspace(batch.workspace())
        .await
    {
        warn!(
            "Failed to remove workspace {}: {}",
            batch.workspace().display(),
            e
        );
    }

    let first = summary
        .composite_files
        .first()
        .ok_or_else(|| ApiError::BadRequest("upload contained no image files".to_string()))?;

    info!(
        "Upload request {} complete: {} composites from {} images",
        request_id, summary.group_count, summary.image_count
    );

    Ok(Redirect::to(&format!("/result/{}", first)))
}

/// 合成結果のPNGを返す
pub async fn result(
    State(state): State<AppState>,
    AxumPath(file_name): AxumPath<String>,
) -> ApiResult<Response> {
    let bytes = state
        .result_repository
        .load_composite(&file_name)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("no composite named {}", file_name)))?;

    Ok(png_response(bytes))
}

/// 合成結果の一覧をJSONで返す（新しい順）
pub async fn list_results(State(state): State<AppState>) -> ApiResult<Json<Vec<CompositeEntry>>> {
    let entries = state.result_repository.list_composites().await?;
    Ok(Json(entries))
}

/// テキストフィールドを読み取る
async fn read_text_field(field: Field<'_>) -> ApiResult<String> {
    field
        .text()
        .await
        .map_err(|e| ApiError::BadRequest(format!("failed to read form field: {}", e)))
}

/// 数値フォームフィールドをパースする
///
/// 未指定またはパース不能な値は BadRequest
fn parse_grid_field<T: FromStr>(value: Option<String>, name: &str) -> Result<T, ApiError> {
    let raw = value.ok_or_else(|| ApiError::BadRequest(format!("missing form field: {}", name)))?;
    raw.trim()
        .parse::<T>()
        .map_err(|_| ApiError::BadRequest(format!("invalid value for {}: {}", name, raw)))
}

/// PNGレスポンスを組み立てる
fn png_response(bytes: Vec<u8>) -> Response {
    let mut response = Response::new(bytes.into());
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static("image/png"));
    response
}
