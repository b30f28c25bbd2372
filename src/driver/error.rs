//! # API Error Handling
//!
//! ハンドラのエラーをHTTPレスポンスへマッピングする

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use thiserror::Error;

/// APIエラー
///
/// ハンドラが返すエラー。バリアントがHTTPステータスコードに対応する。
#[derive(Debug, Error)]
pub enum ApiError {
    /// リクエスト不正（400）
    #[error("{0}")]
    BadRequest(String),
    /// リソースが存在しない（404）
    #[error("{0}")]
    NotFound(String),
    /// サーバー内部エラー（500）
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// APIハンドラの結果型
pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Internal(err) => {
                // 詳細はログにのみ残し、クライアントには一般的なメッセージを返す
                error!("Internal server error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}
