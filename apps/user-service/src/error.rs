//! # User Service エラー定義
//!
//! User Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! レスポンスボディは常に `{"detail": "..."}`。
//! 500 の `detail` にはインフラエラーの種別メッセージのみを含め、
//! `SpanTrace` はログにだけ出力する。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use usermgmt_domain::DomainError;
use usermgmt_infra::InfraError;
use usermgmt_shared::ErrorResponse;

/// User Service で発生するエラー
#[derive(Debug, Error)]
pub enum CoreError {
    /// リソースが見つからない
    #[error("not found: {0}")]
    NotFound(String),

    /// 不正なリクエスト（バリデーションエラー、リクエストの形式不正）
    #[error("bad request: {0}")]
    BadRequest(String),

    /// 一意制約に反する登録
    ///
    /// ステータスは 409 ではなく 400 を返す。
    #[error("conflict: {0}")]
    Conflict(String),

    /// データベースエラー
    #[error("{context}: {source}")]
    Database {
        /// 操作の要約（例: "Error fetching users"）
        context: &'static str,
        #[source]
        source:  InfraError,
    },
}

impl CoreError {
    /// `map_err` に渡す変換関数を返す
    ///
    /// ```ignore
    /// repo.find_all(page).await.map_err(CoreError::database("Error fetching users"))?;
    /// ```
    pub fn database(context: &'static str) -> impl FnOnce(InfraError) -> Self {
        move |source| Self::Database { context, source }
    }

    /// HTTP ステータスコード
    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::BadRequest(_) | CoreError::Conflict(_) => StatusCode::BAD_REQUEST,
            CoreError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => CoreError::BadRequest(msg),
            DomainError::NotFound { entity_type, id } => {
                CoreError::NotFound(format!("{entity_type} with id {id} not found"))
            }
            DomainError::Conflict(msg) => CoreError::Conflict(msg),
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            CoreError::NotFound(msg) | CoreError::BadRequest(msg) | CoreError::Conflict(msg) => {
                msg.clone()
            }
            CoreError::Database { context, source } => {
                tracing::error!(
                    error = ?source.kind(),
                    span_trace = %source.span_trace(),
                    "{context}"
                );
                self.to_string()
            }
        };

        (status, Json(ErrorResponse::new(detail))).into_response()
    }
}
