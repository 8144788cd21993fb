//! # エラーハンドリング
//!
//! HTTP API のエラー定義と、axum レスポンスへの変換。
//!
//! - リクエストの形式不正（JSON 不正、必須フィールド欠落、制約違反、クエリ不正）は
//!   [`ValidationRejection`] としてハンドラに到達する前に拒否し、
//!   RFC 9457 形式の [`ErrorResponse`] を返す
//! - JSON の形と無関係な拒否（Content-Type 不一致、ボディサイズ超過）は
//!   axum の判定したステータス（415, 413）で返す
//! - ハンドラが返すエラーは `{ "error": "..." }` 形式の [`ErrorMessage`]

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sample_api_shared::ErrorResponse;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// `{ "error": "..." }` 形式のエラーボディ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorMessage {
    #[schema(example = "Invalid credentials")]
    pub error: String,
}

impl ErrorMessage {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// リクエスト抽出時の拒否理由
///
/// [`ValidatedJson`](crate::extract::ValidatedJson) /
/// [`ValidatedQuery`](crate::extract::ValidatedQuery) が返す。
#[derive(Debug, Error)]
pub enum ValidationRejection {
    /// ボディが JSON として読めない、または型が合わない
    #[error(transparent)]
    Json(#[from] JsonRejection),
    /// クエリ文字列が型に合わない
    #[error(transparent)]
    Query(#[from] QueryRejection),
    /// 宣言された制約（長さ、メール形式など）に違反
    #[error("{}", describe_validation_errors(.0))]
    Invalid(#[from] ValidationErrors),
}

impl IntoResponse for ValidationRejection {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "リクエストを拒否しました");

        match self {
            ValidationRejection::Json(JsonRejection::JsonDataError(e)) => {
                validation_error_response(&e.body_text())
            }
            ValidationRejection::Json(JsonRejection::JsonSyntaxError(e)) => {
                validation_error_response(&e.body_text())
            }
            // Content-Type 不一致やボディ読み込み失敗（サイズ超過の 413 など）は
            // JSON の形ではないため、axum が決めたステータスをそのまま使う
            ValidationRejection::Json(e) => problem_response(e.status(), &e.body_text()),
            ValidationRejection::Query(e) => validation_error_response(&e.body_text()),
            ValidationRejection::Invalid(ref errors) => {
                validation_error_response(&describe_validation_errors(errors))
            }
        }
    }
}

/// 制約違反をフィールド名順に `field: message` 形式で連結する
///
/// メッセージ未指定の制約はバリデーションコード（`length`, `email` 等）を使う。
pub fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<(String, String)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let reasons = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map_or_else(|| e.code.to_string(), ToString::to_string)
                })
                .collect::<Vec<_>>()
                .join(", ");
            (field.to_string(), reasons)
        })
        .collect();
    fields.sort();

    fields
        .into_iter()
        .map(|(field, reasons)| format!("{field}: {reasons}"))
        .collect::<Vec<_>>()
        .join("; ")
}

// --- レスポンスヘルパー ---

/// バリデーションエラーレスポンス
pub fn validation_error_response(detail: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::validation_error(detail)),
    )
        .into_response()
}

/// ステータスコードから組み立てる Problem Details レスポンス
///
/// `type` の末尾と `title` はステータスの標準理由句から作る
/// （例: 413 → `payload-too-large` / `Payload Too Large`）。
pub fn problem_response(status: StatusCode, detail: &str) -> Response {
    let title = status.canonical_reason().unwrap_or("Error");
    let error_type = title.to_ascii_lowercase().replace(' ', "-");
    (
        status,
        Json(ErrorResponse::new(&error_type, title, status.as_u16(), detail)),
    )
        .into_response()
}

/// 認証失敗レスポンス
pub fn invalid_credentials_response() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorMessage::new("Invalid credentials")),
    )
        .into_response()
}
