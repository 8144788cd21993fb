//! # 認証 API ハンドラ
//!
//! ## エンドポイント
//!
//! - `POST /login` - ログイン
//!
//! 固定のメールアドレスとパスワードの組だけを受け付け、プレースホルダのトークンを返す。
//! パスワードのハッシュ化やトークンの署名は行わない。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sample_api_shared::ErrorResponse;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::{ErrorMessage, invalid_credentials_response},
    extract::ValidatedJson,
};

/// ログインを受け付けるメールアドレス
pub const DEMO_EMAIL: &str = "teste@gmail.com";

/// ログインを受け付けるパスワード
pub const DEMO_PASSWORD: &str = "123456";

/// ログイン成功時に返すトークン
pub const PLACEHOLDER_TOKEN: &str = "jwt-token-placeholder";

// --- リクエスト/レスポンス型 ---

/// ログインリクエスト
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// User email
    #[validate(email)]
    #[schema(format = "email")]
    pub email:    String,
    /// User password
    pub password: String,
}

/// Successful login response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    #[schema(default = "Login successful")]
    pub message: String,
    /// JWT access token
    pub token:   String,
}

impl LoginResponse {
    fn placeholder() -> Self {
        Self {
            message: "Login successful".to_string(),
            token:   PLACEHOLDER_TOKEN.to_string(),
        }
    }
}

// --- ハンドラ ---

/// POST /login
///
/// 認証情報が一致しない場合は 401 を返す。比較は単純な文字列一致で、再試行の概念はない。
#[utoipa::path(
    post,
    path = "/login",
    tag = "Auth",
    summary = "User authentication",
    description = "Authenticate user into the system",
    request_body = LoginRequest,
    responses(
        (status = 201, description = "Successful login response", body = LoginResponse),
        (status = 400, description = "Validation fails", body = ErrorResponse),
        (status = 401, description = "Email or password incorrect", body = ErrorMessage)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn login(ValidatedJson(req): ValidatedJson<LoginRequest>) -> Response {
    if req.email == DEMO_EMAIL && req.password == DEMO_PASSWORD {
        tracing::info!("ログイン成功");
        return (StatusCode::CREATED, Json(LoginResponse::placeholder())).into_response();
    }

    tracing::warn!("ログイン失敗: 認証情報不一致");
    invalid_credentials_response()
}
