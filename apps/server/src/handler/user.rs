//! # ユーザー API ハンドラ
//!
//! ## エンドポイント
//!
//! - `POST /users` - ユーザー作成
//! - `GET /users` - ユーザー一覧
//!
//! どちらも永続化を行わない。作成は新しい ID を返すだけで、一覧は常に空を返す。
//! `bearerAuth` はドキュメント上の宣言のみで、検証は行わない。

use axum::{Json, http::StatusCode};
use sample_api_shared::{ApiResponse, ErrorResponse};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::ErrorMessage,
    extract::{ValidatedJson, ValidatedQuery},
};

// --- リクエスト型 ---

/// ユーザー作成リクエスト
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[schema(examples(
    json!({ "name": "John Doe", "email": "john.doe@example.com" }),
    json!({ "name": "Jessica Jones", "email": "jessica.jones@example.com" })
))]
pub struct CreateUserRequest {
    #[validate(length(min = 2, max = 100))]
    #[schema(min_length = 2, max_length = 100)]
    pub name:  String,
    #[validate(email)]
    #[schema(format = "email")]
    pub email: String,
}

/// ユーザー一覧クエリパラメータ
///
/// 受け付けるだけで、一覧には適用しない。
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersQuery {
    /// Page number for pagination
    #[serde(default = "default_page")]
    #[param(default = 1)]
    pub page:  i64,
    /// Number of users per page
    #[serde(default = "default_limit")]
    #[param(default = 10)]
    pub limit: i64,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    10
}

// --- レスポンス型 ---

/// ユーザー作成レスポンス
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateUserResponse {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: Uuid,
}

/// ユーザー一覧の要素
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserItem {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id:    Uuid,
    #[schema(example = "John Doe")]
    pub name:  String,
    #[schema(example = "john.doe@example.com", format = "email")]
    pub email: String,
}

// --- ハンドラ ---

/// POST /users
///
/// 新しい UUID v4 を払い出して 201 を返す。
/// 400 以外の失敗レスポンスは契約として宣言するのみで、このハンドラからは返らない。
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    summary = "Create user",
    description = "Register user on the platform",
    security(("bearerAuth" = [])),
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created successfully", body = CreateUserResponse),
        (status = 400, description = "Validation fails", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorMessage),
        (status = 409, description = "User already exists", body = ErrorMessage)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_user(
    ValidatedJson(_req): ValidatedJson<CreateUserRequest>,
) -> (StatusCode, Json<CreateUserResponse>) {
    let id = Uuid::new_v4();
    tracing::info!(user.id = %id, "ユーザー ID を払い出しました");

    (StatusCode::CREATED, Json(CreateUserResponse { id }))
}

/// GET /users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    summary = "Get all users",
    description = "Retrieve a list of all users",
    security(("bearerAuth" = [])),
    params(ListUsersQuery),
    responses(
        (status = 200, description = "A list of users", body = ApiResponse<Vec<UserItem>>),
        (status = 400, description = "Validation fails", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorMessage)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_users(
    ValidatedQuery(query): ValidatedQuery<ListUsersQuery>,
) -> Json<ApiResponse<Vec<UserItem>>> {
    tracing::debug!(page = query.page, limit = query.limit, "ページ指定は一覧に適用しない");

    Json(ApiResponse::new(Vec::new()))
}
