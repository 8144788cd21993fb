//! # アプリケーション構築
//!
//! ルートレジストリへの登録と、横断的なレイヤー・ドキュメントの取り付けを担当する。
//! `main.rs` は設定読み込みとサーバー起動に集中する。

use axum::{Json, Router, routing::get};
use sample_api_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    handler::{create_user, list_users, login},
    openapi::ApiDoc,
    registry::{RegistryError, Route, RouteRegistry, tags},
};

/// OpenAPI ドキュメントの公開パス
pub const OPENAPI_PATH: &str = "/openapi.json";

/// 旧バージョンでの OpenAPI ドキュメントの公開パス
pub const LEGACY_OPENAPI_PATH: &str = "/spec.json";

/// ドキュメント UI のパス
pub const DOCS_PATH: &str = "/docs";

/// API ルートを登録したレジストリを返す
pub fn api_routes() -> Result<RouteRegistry, RegistryError> {
    RouteRegistry::new()
        .register(Route::post("/users", tags::USERS, create_user))?
        .register(Route::get("/users", tags::USERS, list_users))?
        .register(Route::post("/login", tags::AUTH, login))
}

/// ルーターを構築する
///
/// レイヤー順序は下に書いたものが外側:
///
/// 1. SetRequestIdLayer（最外）: UUID v7 の Request ID を付与（クライアント提供値を優先）
/// 2. TraceLayer: Request ID を含むスパンを作る
/// 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
/// 4. CorsLayer: 全オリジン・全メソッド・全ヘッダーを許可
pub fn build_app() -> Result<Router, RegistryError> {
    let routes = api_routes()?;
    tracing::info!(count = routes.len(), "API ルートを登録します");

    let app = routes
        .attach(Router::new())
        .route(OPENAPI_PATH, get(openapi_json))
        .route(LEGACY_OPENAPI_PATH, get(openapi_json))
        .merge(Scalar::with_url(DOCS_PATH, ApiDoc::openapi()))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7));

    Ok(app)
}

/// GET /openapi.json
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
