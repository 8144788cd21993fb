//! # OpenAPI 仕様定義
//!
//! utoipa を使用して OpenAPI 仕様を Rust の型から自動生成する。
//! `ApiDoc::openapi()` で OpenAPI ドキュメントを取得できる。

use std::collections::HashSet;

use utoipa::{
    Modify,
    OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

use crate::handler::{auth, user};

/// セキュリティスキーム名
pub const BEARER_AUTH: &str = "bearerAuth";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sample API",
        version = "1.0.0",
        description = "A sample API to illustrate OpenAPI concepts"
    ),
    paths(
        // users
        user::create_user,
        user::list_users,
        // auth
        auth::login,
    ),
    components(schemas(
        sample_api_shared::ErrorResponse,
        crate::error::ErrorMessage,
    )),
    tags(
        (name = "Users", description = "ユーザー管理"),
        (name = "Auth", description = "認証"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// セキュリティスキーム定義
///
/// Bearer トークン認証を宣言する。ハンドラ・ミドルウェアのどちらも検証は行わない。
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_default();
        components.add_security_scheme(
            BEARER_AUTH,
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// どこからも `$ref` されていないコンポーネントスキーマを除去する
///
/// `body = ApiResponse<Vec<UserItem>>` のようなジェネリック型は inline 展開されるため、
/// 型パラメータの standalone スキーマが参照されないまま残ることがある。
pub fn remove_unused_schemas(openapi: &mut utoipa::openapi::OpenApi) -> serde_json::Result<()> {
    let json = serde_json::to_string(openapi)?;

    // "$ref":"#/components/schemas/SchemaName"
    let prefix = "#/components/schemas/";
    let referenced: HashSet<&str> = json
        .match_indices(prefix)
        .filter_map(|(start, _)| {
            let rest = &json[start + prefix.len()..];
            rest.find('"').map(|end| &rest[..end])
        })
        .collect();

    if let Some(components) = &mut openapi.components {
        components
            .schemas
            .retain(|name, _| referenced.contains(name.as_str()));
    }

    Ok(())
}
