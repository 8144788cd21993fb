//! # ルートレジストリ
//!
//! メソッド・パス・ドキュメント上のカテゴリ（タグ）とハンドラの組を順に登録し、
//! 共通の [`Router`] に取り付ける。
//!
//! CORS や Request ID などの横断的なレイヤーは取り付け先の Router 側で適用するため、
//! 登録したルートはすべて同じ設定を共有する。
//!
//! 同じパスでもメソッドが異なれば登録できる（`GET /users` と `POST /users`）。
//! メソッドとパスの組が重複した場合は [`RegistryError::Duplicate`] を返す。

use axum::{
    Router,
    handler::Handler,
    http::Method,
    routing::{self, MethodRouter},
};
use thiserror::Error;

/// ドキュメント上のカテゴリ名
///
/// `#[utoipa::path(tag = ...)]` と同じ値を使う。
pub mod tags {
    pub const USERS: &str = "Users";
    pub const AUTH: &str = "Auth";
}

/// ルート登録エラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("ルートが重複しています: {method} {path}")]
    Duplicate { method: Method, path: &'static str },
}

/// 登録単位となる 1 ルート
pub struct Route<S = ()> {
    method:  Method,
    path:    &'static str,
    tag:     &'static str,
    handler: MethodRouter<S>,
}

impl<S> Route<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// `GET` ルート
    pub fn get<H, T>(path: &'static str, tag: &'static str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        Self {
            method: Method::GET,
            path,
            tag,
            handler: routing::get(handler),
        }
    }

    /// `POST` ルート
    pub fn post<H, T>(path: &'static str, tag: &'static str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        Self {
            method: Method::POST,
            path,
            tag,
            handler: routing::post(handler),
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }
}

/// ルートの登録順を保持するレジストリ
pub struct RouteRegistry<S = ()> {
    routes: Vec<Route<S>>,
}

impl<S> Default for RouteRegistry<S> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<S> RouteRegistry<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// ルートを末尾に登録する
    pub fn register(mut self, route: Route<S>) -> Result<Self, RegistryError> {
        let duplicated = self
            .routes
            .iter()
            .any(|r| r.method == route.method && r.path == route.path);
        if duplicated {
            return Err(RegistryError::Duplicate {
                method: route.method,
                path:   route.path,
            });
        }

        self.routes.push(route);
        Ok(self)
    }

    /// 登録済みルートを登録順に返す
    pub fn routes(&self) -> impl Iterator<Item = &Route<S>> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// 登録済みルートを Router に取り付ける
    pub fn attach(self, router: Router<S>) -> Router<S> {
        self.routes.into_iter().fold(router, |router, route| {
            tracing::debug!(
                method = %route.method,
                path = route.path,
                tag = route.tag,
                "ルートを登録しました"
            );
            router.route(route.path, route.handler)
        })
    }
}
