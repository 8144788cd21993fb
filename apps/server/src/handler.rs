//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数と、その入出力型を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置し、親モジュールで re-export する
//! - 入出力型は `ToSchema` / `IntoParams` を導出し、`#[utoipa::path]` で契約を宣言する
//! - 入力の検証は [`crate::extract`] のエクストラクタが担い、ハンドラは検証済みの値だけを扱う
//!
//! ## ハンドラ一覧
//!
//! - `user`: ユーザー作成、ユーザー一覧
//! - `auth`: ログイン

pub mod auth;
pub mod user;

pub use auth::login;
pub use user::{create_user, list_users};
