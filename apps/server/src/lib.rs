//! # Sample API サーバー
//!
//! ユーザー作成・ユーザー一覧・ログインの 3 ルートを OpenAPI ドキュメントと
//! ドキュメント UI 付きで公開する、説明用の最小構成 API。
//!
//! ハンドラはすべてスタブで、永続化・セッション・トークン検証は行わない。
//!
//! ## モジュール構成
//!
//! - [`handler`] - HTTP リクエストハンドラと入出力型
//! - [`extract`] - 検証付きエクストラクタ
//! - [`error`] - エラー型と HTTP レスポンスへの変換
//! - [`registry`] - ルートレジストリ
//! - [`openapi`] - OpenAPI 仕様定義
//! - [`app_builder`] - Router の組み立て
//! - [`config`] - 環境変数からの設定読み込み

pub mod app_builder;
pub mod config;
pub mod error;
pub mod extract;
pub mod handler;
pub mod openapi;
pub mod registry;
