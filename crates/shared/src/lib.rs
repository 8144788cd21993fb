//! # Sample API 共有ユーティリティ
//!
//! このクレートは、Sample API のアプリケーション群で使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なデータ構造・ユーティリティのみを配置
//! - axum には依存しない（`IntoResponse` 変換は各アプリの責務）
//! - OpenAPI スキーマ（`openapi`）とトレーシング初期化（`observability`）は feature で切り替える

pub mod api_response;
pub mod error_response;
pub mod observability;

pub use api_response::ApiResponse;
pub use error_response::ErrorResponse;
