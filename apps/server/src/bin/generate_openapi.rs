//! # OpenAPI YAML 生成ツール
//!
//! Rust 型から OpenAPI 仕様を YAML 形式で標準出力に出力する。
//! 生成後、utoipa が自動登録する未使用コンポーネントスキーマを除去する。
//!
//! ## 使い方
//!
//! ```bash
//! cargo run --bin generate-openapi -p sample-api-server > openapi.yaml
//! ```

use sample_api_server::openapi::{ApiDoc, remove_unused_schemas};
use utoipa::OpenApi;

fn main() -> anyhow::Result<()> {
    let mut openapi = ApiDoc::openapi();
    remove_unused_schemas(&mut openapi)?;
    let yaml = openapi.to_yaml()?;
    print!("{yaml}");
    Ok(())
}
