//! # Sample API サーバー
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `SERVER_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `SERVER_PORT` | No | ポート番号（デフォルト: `3000`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログレベル（デフォルト: `info,sample_api=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p sample-api-server
//! ```
//!
//! 起動後、`/docs` でドキュメント UI、`/openapi.json` で OpenAPI ドキュメントを参照できる。

use sample_api_server::{
    app_builder::{DOCS_PATH, OPENAPI_PATH, build_app},
    config::ServerConfig,
};
use sample_api_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// サーバーのエントリーポイント
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. 設定の読み込み
/// 4. ルーターの構築
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    init_tracing(TracingConfig::from_env("sample-api-server"));
    let _tracing_guard = tracing::info_span!("app", service = "sample-api-server").entered();

    let config = ServerConfig::from_env()?;
    tracing::info!("サーバーを起動します: {}:{}", config.host, config.port);

    let app = build_app()?;

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    let addr = listener.local_addr()?;
    tracing::info!("サーバーが起動しました: {}", addr);
    tracing::info!(
        "ドキュメント: http://{addr}{DOCS_PATH} / OpenAPI: http://{addr}{OPENAPI_PATH}"
    );

    axum::serve(listener, app).await?;

    Ok(())
}
