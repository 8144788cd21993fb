//! # サーバー設定
//!
//! 環境変数からサーバーの設定を読み込む。
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `SERVER_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `SERVER_PORT` | No | ポート番号（デフォルト: `3000`） |

use std::env;

use thiserror::Error;

/// デフォルトのバインドアドレス
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// デフォルトのポート番号
pub const DEFAULT_PORT: u16 = 3000;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("SERVER_PORT は有効なポート番号である必要があります: {0:?}")]
    InvalidPort(String),
}

/// サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(env::var("SERVER_HOST").ok(), env::var("SERVER_PORT").ok())
    }

    /// 未設定の値はデフォルトで補う
    fn from_values(host: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let port = match port {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    // テスト間で環境変数の競合を避けるため、from_values で検証する
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_未設定のときデフォルト値を使う() {
        let config = ServerConfig::from_values(None, None).unwrap();

        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn test_設定値を読み込む() {
        let config =
            ServerConfig::from_values(Some("127.0.0.1".to_string()), Some("8080".to_string()))
                .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_ポート番号が不正ならエラー() {
        let result = ServerConfig::from_values(None, Some("http".to_string()));

        assert_eq!(result, Err(ConfigError::InvalidPort("http".to_string())));
    }

    #[test]
    fn test_ポート番号が範囲外ならエラー() {
        let result = ServerConfig::from_values(None, Some("70000".to_string()));

        assert!(result.is_err());
    }
}
