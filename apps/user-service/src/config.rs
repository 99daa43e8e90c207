//! # User Service 設定
//!
//! 環境変数から User Service サーバーの設定を読み込む。
//! `.env` は `main` で `dotenvy` により読み込み済みであることを前提とする。

use std::env;

use thiserror::Error;

/// 設定の読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 必須の環境変数が未設定
    #[error("{0} が設定されていません")]
    Missing(&'static str),

    /// 値の形式が不正
    #[error("{name} の値が不正です: {value:?}")]
    Invalid {
        name:  &'static str,
        value: String,
    },
}

/// User Service サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// バインド先のホスト名または IP アドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
    /// データベース接続 URL
    pub database_url: String,
    /// 接続プールの最大接続数
    pub database_max_connections: u32,
    /// 起動時にバンドルされたスキーマを適用するか
    pub run_migrations: bool,
}

impl AppConfig {
    pub const DEFAULT_HOST: &'static str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 8000;
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の参照関数から設定を読み込む
    ///
    /// テストでプロセスの環境変数を書き換えずに済むよう分離している。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        Ok(Self {
            host: lookup("APP_HOST").unwrap_or_else(|| Self::DEFAULT_HOST.to_string()),
            port: parse_or("APP_PORT", lookup("APP_PORT"), Self::DEFAULT_PORT)?,
            database_url,
            database_max_connections: parse_or(
                "DATABASE_MAX_CONNECTIONS",
                lookup("DATABASE_MAX_CONNECTIONS"),
                Self::DEFAULT_MAX_CONNECTIONS,
            )?,
            run_migrations: parse_bool("RUN_MIGRATIONS", lookup("RUN_MIGRATIONS"))?,
        })
    }

    /// `TcpListener::bind` に渡すバインド先
    ///
    /// ホスト名はバインド時に名前解決される。
    pub fn bind_addr(&self) -> (&str, u16) {
        (&self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid { name, value: v }),
    }
}

fn parse_bool(name: &'static str, value: Option<String>) -> Result<bool, ConfigError> {
    let Some(v) = value else {
        return Ok(false);
    };
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::Invalid { name, value: v }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_未設定の項目にはデフォルト値が使われる() {
        let config = AppConfig::from_lookup(lookup_from(&[(
            "DATABASE_URL",
            "postgres://localhost/usermgmt",
        )]))
        .unwrap();

        assert_eq!(
            config,
            AppConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
                database_url: "postgres://localhost/usermgmt".to_string(),
                database_max_connections: 10,
                run_migrations: false,
            }
        );
    }

    #[test]
    fn test_環境変数の値が反映される() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/usermgmt"),
            ("APP_HOST", "127.0.0.1"),
            ("APP_PORT", "9000"),
            ("DATABASE_MAX_CONNECTIONS", "4"),
            ("RUN_MIGRATIONS", "true"),
        ]))
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert_eq!(config.database_max_connections, 4);
        assert!(config.run_migrations);
        assert_eq!(config.bind_addr(), ("127.0.0.1", 9000));
    }

    #[test]
    fn test_ホスト名はそのままバインド先になる() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/usermgmt"),
            ("APP_HOST", "localhost"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr(), ("localhost", 8000));
    }

    #[test]
    fn test_database_urlが未設定ならエラーになる() {
        let err = AppConfig::from_lookup(lookup_from(&[])).unwrap_err();

        assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
    }

    #[rstest]
    #[case("APP_PORT", "abc")]
    #[case("APP_PORT", "70000")]
    #[case("DATABASE_MAX_CONNECTIONS", "-1")]
    #[case("RUN_MIGRATIONS", "maybe")]
    fn test_不正な値はinvalidエラーになる(#[case] name: &str, #[case] value: &str) {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/usermgmt"),
            (name, value),
        ]))
        .unwrap_err();

        assert!(matches!(err, ConfigError::Invalid { name: n, .. } if n == name));
    }
}
