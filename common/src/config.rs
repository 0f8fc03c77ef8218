//! 接続設定
//!
//! 解析エンドポイントのホストとタイムアウトのみを保持する。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 既定の解析サーバ
pub const DEFAULT_API_BASE_URL: &str = "https://objdetectserver-production.up.railway.app";

/// 解析エンドポイントのパス
pub const ANALYZE_PATH: &str = "/api/analyze";

/// ホストを上書きする環境変数名
pub const API_BASE_URL_ENV: &str = "OBJDETECT_API_BASE_URL";

const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub timeout_seconds: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl ClientConfig {
    /// 空でない場合のみホストを差し替える
    pub fn with_api_base_url(mut self, api_base_url: Option<&str>) -> Self {
        if let Some(url) = api_base_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api_base_url = url.to_string();
        }
        self
    }

    pub fn with_timeout_seconds(mut self, timeout_seconds: Option<u64>) -> Self {
        if let Some(secs) = timeout_seconds.filter(|s| *s > 0) {
            self.timeout_seconds = secs;
        }
        self
    }

    /// `{api_base_url}/api/analyze` を組み立てる
    pub fn endpoint_url(&self) -> Result<String> {
        let base = self.api_base_url.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(Error::Config("api_base_url is empty".into()));
        }
        if !(base.starts_with("https://") || base.starts_with("http://")) {
            return Err(Error::Config(format!(
                "api_base_url must start with http:// or https://: {}",
                base
            )));
        }
        Ok(format!("{}{}", base, ANALYZE_PATH))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let config = ClientConfig::default();
        assert_eq!(
            config.endpoint_url().unwrap(),
            "https://objdetectserver-production.up.railway.app/api/analyze"
        );
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_endpoint_trailing_slash() {
        let config = ClientConfig::default().with_api_base_url(Some("http://localhost:8080/"));
        assert_eq!(config.endpoint_url().unwrap(), "http://localhost:8080/api/analyze");
    }

    #[test]
    fn test_empty_override_is_ignored() {
        let config = ClientConfig::default().with_api_base_url(Some("  "));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);

        let config = ClientConfig::default().with_api_base_url(None);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ClientConfig {
            api_base_url: "ftp://example.com".into(),
            ..Default::default()
        };
        assert!(matches!(config.endpoint_url(), Err(Error::Config(_))));

        let config = ClientConfig {
            api_base_url: String::new(),
            ..Default::default()
        };
        assert!(matches!(config.endpoint_url(), Err(Error::Config(_))));
    }

    #[test]
    fn test_timeout_override() {
        let config = ClientConfig::default().with_timeout_seconds(Some(5));
        assert_eq!(config.timeout(), Duration::from_secs(5));

        // 0秒は無視
        let config = ClientConfig::default().with_timeout_seconds(Some(0));
        assert_eq!(config.timeout_seconds, 60);
    }

    #[test]
    fn test_serialize_camel_case() {
        let json = serde_json::to_string(&ClientConfig::default()).unwrap();
        assert!(json.contains("\"apiBaseUrl\""));
        assert!(json.contains("\"timeoutSeconds\":60"));
    }
}
