use objdetect_common::{ClientConfig, API_BASE_URL_ENV};

/// 起動時の接続設定（ファイルには保存しない）
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub client: ClientConfig,
}

impl Config {
    /// 環境変数 `OBJDETECT_API_BASE_URL` を読む
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(API_BASE_URL_ENV).ok().as_deref())
    }

    pub fn from_env_value(api_base_url: Option<&str>) -> Self {
        Self {
            client: ClientConfig::default().with_api_base_url(api_base_url),
        }
    }

    /// 実際に使う接続設定
    ///
    /// 優先順位: コマンドライン引数 > 環境変数 > 既定値
    pub fn resolve(&self, api_base_url: Option<&str>, timeout_seconds: Option<u64>) -> ClientConfig {
        self.client
            .clone()
            .with_api_base_url(api_base_url)
            .with_timeout_seconds(timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use objdetect_common::DEFAULT_API_BASE_URL;

    #[test]
    fn test_defaults_without_env() {
        let config = Config::from_env_value(None);
        assert_eq!(config.client.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.client.timeout_seconds, 60);
    }

    #[test]
    fn test_env_overrides_default() {
        let config = Config::from_env_value(Some("http://localhost:8000"));
        assert_eq!(config.resolve(None, None).api_base_url, "http://localhost:8000");

        // 空の環境変数は無視
        let config = Config::from_env_value(Some(""));
        assert_eq!(config.client.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_resolve_cli_override_wins() {
        let config = Config::from_env_value(Some("http://localhost:8000"));
        let client = config.resolve(Some("http://127.0.0.1:4000"), Some(3));
        assert_eq!(client.api_base_url, "http://127.0.0.1:4000");
        assert_eq!(client.timeout_seconds, 3);
    }
}
