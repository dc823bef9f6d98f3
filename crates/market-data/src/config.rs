//! Fetch configuration passed explicitly to every source at construction.

use std::time::Duration;

use log::warn;
use reqwest::header::HeaderValue;
use reqwest::Client;
use serde::Deserialize;

/// Upper bound for a single upstream request.
pub const MAX_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const DEFAULT_TIMEOUT_MS: u64 = 5_000;
const DEFAULT_HISTORY_WINDOW: usize = 5;

/// Browser identification sent with every request; some upstreams reject bare clients.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Settings shared by the upstream sources.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FetchConfig {
    /// Per-request timeout in milliseconds, clamped to [`MAX_REQUEST_TIMEOUT`]
    pub timeout_ms: u64,
    pub user_agent: String,
    pub sina_base_url: String,
    pub tencent_base_url: String,
    /// Fund detail pages, `{base}/{code}.html`
    pub fund_page_base_url: String,
    /// Net value history API, `{base}/f10/lsjz`
    pub fund_api_base_url: String,
    /// Leaderboard handler, `{base}/data/rankhandler.aspx`
    pub rank_base_url: String,
    /// Number of recent quotes fetched for estimation
    pub history_window: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            sina_base_url: "http://hq.sinajs.cn".to_string(),
            tencent_base_url: "http://qt.gtimg.cn".to_string(),
            fund_page_base_url: "http://fund.eastmoney.com".to_string(),
            fund_api_base_url: "http://api.fund.eastmoney.com".to_string(),
            rank_base_url: "http://fund.eastmoney.com".to_string(),
            history_window: DEFAULT_HISTORY_WINDOW,
        }
    }
}

impl FetchConfig {
    /// Defaults overridden by `FUNDPULSE_*` environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let var = |key: &str, fallback: String| std::env::var(key).unwrap_or(fallback);

        Self {
            timeout_ms: std::env::var("FUNDPULSE_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_ms),
            user_agent: var("FUNDPULSE_USER_AGENT", defaults.user_agent),
            sina_base_url: var("FUNDPULSE_SINA_URL", defaults.sina_base_url),
            tencent_base_url: var("FUNDPULSE_TENCENT_URL", defaults.tencent_base_url),
            fund_page_base_url: var("FUNDPULSE_FUND_PAGE_URL", defaults.fund_page_base_url),
            fund_api_base_url: var("FUNDPULSE_FUND_API_URL", defaults.fund_api_base_url),
            rank_base_url: var("FUNDPULSE_RANK_URL", defaults.rank_base_url),
            history_window: std::env::var("FUNDPULSE_HISTORY_WINDOW")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.history_window),
        }
    }

    /// Effective per-request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms).min(MAX_REQUEST_TIMEOUT)
    }

    /// The configured user agent, or [`DEFAULT_USER_AGENT`] when it is not a
    /// valid header value.
    pub fn user_agent_header(&self) -> HeaderValue {
        HeaderValue::from_str(&self.user_agent).unwrap_or_else(|_| {
            warn!(
                "Invalid user agent {:?}, using the default",
                self.user_agent
            );
            HeaderValue::from_static(DEFAULT_USER_AGENT)
        })
    }

    /// Builds an HTTP client carrying the timeout and browser identification.
    ///
    /// The timeout is applied on every path.
    pub fn build_client(&self) -> Client {
        Client::builder()
            .timeout(self.timeout())
            .user_agent(self.user_agent_header())
            .build()
            .or_else(|e| {
                warn!("HTTP client with user agent failed to build: {}", e);
                Client::builder().timeout(self.timeout()).build()
            })
            .unwrap_or_else(|e| {
                warn!("HTTP client failed to build: {}", e);
                Client::new()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_is_clamped() {
        let config = FetchConfig {
            timeout_ms: 60_000,
            ..FetchConfig::default()
        };
        assert_eq!(config.timeout(), MAX_REQUEST_TIMEOUT);
    }

    #[test]
    fn test_default_timeout_within_bound() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.history_window, 5);
    }

    #[test]
    fn test_invalid_user_agent_falls_back_to_default() {
        let config = FetchConfig {
            user_agent: "bad\nagent".to_string(),
            ..FetchConfig::default()
        };
        assert_eq!(config.user_agent_header(), DEFAULT_USER_AGENT);

        let config = FetchConfig {
            user_agent: "fundpulse/1.0".to_string(),
            ..FetchConfig::default()
        };
        assert_eq!(config.user_agent_header(), "fundpulse/1.0");
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: FetchConfig =
            serde_json::from_str(r#"{"timeoutMs": 2000, "sinaBaseUrl": "http://localhost:1"}"#)
                .unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(2));
        assert_eq!(config.sina_base_url, "http://localhost:1");
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }
}
