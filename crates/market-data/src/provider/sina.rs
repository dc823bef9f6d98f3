//! Sina batched index quotes, the primary index source.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;

use super::http::fetch_text;
use super::IndexSource;
use crate::config::FetchConfig;
use crate::models::{IndexBoard, IndexDescriptor};
use crate::parsers::{parse_index_payload, SourceTag};

const PROVIDER_ID: &str = "SINA";

pub struct SinaSource {
    client: Client,
    base_url: String,
}

impl SinaSource {
    pub fn new(config: &FetchConfig) -> Self {
        Self {
            client: config.build_client(),
            base_url: config.sina_base_url.trim_end_matches('/').to_string(),
        }
    }
}

/// Comma-joined quote symbols of the targets that have one.
pub(crate) fn symbol_list(targets: &[IndexDescriptor]) -> String {
    targets
        .iter()
        .filter_map(|d| d.quote_symbol)
        .collect::<Vec<_>>()
        .join(",")
}

#[async_trait]
impl IndexSource for SinaSource {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn priority(&self) -> u8 {
        1
    }

    async fn fetch_indices(&self, targets: &[IndexDescriptor]) -> IndexBoard {
        let symbols = symbol_list(targets);
        if symbols.is_empty() {
            return IndexBoard::new();
        }

        let url = format!("{}/list={}", self.base_url, symbols);
        let tag = SourceTag::Sina;

        match fetch_text(PROVIDER_ID, self.client.get(&url), tag.charset()).await {
            Ok(payload) => {
                let board = parse_index_payload(tag, &payload, targets);
                debug!("{}: parsed {} indices", PROVIDER_ID, board.len());
                board
            }
            Err(e) => {
                warn!("{}: index fetch failed: {}", PROVIDER_ID, e);
                IndexBoard::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::models::live_indices;
    use rust_decimal_macros::dec;
    use wiremock::matchers::{header, method, path_regex};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> FetchConfig {
        FetchConfig {
            sina_base_url: server.uri(),
            timeout_ms: 200,
            ..FetchConfig::default()
        }
    }

    fn gbk(text: &str) -> Vec<u8> {
        encoding_rs::GBK.encode(text).0.into_owned()
    }

    #[test]
    fn test_symbol_list_skips_uncovered_indices() {
        let list = symbol_list(&crate::models::KNOWN_INDICES);
        assert!(list.starts_with("sh000001,sz399001,sz399006"));
        assert_eq!(list.split(',').count(), 8);
    }

    #[tokio::test]
    async fn test_fetches_and_decodes_gbk() {
        let server = MockServer::start().await;
        let body = concat!(
            "var hq_str_sh000001=\"上证指数,3290,3200,3232,3240,3190\";\n",
            "var hq_str_sz399001=\"10100,10000,10050,10120,9990\";\n",
        );
        Mock::given(method("GET"))
            .and(path_regex(r"^/list="))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(gbk(body)))
            .expect(1)
            .mount(&server)
            .await;

        let source = SinaSource::new(&config_for(&server));
        let board = source.fetch_indices(&live_indices()).await;

        assert_eq!(board.len(), 2);
        assert_eq!(board["上证指数"].change_pct, dec!(1));
        assert_eq!(board["深证成指"].price, dec!(10050));
    }

    #[tokio::test]
    async fn test_http_error_yields_empty_board() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let source = SinaSource::new(&config_for(&server));
        assert!(source.fetch_indices(&live_indices()).await.is_empty());
    }

    #[tokio::test]
    async fn test_timeout_yields_empty_board() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_bytes(gbk("var hq_str_sh000001=\"3290,3200,3232,3240,3190\";"))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let source = SinaSource::new(&config_for(&server));
        assert!(source.fetch_indices(&live_indices()).await.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_user_agent_keeps_timeout_and_default_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("user-agent", crate::config::DEFAULT_USER_AGENT))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_bytes(gbk("var hq_str_sh000001=\"3290,3200,3232,3240,3190\";"))
                    .set_delay(Duration::from_secs(3)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let config = FetchConfig {
            user_agent: "bad\nagent".to_string(),
            ..config_for(&server)
        };
        let source = SinaSource::new(&config);

        let started = std::time::Instant::now();
        let board = source.fetch_indices(&live_indices()).await;

        assert!(board.is_empty());
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_no_request_without_symbols() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let source = SinaSource::new(&config_for(&server));
        let overseas: Vec<_> = crate::models::KNOWN_INDICES
            .iter()
            .filter(|d| d.quote_symbol.is_none())
            .copied()
            .collect();
        assert!(source.fetch_indices(&overseas).await.is_empty());
    }
}
