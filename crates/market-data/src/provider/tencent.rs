//! Tencent batched index quotes, the secondary index source.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;

use super::http::fetch_text;
use super::sina::symbol_list;
use super::IndexSource;
use crate::config::FetchConfig;
use crate::models::{IndexBoard, IndexDescriptor};
use crate::parsers::{parse_index_payload, SourceTag};

const PROVIDER_ID: &str = "TENCENT";

pub struct TencentSource {
    client: Client,
    base_url: String,
}

impl TencentSource {
    pub fn new(config: &FetchConfig) -> Self {
        Self {
            client: config.build_client(),
            base_url: config.tencent_base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl IndexSource for TencentSource {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn priority(&self) -> u8 {
        2
    }

    async fn fetch_indices(&self, targets: &[IndexDescriptor]) -> IndexBoard {
        let symbols = symbol_list(targets);
        if symbols.is_empty() {
            return IndexBoard::new();
        }

        let url = format!("{}/q={}", self.base_url, symbols);
        let tag = SourceTag::Tencent;

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
    use super::*;
    use crate::models::live_indices;
    use rust_decimal_macros::dec;
    use wiremock::matchers::{method, path_regex};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn tilde_line(symbol: &str, name: &str, current: &str, prev: &str) -> String {
        let mut fields = vec!["0".to_string(); 40];
        fields[1] = name.to_string();
        fields[3] = current.to_string();
        fields[4] = prev.to_string();
        fields[6] = "1500000".to_string();
        format!("v_{}=\"{}\";", symbol, fields.join("~"))
    }

    #[tokio::test]
    async fn test_fetches_tilde_payload() {
        let server = MockServer::start().await;
        let body = tilde_line("sz399006", "创业板指", "2020", "2000");
        Mock::given(method("GET"))
            .and(path_regex(r"^/q="))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_bytes(encoding_rs::GBK.encode(&body).0.into_owned()),
            )
            .mount(&server)
            .await;

        let config = FetchConfig {
            tencent_base_url: server.uri(),
            ..FetchConfig::default()
        };
        let board = TencentSource::new(&config).fetch_indices(&live_indices()).await;

        let snapshot = &board["创业板指"];
        assert_eq!(snapshot.change_pct, dec!(1));
        assert_eq!(snapshot.volume, 1_500_000);
    }

    #[tokio::test]
    async fn test_undecodable_body_yields_empty_board() {
        let server = MockServer::start().await;
        // 0x81 starts a two-byte GBK sequence; 0x20 cannot end it.
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![b'v', 0x81, 0x20]))
            .mount(&server)
            .await;

        let config = FetchConfig {
            tencent_base_url: server.uri(),
            ..FetchConfig::default()
        };
        let board = TencentSource::new(&config).fetch_indices(&live_indices()).await;
        assert!(board.is_empty());
    }
}
