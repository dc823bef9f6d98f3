//! Eastmoney fund pages: identity, net value history and leaderboards.

use async_trait::async_trait;
use chrono::{Local, Utc};
use log::debug;
use reqwest::header::REFERER;
use reqwest::Client;

use super::http::fetch_text;
use super::FundDetailSource;
use crate::config::FetchConfig;
use crate::errors::MarketDataError;
use crate::models::{InstrumentIdentity, QuoteSnapshot, RankEntry, RankKind};
use crate::parsers::{eastmoney, SourceTag};

const PROVIDER_ID: &str = "EASTMONEY";

const HISTORY_REFERER: &str = "http://fundf10.eastmoney.com/";
const RANK_REFERER: &str = "http://fund.eastmoney.com/data/fundranking.html";

/// Rows requested per leaderboard page; the local ranking keeps the top ten.
const RANK_PAGE_SIZE: &str = "20";

pub struct EastmoneySource {
    client: Client,
    page_base_url: String,
    api_base_url: String,
    rank_base_url: String,
}

impl EastmoneySource {
    pub fn new(config: &FetchConfig) -> Self {
        Self {
            client: config.build_client(),
            page_base_url: config.fund_page_base_url.trim_end_matches('/').to_string(),
            api_base_url: config.fund_api_base_url.trim_end_matches('/').to_string(),
            rank_base_url: config.rank_base_url.trim_end_matches('/').to_string(),
        }
    }
}

/// Cache-busting timestamp the endpoints expect as `_`.
fn cache_buster() -> String {
    Utc::now().timestamp_millis().to_string()
}

#[async_trait]
impl FundDetailSource for EastmoneySource {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_identity(&self, code: &str) -> Result<Option<InstrumentIdentity>, MarketDataError> {
        let url = format!("{}/{}.html", self.page_base_url, code);
        let tag = SourceTag::EastmoneyProfile;

        let html = fetch_text(PROVIDER_ID, self.client.get(&url), tag.charset()).await?;
        let identity = eastmoney::parse_profile(&html, code);
        if identity.is_none() {
            debug!("{}: no fund name on page for {}", PROVIDER_ID, code);
        }
        Ok(identity)
    }

    async fn fetch_history(&self, code: &str, days: usize) -> Result<Vec<QuoteSnapshot>, MarketDataError> {
        if days == 0 {
            return Ok(Vec::new());
        }

        let url = format!("{}/f10/lsjz", self.api_base_url);
        let page_size = days.to_string();
        let request = self
            .client
            .get(&url)
            .header(REFERER, HISTORY_REFERER)
            .query(&[
                ("fundCode", code),
                ("pageIndex", "1"),
                ("pageSize", page_size.as_str()),
                ("_", cache_buster().as_str()),
            ]);

        let payload = fetch_text(PROVIDER_ID, request, SourceTag::EastmoneyHistory.charset()).await?;
        eastmoney::parse_history(&payload, code)
    }

    async fn fetch_rank(&self, kind: RankKind) -> Result<Vec<RankEntry>, MarketDataError> {
        let url = format!("{}/data/rankhandler.aspx", self.rank_base_url);
        let today = Local::now().format("%Y-%m-%d").to_string();
        let request = self
            .client
            .get(&url)
            .header(REFERER, RANK_REFERER)
            .query(&[
                ("op", "ph"),
                ("dt", "kf"),
                ("ft", "all"),
                ("rs", ""),
                ("gs", "0"),
                ("sc", kind.sort_column()),
                ("st", kind.sort_direction()),
                ("sd", today.as_str()),
                ("ed", today.as_str()),
                ("qdii", ""),
                ("tabSubtype", ",,"),
                ("pi", "1"),
                ("pn", RANK_PAGE_SIZE),
                ("dx", "1"),
                ("_", cache_buster().as_str()),
            ]);

        let payload = fetch_text(PROVIDER_ID, request, SourceTag::EastmoneyRank.charset()).await?;
        eastmoney::parse_rank(&payload)
    }
}
