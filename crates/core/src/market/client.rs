//! Fund Data Client - Facade for the market-data crate.
//!
//! This is the single entry point the presentation layer talks to. It owns the
//! index source chain and the fund detail source and turns every acquisition
//! failure into an absent value:
//!
//! | operation                 | on failure            |
//! |---------------------------|-----------------------|
//! | `get_instrument_identity` | `None`                |
//! | `get_latest_quote`        | `None`                |
//! | `get_quote_history`       | empty list            |
//! | `get_indices`             | synthetic index board |
//! | `get_rank`                | empty list            |
//!
//! The client holds no caches and no mutable state, so one instance can be
//! shared behind an `Arc` and called concurrently.

use std::sync::Arc;

use futures::future::join_all;
use log::{debug, warn};
use rust_decimal::Decimal;

use fundpulse_market_data::{
    ranked, reference_sentiment, EastmoneySource, FetchConfig, FundDetailSource, IndexBoard,
    IndexSourceChain, InstrumentIdentity, QuoteSnapshot, RankEntry, RankKind, SentimentSnapshot,
};

use crate::estimation::{self, EstimateInput, ESTIMATE_WINDOW};
use crate::market::model::FundOverview;

pub struct FundDataClient {
    indices: IndexSourceChain,
    details: Arc<dyn FundDetailSource>,
    history_window: usize,
}

impl FundDataClient {
    /// Builds the default sources (Sina, Tencent, reserved, Eastmoney) from one configuration.
    pub fn new(config: &FetchConfig) -> Self {
        Self::with_sources(
            IndexSourceChain::from_config(config),
            Arc::new(EastmoneySource::new(config)),
            config.history_window,
        )
    }

    pub fn with_sources(
        indices: IndexSourceChain,
        details: Arc<dyn FundDetailSource>,
        history_window: usize,
    ) -> Self {
        Self {
            indices,
            details,
            history_window,
        }
    }

    /// Name and category of a fund. `None` if the fund is unknown or the source failed.
    pub async fn get_instrument_identity(&self, code: &str) -> Option<InstrumentIdentity> {
        match self.details.fetch_identity(code).await {
            Ok(identity) => identity,
            Err(e) => {
                warn!("{}: identity lookup for {} failed: {}", self.details.id(), code, e);
                None
            }
        }
    }

    /// Most recent net value publication of a fund.
    pub async fn get_latest_quote(&self, code: &str) -> Option<QuoteSnapshot> {
        self.get_quote_history(code, 1).await.pop()
    }

    /// Up to `days` recent publications, oldest first.
    pub async fn get_quote_history(&self, code: &str, days: usize) -> Vec<QuoteSnapshot> {
        match self.details.fetch_history(code, days).await {
            Ok(history) => history,
            Err(e) => {
                warn!("{}: history lookup for {} failed: {}", self.details.id(), code, e);
                Vec::new()
            }
        }
    }

    /// Current index board. Never empty.
    pub async fn get_indices(&self) -> IndexBoard {
        self.indices.get_indices().await
    }

    /// Top ten of a leaderboard. Empty when the leaderboard is unavailable.
    pub async fn get_rank(&self, kind: RankKind) -> Vec<RankEntry> {
        ranked(self.details.as_ref(), kind).await
    }

    pub async fn get_sentiment(&self) -> SentimentSnapshot {
        reference_sentiment()
    }

    /// Identity and latest quote for each code, in input order.
    ///
    /// Codes where either lookup comes back empty are left out.
    pub async fn get_fund_overviews(&self, codes: &[String]) -> Vec<FundOverview> {
        let lookups = codes.iter().map(|code| async move {
            let (identity, quote) = futures::join!(
                self.get_instrument_identity(code),
                self.get_latest_quote(code)
            );
            match (identity, quote) {
                (Some(identity), Some(quote)) => Some(FundOverview { identity, quote }),
                _ => {
                    debug!("Skipping {}: identity or quote unavailable", code);
                    None
                }
            }
        });

        join_all(lookups).await.into_iter().flatten().collect()
    }

    /// Estimated return for today, in percent, for one fund.
    pub async fn estimate_profit(&self, code: &str) -> Decimal {
        let (indices, input) = futures::join!(self.get_indices(), self.estimate_input(code));
        estimation::estimate(&input.recent, &indices, &input.category_label)
    }

    /// Mean estimated return over several funds. Zero for an empty list.
    pub async fn estimate_portfolio(&self, codes: &[String]) -> Decimal {
        if codes.is_empty() {
            return Decimal::ZERO;
        }

        let (indices, holdings) = futures::join!(
            self.get_indices(),
            join_all(codes.iter().map(|code| self.estimate_input(code)))
        );
        estimation::estimate_portfolio(&holdings, &indices)
    }

    async fn estimate_input(&self, code: &str) -> EstimateInput {
        // The estimator needs a full window regardless of the configured size.
        let days = self.history_window.max(ESTIMATE_WINDOW);
        let (identity, recent) = futures::join!(
            self.get_instrument_identity(code),
            self.get_quote_history(code, days)
        );

        EstimateInput {
            recent,
            category_label: identity.map(|i| i.category_label).unwrap_or_default(),
        }
    }
}
