use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::MarketDataError;

/// Regional group an index belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IndexRegion {
    Domestic,
    HongKong,
    Us,
    AsiaPacific,
}

/// Static description of a tracked market index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexDescriptor {
    /// Display name, also the key in an [`IndexBoard`]
    pub name: &'static str,

    /// Index code as reported in snapshots
    pub code: &'static str,

    pub region: IndexRegion,

    /// Exchange-prefixed symbol understood by the batched quote endpoints.
    /// `None` for indices no live source covers.
    pub quote_symbol: Option<&'static str>,
}

/// Every index the application tracks, in display order.
#[rustfmt::skip]
pub const KNOWN_INDICES: [IndexDescriptor; 18] = [
    IndexDescriptor { name: "上证指数", code: "000001", region: IndexRegion::Domestic, quote_symbol: Some("sh000001") },
    IndexDescriptor { name: "深证成指", code: "399001", region: IndexRegion::Domestic, quote_symbol: Some("sz399001") },
    IndexDescriptor { name: "创业板指", code: "399006", region: IndexRegion::Domestic, quote_symbol: Some("sz399006") },
    IndexDescriptor { name: "科创50", code: "000688", region: IndexRegion::Domestic, quote_symbol: Some("sh000688") },
    IndexDescriptor { name: "北证50", code: "899050", region: IndexRegion::Domestic, quote_symbol: None },
    IndexDescriptor { name: "上证50", code: "000016", region: IndexRegion::Domestic, quote_symbol: Some("sh000016") },
    IndexDescriptor { name: "中证500", code: "000905", region: IndexRegion::Domestic, quote_symbol: Some("sh000905") },
    IndexDescriptor { name: "中证1000", code: "000852", region: IndexRegion::Domestic, quote_symbol: Some("sh000852") },
    IndexDescriptor { name: "沪深300", code: "000300", region: IndexRegion::Domestic, quote_symbol: Some("sh000300") },
    IndexDescriptor { name: "恒生指数", code: "hkHSI", region: IndexRegion::HongKong, quote_symbol: None },
    IndexDescriptor { name: "恒生科技", code: "hkHSTECH", region: IndexRegion::HongKong, quote_symbol: None },
    IndexDescriptor { name: "恒生国企", code: "hkHSCEI", region: IndexRegion::HongKong, quote_symbol: None },
    IndexDescriptor { name: "纳斯达克", code: "usIXIC", region: IndexRegion::Us, quote_symbol: None },
    IndexDescriptor { name: "标普500", code: "usSPX", region: IndexRegion::Us, quote_symbol: None },
    IndexDescriptor { name: "道琼斯", code: "usDJI", region: IndexRegion::Us, quote_symbol: None },
    IndexDescriptor { name: "日经225", code: "jpN225", region: IndexRegion::AsiaPacific, quote_symbol: None },
    IndexDescriptor { name: "印度孟买sensex", code: "inSENSEX", region: IndexRegion::AsiaPacific, quote_symbol: None },
    IndexDescriptor { name: "越南胡志明", code: "vnHOSE", region: IndexRegion::AsiaPacific, quote_symbol: None },
];

/// Indices that drive the market sentiment factor.
pub const SENTIMENT_REFERENCE_INDICES: [&str; 3] = ["上证指数", "深证成指", "创业板指"];

/// Known indices that the batched quote endpoints can serve.
pub fn live_indices() -> Vec<IndexDescriptor> {
    KNOWN_INDICES
        .iter()
        .filter(|d| d.quote_symbol.is_some())
        .copied()
        .collect()
}

/// Looks up a descriptor by its exchange-prefixed quote symbol.
pub fn descriptor_for_symbol<'a>(
    targets: &'a [IndexDescriptor],
    symbol: &str,
) -> Option<&'a IndexDescriptor> {
    targets.iter().find(|d| d.quote_symbol == Some(symbol))
}

/// Mapping from index display name to its latest snapshot.
pub type IndexBoard = BTreeMap<String, IndexSnapshot>;

/// One market index valuation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexSnapshot {
    pub name: String,
    pub code: String,
    pub price: Decimal,
    pub change: Decimal,
    pub change_pct: Decimal,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub volume: u64,
}

/// Raw prices read from a quote line before the change is derived.
#[derive(Clone, Copy, Debug)]
pub struct IndexPrices {
    pub open: Decimal,
    pub prev_close: Decimal,
    pub current: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub volume: u64,
}

impl IndexSnapshot {
    /// Builds a snapshot, deriving `change` and `change_pct` from the previous close.
    ///
    /// Fails with a record-scoped parse error when the previous close is zero.
    pub fn from_prices(
        descriptor: &IndexDescriptor,
        prices: IndexPrices,
    ) -> Result<Self, MarketDataError> {
        if prices.prev_close.is_zero() {
            return Err(MarketDataError::parse(
                descriptor.code,
                "previous close is zero",
            ));
        }

        let change = prices
            .current
            .checked_sub(prices.prev_close)
            .ok_or_else(|| MarketDataError::parse(descriptor.code, "change overflow"))?;
        let change_pct = change
            .checked_div(prices.prev_close)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .ok_or_else(|| MarketDataError::parse(descriptor.code, "change overflow"))?;

        Ok(Self {
            name: descriptor.name.to_string(),
            code: descriptor.code.to_string(),
            price: prices.current,
            change,
            change_pct,
            open: prices.open,
            high: prices.high,
            low: prices.low,
            volume: prices.volume,
        })
    }
}
