use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A fund singled out as currently popular, with the reason it is trending.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotFund {
    pub code: String,
    pub name: String,
    pub reason: String,
}

/// Aggregate mood of the market.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentSnapshot {
    /// 0 (fear) to 100 (greed)
    pub sentiment_index: u8,

    pub description: String,

    pub advancing_count: u32,
    pub declining_count: u32,
    pub flat_count: u32,

    /// Main-force net inflow, in units of 100 million CNY
    pub net_inflow: Decimal,

    pub hot_list: Vec<HotFund>,
}
