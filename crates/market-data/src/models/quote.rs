use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Point-in-time valuation of a fund.
///
/// Snapshots are never mutated; a later fetch produces a new one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSnapshot {
    /// Fund code, never empty
    pub code: String,

    /// Net asset value per unit
    pub unit_value: Decimal,

    /// Day growth in percent, signed
    pub day_growth_pct: Decimal,

    /// Publication date, `None` when upstream left it blank
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_of: Option<NaiveDate>,
}

impl QuoteSnapshot {
    pub fn new(
        code: impl Into<String>,
        unit_value: Decimal,
        day_growth_pct: Decimal,
        as_of: Option<NaiveDate>,
    ) -> Self {
        Self {
            code: code.into(),
            unit_value,
            day_growth_pct,
            as_of,
        }
    }
}
