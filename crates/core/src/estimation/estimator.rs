//! Same-day profit estimate for a fund.
//!
//! The estimate multiplies the fund's recent average daily movement by a market
//! sentiment factor and a sector factor, then clamps the result to ±5%.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use fundpulse_market_data::{FundCategory, IndexBoard, QuoteSnapshot, SENTIMENT_REFERENCE_INDICES};

/// Number of most recent publications the estimate averages over.
pub const ESTIMATE_WINDOW: usize = 5;

pub const ESTIMATE_FLOOR: Decimal = dec!(-5.0);
pub const ESTIMATE_CEILING: Decimal = dec!(5.0);

/// Inputs for one fund in a portfolio estimate.
#[derive(Debug, Clone, Default)]
pub struct EstimateInput {
    /// Recent publications, oldest first
    pub recent: Vec<QuoteSnapshot>,
    /// Upstream type label, e.g. "混合型-偏股"
    pub category_label: String,
}

/// Estimates today's return in percent for one fund.
///
/// `recent` must be ordered oldest to newest. Fewer than [`ESTIMATE_WINDOW`]
/// publications yield zero, as does any arithmetic overflow.
///
/// The average takes the absolute value of each daily growth, so a fund that
/// has only been falling still gets a positive estimate. This is long-standing
/// behavior that downstream displays rely on, and it is suspect.
pub fn estimate(recent: &[QuoteSnapshot], indices: &IndexBoard, category_label: &str) -> Decimal {
    if recent.len() < ESTIMATE_WINDOW {
        return Decimal::ZERO;
    }

    let window = &recent[recent.len() - ESTIMATE_WINDOW..];
    let Some(avg_growth) = mean(window.iter().map(|q| q.day_growth_pct.abs())) else {
        return Decimal::ZERO;
    };

    let market = market_sentiment_factor(indices);
    let sector = sector_factor(FundCategory::from_label(category_label));

    avg_growth
        .checked_mul(market)
        .and_then(|v| v.checked_mul(sector))
        .map(|v| v.clamp(ESTIMATE_FLOOR, ESTIMATE_CEILING))
        .unwrap_or(Decimal::ZERO)
}

/// Mean of the per-fund estimates. Funds without enough history count as zero.
pub fn estimate_portfolio(holdings: &[EstimateInput], indices: &IndexBoard) -> Decimal {
    mean(
        holdings
            .iter()
            .map(|h| estimate(&h.recent, indices, &h.category_label)),
    )
    .unwrap_or(Decimal::ZERO)
}

/// Maps the mean change of the reference indices present on the board to a factor.
///
/// Returns 1.0 when none of the reference indices is on the board.
pub fn market_sentiment_factor(indices: &IndexBoard) -> Decimal {
    let changes = SENTIMENT_REFERENCE_INDICES
        .iter()
        .filter_map(|name| indices.get(*name))
        .map(|snapshot| snapshot.change_pct);

    let Some(avg_change) = mean(changes) else {
        return Decimal::ONE;
    };

    if avg_change > dec!(1.0) {
        dec!(1.5)
    } else if avg_change > dec!(0.5) {
        dec!(1.3)
    } else if avg_change > Decimal::ZERO {
        dec!(1.1)
    } else if avg_change > dec!(-0.5) {
        dec!(0.9)
    } else if avg_change > dec!(-1.0) {
        dec!(0.7)
    } else {
        dec!(0.5)
    }
}

pub fn sector_factor(category: FundCategory) -> Decimal {
    match category {
        FundCategory::Equity => dec!(1.2),
        FundCategory::Mixed => dec!(1.0),
        FundCategory::Bond => dec!(0.8),
        FundCategory::Money => dec!(0.1),
        FundCategory::Index => dec!(1.1),
        FundCategory::Offshore => dec!(1.0),
        FundCategory::FundOfFunds => dec!(0.9),
        FundCategory::Unknown => dec!(1.0),
    }
}

/// Renders an estimate with two decimals and an explicit sign, e.g. "+1.87%".
pub fn format_estimate(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        "+0.00%".to_string()
    } else if rounded.is_sign_negative() {
        format!("{:.2}%", rounded)
    } else {
        format!("+{:.2}%", rounded)
    }
}

/// Arithmetic mean with checked arithmetic. `None` for no values or on overflow.
fn mean(values: impl Iterator<Item = Decimal>) -> Option<Decimal> {
    let (sum, count) = values.fold(Some((Decimal::ZERO, 0u32)), |acc, value| {
        let (sum, count) = acc?;
        Some((sum.checked_add(value)?, count + 1))
    })?;

    if count == 0 {
        return None;
    }
    sum.checked_div(Decimal::from(count))
}
