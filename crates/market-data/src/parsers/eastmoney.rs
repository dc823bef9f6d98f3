//! Eastmoney fund detail payloads: net value history JSON, the leaderboard
//! script and the fund detail HTML page.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

use super::{decimal_field, parse_decimal, skip_record};
use crate::errors::MarketDataError;
use crate::models::{InstrumentIdentity, QuoteSnapshot, RankEntry};

const PROVIDER_ID: &str = "EASTMONEY";

/// Rows with this many fields or fewer are truncated upstream and skipped.
const MIN_RANK_FIELDS: usize = 10;

const RANK_CODE: usize = 0;
const RANK_NAME: usize = 1;
const RANK_UNIT_VALUE: usize = 3;
const RANK_DAY: usize = 4;
const RANK_WEEK: usize = 5;
const RANK_MONTH: usize = 6;
const RANK_YEAR: usize = 9;

lazy_static! {
    static ref RANK_ARRAY: Regex = Regex::new(r"(?s)(?:var\s+db\s*=|datas\s*:)\s*(\[.*?\])")
        .expect("Invalid regex pattern");
    static ref FUND_NAME: Regex =
        Regex::new(r#"基金名称：</span><span class="funCur-FundName">(.*?)</span>"#)
            .expect("Invalid regex pattern");
    static ref FUND_TYPE: Regex =
        Regex::new(r"基金类型：</span><span>(.*?)</span>").expect("Invalid regex pattern");
}

// ============================================================================
// Net value history
// ============================================================================

#[derive(Debug, Deserialize)]
struct HistoryEnvelope {
    #[serde(rename = "Data")]
    data: Option<HistoryData>,
}

#[derive(Debug, Deserialize)]
struct HistoryData {
    #[serde(rename = "LSJZList")]
    rows: Option<Vec<HistoryRow>>,
}

#[derive(Debug, Deserialize)]
struct HistoryRow {
    #[serde(rename = "FSRQ", default)]
    date: Option<String>,
    #[serde(rename = "DWJZ", default)]
    unit_value: Option<String>,
    #[serde(rename = "JZZZL", default)]
    day_growth: Option<String>,
}

/// Parses the `f10/lsjz` response into snapshots ordered oldest to newest.
///
/// Upstream lists the newest publication first. An envelope without
/// `Data.LSJZList` fails the payload; a bad row is skipped.
pub fn parse_history(payload: &str, code: &str) -> Result<Vec<QuoteSnapshot>, MarketDataError> {
    let envelope: HistoryEnvelope = serde_json::from_str(payload)
        .map_err(|e| MarketDataError::decode(PROVIDER_ID, e.to_string()))?;

    let rows = envelope
        .data
        .and_then(|d| d.rows)
        .ok_or_else(|| MarketDataError::decode(PROVIDER_ID, "missing Data.LSJZList"))?;

    let mut quotes: Vec<QuoteSnapshot> = rows
        .iter()
        .filter_map(|row| match parse_history_row(row, code) {
            Ok(quote) => Some(quote),
            Err(e) => {
                skip_record(PROVIDER_ID, &e);
                None
            }
        })
        .collect();
    quotes.reverse();

    Ok(quotes)
}

fn parse_history_row(row: &HistoryRow, code: &str) -> Result<QuoteSnapshot, MarketDataError> {
    if code.is_empty() {
        return Err(MarketDataError::parse(code, "empty fund code"));
    }

    let unit_value = row
        .unit_value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| MarketDataError::parse(code, "empty unit value"))?;
    let unit_value = parse_decimal(unit_value, code)?;

    // Growth is blank on the first publication and for money market funds.
    let day_growth_pct = match row.day_growth.as_deref().map(str::trim) {
        Some(growth) if !growth.is_empty() => parse_decimal(growth, code)?,
        _ => rust_decimal::Decimal::ZERO,
    };

    let as_of = row
        .date
        .as_deref()
        .and_then(|d| NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d").ok());

    Ok(QuoteSnapshot::new(code, unit_value, day_growth_pct, as_of))
}

// ============================================================================
// Leaderboard
// ============================================================================

/// Parses the `rankhandler.aspx` script into leaderboard rows in upstream order.
pub fn parse_rank(payload: &str) -> Result<Vec<RankEntry>, MarketDataError> {
    let array = RANK_ARRAY
        .captures(payload)
        .and_then(|c| c.get(1))
        .ok_or_else(|| MarketDataError::decode(PROVIDER_ID, "no ranking array in payload"))?;

    let rows: Vec<String> = serde_json::from_str(array.as_str())
        .map_err(|e| MarketDataError::decode(PROVIDER_ID, e.to_string()))?;

    let entries = rows
        .iter()
        .filter_map(|row| match parse_rank_row(row) {
            Ok(entry) => entry,
            Err(e) => {
                skip_record(PROVIDER_ID, &e);
                None
            }
        })
        .collect();

    Ok(entries)
}

fn parse_rank_row(row: &str) -> Result<Option<RankEntry>, MarketDataError> {
    let fields: Vec<&str> = row.split(',').collect();
    if fields.len() <= MIN_RANK_FIELDS {
        return Ok(None);
    }

    let code = fields[RANK_CODE].trim();
    if code.is_empty() {
        return Err(MarketDataError::parse(code, "empty fund code"));
    }

    Ok(Some(RankEntry {
        code: code.to_string(),
        name: fields[RANK_NAME].trim().to_string(),
        unit_value: decimal_field(&fields, RANK_UNIT_VALUE, code)?,
        day_growth_pct: decimal_field(&fields, RANK_DAY, code)?,
        week_growth_pct: decimal_field(&fields, RANK_WEEK, code)?,
        month_growth_pct: decimal_field(&fields, RANK_MONTH, code)?,
        year_growth_pct: decimal_field(&fields, RANK_YEAR, code)?,
    }))
}

// ============================================================================
// Detail page
// ============================================================================

/// Extracts the fund name and type label from the detail page.
///
/// Returns `None` when the page has no fund name, which is also what upstream
/// serves for unknown codes. A missing type label yields an empty label.
pub fn parse_profile(html: &str, code: &str) -> Option<InstrumentIdentity> {
    let name = FUND_NAME
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .filter(|n| !n.is_empty())?;

    let label = FUND_TYPE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .unwrap_or_default();

    Some(InstrumentIdentity::new(code, name, label))
}
