//! Sina batched quote format.
//!
//! One line per symbol:
//!
//! ```text
//! var hq_str_sh000001="3261.50,3258.60,3270.10,3275.00,3255.20,...";
//! ```
//!
//! Field offsets: open(0), previous close(1), current(2), high(3), low(4).
//! Live responses prefix the list with the display name; a leading non-numeric
//! field is skipped before the offsets apply. Unknown symbols come back with an
//! empty body and are ignored.

use rust_decimal::Decimal;

use super::{decimal_field, skip_record, split_quote_line};
use crate::errors::MarketDataError;
use crate::models::{descriptor_for_symbol, IndexBoard, IndexDescriptor, IndexPrices, IndexSnapshot};

const PROVIDER_ID: &str = "SINA";

const OPEN: usize = 0;
const PREV_CLOSE: usize = 1;
const CURRENT: usize = 2;
const HIGH: usize = 3;
const LOW: usize = 4;

/// Parses a full response body into an index board keyed by display name.
pub fn parse_indices(payload: &str, targets: &[IndexDescriptor]) -> IndexBoard {
    let mut board = IndexBoard::new();

    for line in payload.lines().filter(|l| !l.trim().is_empty()) {
        match parse_line(line, targets) {
            Ok(Some(snapshot)) => {
                board.insert(snapshot.name.clone(), snapshot);
            }
            Ok(None) => {}
            Err(e) => skip_record(PROVIDER_ID, &e),
        }
    }

    board
}

/// Parses one line. `Ok(None)` means the line is not about a requested index.
pub fn parse_line(
    line: &str,
    targets: &[IndexDescriptor],
) -> Result<Option<IndexSnapshot>, MarketDataError> {
    let (symbol, body) = split_quote_line(line)
        .ok_or_else(|| MarketDataError::parse("", format!("unrecognized line: {}", line)))?;

    let Some(descriptor) = descriptor_for_symbol(targets, symbol) else {
        return Ok(None);
    };
    if body.is_empty() {
        return Ok(None);
    }

    let mut fields: Vec<&str> = body.split(',').collect();
    if starts_with_name(&fields) {
        fields.remove(0);
    }

    let code = descriptor.code;
    let prices = IndexPrices {
        open: decimal_field(&fields, OPEN, code)?,
        prev_close: decimal_field(&fields, PREV_CLOSE, code)?,
        current: decimal_field(&fields, CURRENT, code)?,
        high: decimal_field(&fields, HIGH, code)?,
        low: decimal_field(&fields, LOW, code)?,
        volume: 0,
    };

    IndexSnapshot::from_prices(descriptor, prices).map(Some)
}

fn starts_with_name(fields: &[&str]) -> bool {
    fields
        .first()
        .map(|f| f.trim())
        .is_some_and(|f| !f.is_empty() && f.parse::<Decimal>().is_err())
}
