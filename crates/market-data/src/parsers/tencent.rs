//! Tencent batched quote format: `v_<symbol>="f0~f1~...";`, one per line.

use super::{decimal_field, skip_record, split_quote_line};
use crate::errors::MarketDataError;
use crate::models::{descriptor_for_symbol, IndexBoard, IndexDescriptor, IndexPrices, IndexSnapshot};

const PROVIDER_ID: &str = "TENCENT";

const CURRENT: usize = 3;
const PREV_CLOSE: usize = 4;
const OPEN: usize = 5;
const VOLUME: usize = 6;
const HIGH: usize = 33;
const LOW: usize = 34;

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

    let fields: Vec<&str> = body.split('~').collect();
    let code = descriptor.code;

    // Non-integer volume is tolerated and reported as zero.
    let volume = fields
        .get(VOLUME)
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(0);

    let prices = IndexPrices {
        open: decimal_field(&fields, OPEN, code)?,
        prev_close: decimal_field(&fields, PREV_CLOSE, code)?,
        current: decimal_field(&fields, CURRENT, code)?,
        high: decimal_field(&fields, HIGH, code)?,
        low: decimal_field(&fields, LOW, code)?,
        volume,
    };

    IndexSnapshot::from_prices(descriptor, prices).map(Some)
}
