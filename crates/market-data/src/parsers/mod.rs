//! Pure decoders for upstream payloads.
//!
//! Every upstream speaks its own positional text format. Each format gets one
//! parsing function keyed by a [`SourceTag`]; none of them keeps state, so they
//! can be exercised directly against fixture payloads.
//!
//! Parsing failures are scoped to a single record: a malformed line is logged and
//! skipped while the rest of the batch is kept. Only a broken envelope (not JSON,
//! no data array) fails the whole payload.

pub mod eastmoney;
pub mod sina;
pub mod tencent;

use std::str::FromStr;

use log::debug;
use rust_decimal::Decimal;

use crate::errors::MarketDataError;
use crate::models::{IndexBoard, IndexDescriptor};

/// Character set a source publishes its payload in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    Utf8,
    Gbk,
}

impl Charset {
    /// Decodes a raw body. Bytes that are invalid in the declared charset fail the payload.
    pub fn decode(&self, provider: &str, bytes: &[u8]) -> Result<String, MarketDataError> {
        match self {
            Self::Utf8 => std::str::from_utf8(bytes)
                .map(str::to_string)
                .map_err(|e| MarketDataError::decode(provider, e.to_string())),
            Self::Gbk => encoding_rs::GBK
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(|text| text.into_owned())
                .ok_or_else(|| MarketDataError::decode(provider, "payload is not valid GBK")),
        }
    }
}

/// Identifies an upstream payload format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceTag {
    /// `var hq_str_<symbol>="f0,f1,...";`
    Sina,
    /// `v_<symbol>="f0~f1~...";`
    Tencent,
    /// Net value history JSON
    EastmoneyHistory,
    /// Leaderboard script payload
    EastmoneyRank,
    /// Fund detail HTML page
    EastmoneyProfile,
}

impl SourceTag {
    pub fn charset(&self) -> Charset {
        match self {
            Self::Sina | Self::Tencent => Charset::Gbk,
            Self::EastmoneyHistory | Self::EastmoneyRank | Self::EastmoneyProfile => {
                Charset::Utf8
            }
        }
    }
}

/// Dispatches an index quote payload to the parser registered for its tag.
///
/// Tags that do not carry index quotes produce an empty board.
pub fn parse_index_payload(
    tag: SourceTag,
    payload: &str,
    targets: &[IndexDescriptor],
) -> IndexBoard {
    match tag {
        SourceTag::Sina => sina::parse_indices(payload, targets),
        SourceTag::Tencent => tencent::parse_indices(payload, targets),
        SourceTag::EastmoneyHistory | SourceTag::EastmoneyRank | SourceTag::EastmoneyProfile => {
            debug!("{:?} payloads carry no index quotes", tag);
            IndexBoard::new()
        }
    }
}

/// Splits a `<key>=<"body">` quote line into the symbol after the last `_`
/// of the key and the unquoted body.
pub(crate) fn split_quote_line(line: &str) -> Option<(&str, &str)> {
    let (key, body) = line.trim().split_once('=')?;
    let symbol = key.trim().rsplit('_').next()?;
    let body = body.trim().trim_end_matches(';').trim().trim_matches('"');
    Some((symbol, body))
}

/// Reads a decimal at `index`; a missing or blank field counts as zero.
pub(crate) fn decimal_field(
    fields: &[&str],
    index: usize,
    code: &str,
) -> Result<Decimal, MarketDataError> {
    let raw = fields
        .get(index)
        .map(|f| f.trim())
        .filter(|f| !f.is_empty())
        .unwrap_or("0");
    parse_decimal(raw, code)
}

/// Parses a decimal, accepting an explicit leading `+`.
pub(crate) fn parse_decimal(raw: &str, code: &str) -> Result<Decimal, MarketDataError> {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    Decimal::from_str(unsigned)
        .map_err(|e| MarketDataError::parse(code, format!("'{}': {}", raw, e)))
}

/// Logs a skipped record.
pub(crate) fn skip_record(provider: &str, err: &MarketDataError) {
    debug!("{}: skipping record: {}", provider, err);
}
