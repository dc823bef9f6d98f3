//! FundPulse Market Data Crate
//!
//! This crate fetches fund and market index data from several unofficial
//! Chinese web endpoints and normalizes it into plain value types.
//!
//! # Overview
//!
//! - Index quotes come from an ordered chain of sources (Sina, then Tencent,
//!   then a reserved slot). The first source that returns anything wins.
//! - Indices that no live source quotes (北证50, Hong Kong, US, Asia-Pacific)
//!   are filled in from static values on top of the winning board.
//! - When the whole chain comes back empty a static synthetic board is served,
//!   so an index lookup never yields nothing.
//! - Fund identity, net value history and leaderboards come from a single
//!   detail source (Eastmoney).
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! | IndexSourceChain |  (priority order, first non-empty wins)
//! +------------------+
//!          |
//!          v
//! +------------------+     +------------------+
//! |   IndexSource    | --> |  parsers (tag)   |  (pure, one per payload format)
//! +------------------+     +------------------+
//!          |
//!          v
//! +------------------+
//! | synthetic board  |  (only when every source is empty)
//! +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`IndexSnapshot`] / [`IndexBoard`] - Market index valuations keyed by name
//! - [`QuoteSnapshot`] - Fund net value on a publication date
//! - [`InstrumentIdentity`] - Fund name and category
//! - [`RankEntry`] - One leaderboard row
//! - [`FetchConfig`] - Timeout, user agent and endpoint base URLs

pub mod config;
pub mod errors;
pub mod models;
pub mod parsers;
pub mod provider;
pub mod reference;
pub mod registry;

pub use config::FetchConfig;
pub use errors::{MarketDataError, RecoveryScope};

pub use models::{
    FundCategory, HotFund, IndexBoard, IndexDescriptor, IndexRegion, IndexSnapshot,
    InstrumentIdentity, QuoteSnapshot, RankEntry, RankKind, SentimentSnapshot, KNOWN_INDICES,
    RANK_LIMIT, SENTIMENT_REFERENCE_INDICES,
};

pub use provider::{
    EastmoneySource, FundDetailSource, IndexSource, ReservedSource, SinaSource, TencentSource,
};

pub use reference::{reference_sentiment, synthetic_board, uncovered_board};
pub use registry::{ranked, IndexSourceChain};
