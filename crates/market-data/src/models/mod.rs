//! Market data models
//!
//! This module contains the value types produced by the acquisition layer:
//! - `instrument` - Fund identity and category classification
//! - `quote` - Fund net value snapshots
//! - `index` - Market index snapshots, the known index table and `IndexBoard`
//! - `rank` - Leaderboard rows and ranking rules
//! - `sentiment` - Market sentiment snapshot

mod index;
mod instrument;
mod quote;
mod rank;
mod sentiment;

pub use index::{
    descriptor_for_symbol, live_indices, IndexBoard, IndexDescriptor, IndexPrices, IndexRegion,
    IndexSnapshot, KNOWN_INDICES, SENTIMENT_REFERENCE_INDICES,
};
pub use instrument::{FundCategory, InstrumentIdentity, CATEGORY_LABELS};
pub use quote::QuoteSnapshot;
pub use rank::{RankEntry, RankKind, RANK_LIMIT};
pub use sentiment::{HotFund, SentimentSnapshot};
