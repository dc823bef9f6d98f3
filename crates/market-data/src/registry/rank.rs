//! Leaderboard retrieval.
//!
//! Unlike the index chain, a failed leaderboard has no fallback: the caller
//! gets an empty list.

use log::warn;

use crate::models::{RankEntry, RankKind};
use crate::provider::FundDetailSource;

/// Fetches a leaderboard and ranks it locally, keeping at most ten rows.
pub async fn ranked(source: &dyn FundDetailSource, kind: RankKind) -> Vec<RankEntry> {
    match source.fetch_rank(kind).await {
        Ok(entries) => kind.rank(entries),
        Err(e) => {
            warn!("{}: {:?} leaderboard unavailable: {}", source.id(), kind, e);
            Vec::new()
        }
    }
}
