//! Source trait definitions.
//!
//! Index sources form the ordered fallback chain; the fund detail source is a
//! single upstream queried directly.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{IndexBoard, IndexDescriptor, InstrumentIdentity, QuoteSnapshot, RankEntry, RankKind};

/// An upstream that can serve a batch of index quotes.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use fundpulse_market_data::models::{IndexBoard, IndexDescriptor};
/// use fundpulse_market_data::provider::IndexSource;
///
/// struct FixedSource;
///
/// #[async_trait]
/// impl IndexSource for FixedSource {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn fetch_indices(&self, _targets: &[IndexDescriptor]) -> IndexBoard {
///         IndexBoard::new()
///     }
/// }
/// ```
#[async_trait]
pub trait IndexSource: Send + Sync {
    /// Unique identifier used in logs, e.g. "SINA".
    fn id(&self) -> &'static str;

    /// Position in the fallback chain. Lower values are tried first.
    fn priority(&self) -> u8 {
        10
    }

    /// Fetches the requested indices in one request.
    ///
    /// Never fails: any transport, decode or parse failure of the whole source
    /// yields an empty board, which the chain treats as "try the next source".
    async fn fetch_indices(&self, targets: &[IndexDescriptor]) -> IndexBoard;
}

/// An upstream serving per-fund details and leaderboards.
#[async_trait]
pub trait FundDetailSource: Send + Sync {
    fn id(&self) -> &'static str;

    /// Name and type label of a fund. `Ok(None)` when the page names no fund.
    async fn fetch_identity(&self, code: &str) -> Result<Option<InstrumentIdentity>, MarketDataError>;

    /// Up to `days` most recent net value publications, oldest first.
    async fn fetch_history(&self, code: &str, days: usize) -> Result<Vec<QuoteSnapshot>, MarketDataError>;

    /// Leaderboard rows in upstream order, before local ranking.
    async fn fetch_rank(&self, kind: RankKind) -> Result<Vec<RankEntry>, MarketDataError>;
}
