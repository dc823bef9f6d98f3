//! Ordered fallback across index sources.

use std::sync::Arc;

use log::{debug, warn};

use crate::config::FetchConfig;
use crate::models::{live_indices, IndexBoard, IndexDescriptor};
use crate::provider::{IndexSource, ReservedSource, SinaSource, TencentSource};
use crate::reference::{synthetic_board, uncovered_board};

/// Index sources tried strictly in priority order.
///
/// The first source returning at least one index wins and its rows are used
/// as-is; rows are never merged across sources. Indices no live source quotes
/// are filled in from static values. When every source comes back empty, the
/// synthetic board is served instead.
pub struct IndexSourceChain {
    sources: Vec<Arc<dyn IndexSource>>,
    targets: Vec<IndexDescriptor>,
}

impl IndexSourceChain {
    /// Creates a chain requesting every live index. Sources are ordered by
    /// [`IndexSource::priority`]; ties keep their given order.
    pub fn new(sources: Vec<Arc<dyn IndexSource>>) -> Self {
        Self::with_targets(sources, live_indices())
    }

    pub fn with_targets(
        mut sources: Vec<Arc<dyn IndexSource>>,
        targets: Vec<IndexDescriptor>,
    ) -> Self {
        sources.sort_by_key(|s| s.priority());
        Self { sources, targets }
    }

    /// The Sina, Tencent and reserved sources built from one configuration.
    pub fn from_config(config: &FetchConfig) -> Self {
        let sources: Vec<Arc<dyn IndexSource>> = vec![
            Arc::new(SinaSource::new(config)),
            Arc::new(TencentSource::new(config)),
            Arc::new(ReservedSource),
        ];
        Self::new(sources)
    }

    /// Source ids in the order they are tried.
    pub fn source_ids(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.id()).collect()
    }

    /// Returns the first non-empty board completed with the unquoted indices,
    /// or the synthetic board. Never empty.
    pub async fn get_indices(&self) -> IndexBoard {
        for source in &self.sources {
            let mut board = source.fetch_indices(&self.targets).await;
            if !board.is_empty() {
                debug!("Index board served by {} ({} entries)", source.id(), board.len());
                for (name, snapshot) in uncovered_board() {
                    board.entry(name).or_insert(snapshot);
                }
                return board;
            }
            debug!("{} returned no indices, trying next source", source.id());
        }

        warn!(
            "All {} index sources returned nothing; serving synthetic index data",
            self.sources.len()
        );
        synthetic_board()
    }
}
