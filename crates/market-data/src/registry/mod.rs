//! Source orchestration.
//!
//! - `IndexSourceChain`: ordered fallback across index sources, synthetic board last
//! - `ranked`: leaderboard fetch plus local ranking, empty on failure

mod chain;
mod rank;

pub use chain::IndexSourceChain;
pub use rank::ranked;
