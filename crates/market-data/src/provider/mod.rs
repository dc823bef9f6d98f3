//! Upstream sources.
//!
//! This module contains:
//! - The `IndexSource` trait implemented by every member of the index chain
//! - The `FundDetailSource` trait for per-fund lookups and leaderboards
//! - Concrete sources (Sina, Tencent, the reserved slot, Eastmoney)
//!
//! Each source owns a `reqwest::Client` built from the [`FetchConfig`](crate::config::FetchConfig)
//! it was constructed with, issues exactly one request per call and never retries.

mod http;
mod traits;

pub mod eastmoney;
pub mod reserved;
pub mod sina;
pub mod tencent;

pub use eastmoney::EastmoneySource;
pub use reserved::ReservedSource;
pub use sina::SinaSource;
pub use tencent::TencentSource;
pub use traits::{FundDetailSource, IndexSource};
