//! FundPulse Core - estimation, the acquisition facade and the watchlist domain.
//!
//! This crate sits between the presentation layer and the market-data crate.
//! It is database-agnostic and defines the watchlist repository traits that are
//! implemented by the `storage-sqlite` crate.

pub mod errors;
pub mod estimation;
pub mod market;
pub mod watchlist;

pub use market::{AcquisitionEvent, AcquisitionWorker, FundDataClient, FundOverview};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
