//! Market module - acquisition facade, background worker and their models.

mod client;
mod model;
mod worker;

pub use client::FundDataClient;
pub use model::{AcquisitionEvent, FundOverview};
pub use worker::AcquisitionWorker;
