//! Estimation module - heuristic same-day profit estimates.

mod estimator;

pub use estimator::{
    estimate, estimate_portfolio, format_estimate, market_sentiment_factor, sector_factor,
    EstimateInput, ESTIMATE_CEILING, ESTIMATE_FLOOR, ESTIMATE_WINDOW,
};
