//! Watchlist module - followed funds and fund collections.

mod watchlist_model;
mod watchlist_service;
mod watchlist_traits;

pub use watchlist_model::{
    validate_collection_name, validate_fund_code, FavoriteFund, FundCollection, NewFavoriteFund,
};
pub use watchlist_service::WatchlistService;
pub use watchlist_traits::{WatchlistRepositoryTrait, WatchlistServiceTrait};
