//! SQLite storage implementation for the watchlist.

mod model;
mod repository;

pub use model::{
    CollectionMemberDB, FavoriteFundDB, FundCollectionDB, NewCollectionMemberDB,
    NewFundCollectionDB,
};
pub use repository::WatchlistRepository;
