//! Repository and service traits for the watchlist.

use async_trait::async_trait;

use crate::errors::Result;
use crate::watchlist::{FavoriteFund, FundCollection, NewFavoriteFund};

/// Repository trait for followed funds and fund collections.
#[async_trait]
pub trait WatchlistRepositoryTrait: Send + Sync {
    fn list_favorites(&self) -> Result<Vec<FavoriteFund>>;

    /// Inserts a favorite unless one with the same code exists.
    /// Returns `true` if a row was inserted.
    async fn add_favorite(&self, fund: NewFavoriteFund) -> Result<bool>;

    /// Returns the number of rows removed.
    async fn remove_favorite(&self, code: String) -> Result<usize>;

    /// All collections with their member codes.
    fn list_collections(&self) -> Result<Vec<FundCollection>>;

    async fn create_collection(&self, name: String) -> Result<FundCollection>;

    async fn rename_collection(&self, collection_id: i32, name: String) -> Result<FundCollection>;

    /// Deletes a collection and its memberships.
    async fn delete_collection(&self, collection_id: i32) -> Result<usize>;

    /// Adds a fund to a collection. Returns `false` if it was already a member.
    async fn add_to_collection(&self, collection_id: i32, code: String) -> Result<bool>;

    async fn remove_from_collection(&self, collection_id: i32, code: String) -> Result<usize>;
}

/// Trait for watchlist service operations
#[async_trait]
pub trait WatchlistServiceTrait: Send + Sync {
    fn get_favorites(&self) -> Result<Vec<FavoriteFund>>;
    async fn follow_fund(&self, fund: NewFavoriteFund) -> Result<bool>;
    async fn unfollow_fund(&self, code: &str) -> Result<usize>;
    fn get_collections(&self) -> Result<Vec<FundCollection>>;
    async fn create_collection(&self, name: &str) -> Result<FundCollection>;
    async fn rename_collection(&self, collection_id: i32, name: &str) -> Result<FundCollection>;
    async fn delete_collection(&self, collection_id: i32) -> Result<usize>;
    async fn add_to_collection(&self, collection_id: i32, code: &str) -> Result<bool>;
    async fn remove_from_collection(&self, collection_id: i32, code: &str) -> Result<usize>;
}
