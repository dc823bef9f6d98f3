use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::watchlist_model::{validate_collection_name, validate_fund_code};
use super::{FavoriteFund, FundCollection, NewFavoriteFund};
use super::{WatchlistRepositoryTrait, WatchlistServiceTrait};
use crate::errors::Result;

pub struct WatchlistService {
    repository: Arc<dyn WatchlistRepositoryTrait>,
}

impl WatchlistService {
    pub fn new(repository: Arc<dyn WatchlistRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl WatchlistServiceTrait for WatchlistService {
    fn get_favorites(&self) -> Result<Vec<FavoriteFund>> {
        self.repository.list_favorites()
    }

    async fn follow_fund(&self, fund: NewFavoriteFund) -> Result<bool> {
        fund.validate()?;
        let code = fund.code.clone();
        let inserted = self.repository.add_favorite(fund).await?;
        if !inserted {
            debug!("Fund {} is already a favorite", code);
        }
        Ok(inserted)
    }

    async fn unfollow_fund(&self, code: &str) -> Result<usize> {
        self.repository.remove_favorite(code.to_string()).await
    }

    fn get_collections(&self) -> Result<Vec<FundCollection>> {
        self.repository.list_collections()
    }

    async fn create_collection(&self, name: &str) -> Result<FundCollection> {
        validate_collection_name(name)?;
        self.repository.create_collection(name.trim().to_string()).await
    }

    async fn rename_collection(&self, collection_id: i32, name: &str) -> Result<FundCollection> {
        validate_collection_name(name)?;
        self.repository
            .rename_collection(collection_id, name.trim().to_string())
            .await
    }

    async fn delete_collection(&self, collection_id: i32) -> Result<usize> {
        self.repository.delete_collection(collection_id).await
    }

    async fn add_to_collection(&self, collection_id: i32, code: &str) -> Result<bool> {
        validate_fund_code(code)?;
        self.repository
            .add_to_collection(collection_id, code.to_string())
            .await
    }

    async fn remove_from_collection(&self, collection_id: i32, code: &str) -> Result<usize> {
        self.repository
            .remove_from_collection(collection_id, code.to_string())
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::NaiveDateTime;

    use super::*;
    use crate::errors::{DatabaseError, Error, ValidationError};

    #[derive(Default)]
    struct InMemoryRepository {
        favorites: Mutex<Vec<FavoriteFund>>,
        collections: Mutex<Vec<FundCollection>>,
    }

    fn epoch() -> NaiveDateTime {
        NaiveDateTime::default()
    }

    #[async_trait]
    impl WatchlistRepositoryTrait for InMemoryRepository {
        fn list_favorites(&self) -> Result<Vec<FavoriteFund>> {
            Ok(self.favorites.lock().unwrap().clone())
        }

        async fn add_favorite(&self, fund: NewFavoriteFund) -> Result<bool> {
            let mut favorites = self.favorites.lock().unwrap();
            if favorites.iter().any(|f| f.code == fund.code) {
                return Ok(false);
            }
            favorites.push(FavoriteFund {
                code: fund.code,
                name: fund.name,
                category_label: fund.category_label,
                added_at: epoch(),
            });
            Ok(true)
        }

        async fn remove_favorite(&self, code: String) -> Result<usize> {
            let mut favorites = self.favorites.lock().unwrap();
            let before = favorites.len();
            favorites.retain(|f| f.code != code);
            Ok(before - favorites.len())
        }

        fn list_collections(&self) -> Result<Vec<FundCollection>> {
            Ok(self.collections.lock().unwrap().clone())
        }

        async fn create_collection(&self, name: String) -> Result<FundCollection> {
            let mut collections = self.collections.lock().unwrap();
            let collection = FundCollection {
                id: collections.len() as i32 + 1,
                name,
                created_at: epoch(),
                fund_codes: Vec::new(),
            };
            collections.push(collection.clone());
            Ok(collection)
        }

        async fn rename_collection(&self, collection_id: i32, name: String) -> Result<FundCollection> {
            let mut collections = self.collections.lock().unwrap();
            let collection = collections
                .iter_mut()
                .find(|c| c.id == collection_id)
                .ok_or_else(|| DatabaseError::NotFound(collection_id.to_string()))?;
            collection.name = name;
            Ok(collection.clone())
        }

        async fn delete_collection(&self, collection_id: i32) -> Result<usize> {
            let mut collections = self.collections.lock().unwrap();
            let before = collections.len();
            collections.retain(|c| c.id != collection_id);
            Ok(before - collections.len())
        }

        async fn add_to_collection(&self, collection_id: i32, code: String) -> Result<bool> {
            let mut collections = self.collections.lock().unwrap();
            let collection = collections
                .iter_mut()
                .find(|c| c.id == collection_id)
                .ok_or_else(|| DatabaseError::NotFound(collection_id.to_string()))?;
            if collection.fund_codes.contains(&code) {
                return Ok(false);
            }
            collection.fund_codes.push(code);
            Ok(true)
        }

        async fn remove_from_collection(&self, collection_id: i32, code: String) -> Result<usize> {
            let mut collections = self.collections.lock().unwrap();
            let Some(collection) = collections.iter_mut().find(|c| c.id == collection_id) else {
                return Ok(0);
            };
            let before = collection.fund_codes.len();
            collection.fund_codes.retain(|c| *c != code);
            Ok(before - collection.fund_codes.len())
        }
    }

    fn service() -> WatchlistService {
        WatchlistService::new(Arc::new(InMemoryRepository::default()))
    }

    fn favorite(code: &str) -> NewFavoriteFund {
        NewFavoriteFund {
            code: code.to_string(),
            name: format!("Fund {}", code),
            category_label: "混合型".to_string(),
        }
    }

    #[tokio::test]
    async fn test_follow_is_idempotent() {
        let service = service();

        assert!(service.follow_fund(favorite("000001")).await.unwrap());
        assert!(!service.follow_fund(favorite("000001")).await.unwrap());
        assert_eq!(service.get_favorites().unwrap().len(), 1);

        assert_eq!(service.unfollow_fund("000001").await.unwrap(), 1);
        assert!(service.get_favorites().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_follow_rejects_blank_code() {
        let result = service().follow_fund(favorite("")).await;
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::MissingField(_)))
        ));
    }

    #[tokio::test]
    async fn test_collection_names_are_trimmed_and_required() {
        let service = service();

        let collection = service.create_collection("  稳健组合 ").await.unwrap();
        assert_eq!(collection.name, "稳健组合");

        assert!(service.rename_collection(collection.id, " ").await.is_err());
        let renamed = service.rename_collection(collection.id, "进取组合").await.unwrap();
        assert_eq!(renamed.name, "进取组合");
    }

    #[tokio::test]
    async fn test_membership() {
        let service = service();
        let collection = service.create_collection("组合").await.unwrap();

        assert!(service.add_to_collection(collection.id, "110022").await.unwrap());
        assert!(!service.add_to_collection(collection.id, "110022").await.unwrap());
        assert!(service.add_to_collection(collection.id, "bad code").await.is_err());

        let collections = service.get_collections().unwrap();
        assert_eq!(collections[0].fund_codes, vec!["110022".to_string()]);

        assert_eq!(
            service.remove_from_collection(collection.id, "110022").await.unwrap(),
            1
        );
        assert_eq!(service.delete_collection(collection.id).await.unwrap(), 1);
    }
}
