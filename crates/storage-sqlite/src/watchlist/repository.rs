use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use fundpulse_core::errors::DatabaseError;
use fundpulse_core::watchlist::{
    FavoriteFund, FundCollection, NewFavoriteFund, WatchlistRepositoryTrait,
};
use fundpulse_core::Result;

use super::model::{
    CollectionMemberDB, FavoriteFundDB, FundCollectionDB, NewCollectionMemberDB,
    NewFundCollectionDB,
};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{collection_members, favorite_funds, fund_collections};

pub struct WatchlistRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl WatchlistRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        WatchlistRepository { pool, writer }
    }

    fn load_collection(conn: &mut SqliteConnection, collection_id: i32) -> Result<FundCollection> {
        let collection = fund_collections::table
            .find(collection_id)
            .select(FundCollectionDB::as_select())
            .first(conn)
            .map_err(StorageError::from)?;
        let members = CollectionMemberDB::belonging_to(&collection)
            .select(CollectionMemberDB::as_select())
            .order(collection_members::id.asc())
            .load(conn)
            .map_err(StorageError::from)?;
        Ok(collection.with_members(members))
    }
}

#[async_trait]
impl WatchlistRepositoryTrait for WatchlistRepository {
    fn list_favorites(&self) -> Result<Vec<FavoriteFund>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = favorite_funds::table
            .order((favorite_funds::added_at.asc(), favorite_funds::code.asc()))
            .select(FavoriteFundDB::as_select())
            .load(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(FavoriteFund::from).collect())
    }

    async fn add_favorite(&self, fund: NewFavoriteFund) -> Result<bool> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<bool> {
                let row: FavoriteFundDB = fund.into();
                let inserted = diesel::insert_or_ignore_into(favorite_funds::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(inserted > 0)
            })
            .await
    }

    async fn remove_favorite(&self, code: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(favorite_funds::table.find(code))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }

    fn list_collections(&self) -> Result<Vec<FundCollection>> {
        let mut conn = get_connection(&self.pool)?;
        let collections = fund_collections::table
            .order(fund_collections::id.asc())
            .select(FundCollectionDB::as_select())
            .load(&mut conn)
            .map_err(StorageError::from)?;
        let members = CollectionMemberDB::belonging_to(&collections)
            .select(CollectionMemberDB::as_select())
            .order(collection_members::id.asc())
            .load(&mut conn)
            .map_err(StorageError::from)?;

        Ok(members
            .grouped_by(&collections)
            .into_iter()
            .zip(collections)
            .map(|(members, collection)| collection.with_members(members))
            .collect())
    }

    async fn create_collection(&self, name: String) -> Result<FundCollection> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<FundCollection> {
                let created = diesel::insert_into(fund_collections::table)
                    .values(&NewFundCollectionDB::named(name))
                    .returning(FundCollectionDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(created.with_members(Vec::new()))
            })
            .await
    }

    async fn rename_collection(&self, collection_id: i32, name: String) -> Result<FundCollection> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<FundCollection> {
                let updated = diesel::update(fund_collections::table.find(collection_id))
                    .set(fund_collections::name.eq(name))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                if updated == 0 {
                    return Err(DatabaseError::NotFound(format!(
                        "collection {}",
                        collection_id
                    ))
                    .into());
                }
                Self::load_collection(conn, collection_id)
            })
            .await
    }

    async fn delete_collection(&self, collection_id: i32) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(
                    collection_members::table
                        .filter(collection_members::collection_id.eq(collection_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;
                Ok(diesel::delete(fund_collections::table.find(collection_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }

    async fn add_to_collection(&self, collection_id: i32, code: String) -> Result<bool> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<bool> {
                let member = NewCollectionMemberDB {
                    collection_id,
                    fund_code: code,
                };
                let inserted = diesel::insert_or_ignore_into(collection_members::table)
                    .values(&member)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(inserted > 0)
            })
            .await
    }

    async fn remove_from_collection(&self, collection_id: i32, code: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(
                    collection_members::table
                        .filter(collection_members::collection_id.eq(collection_id))
                        .filter(collection_members::fund_code.eq(code)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, run_migrations, spawn_writer};
    use fundpulse_core::errors::Error;
    use tempfile::tempdir;

    /// Returns the temp dir too; dropping it deletes the database.
    async fn create_test_repository() -> (WatchlistRepository, tempfile::TempDir) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");

        let pool = create_pool(&db_path.to_string_lossy()).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        let writer = spawn_writer((*pool).clone());

        (WatchlistRepository::new(pool, writer), temp_dir)
    }

    fn fund(code: &str, name: &str) -> NewFavoriteFund {
        NewFavoriteFund {
            code: code.to_string(),
            name: name.to_string(),
            category_label: "股票型".to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_favorite_ignores_duplicates() {
        let (repo, _temp_dir) = create_test_repository().await;

        assert!(repo.add_favorite(fund("110022", "易方达消费行业")).await.unwrap());
        assert!(!repo.add_favorite(fund("110022", "renamed")).await.unwrap());

        let favorites = repo.list_favorites().unwrap();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].name, "易方达消费行业");
        assert_eq!(favorites[0].category_label, "股票型");
    }

    #[tokio::test]
    async fn test_remove_favorite() {
        let (repo, _temp_dir) = create_test_repository().await;
        repo.add_favorite(fund("110022", "a")).await.unwrap();
        repo.add_favorite(fund("161725", "b")).await.unwrap();

        assert_eq!(repo.remove_favorite("110022".to_string()).await.unwrap(), 1);
        assert_eq!(repo.remove_favorite("110022".to_string()).await.unwrap(), 0);

        let codes: Vec<String> = repo
            .list_favorites()
            .unwrap()
            .into_iter()
            .map(|f| f.code)
            .collect();
        assert_eq!(codes, vec!["161725".to_string()]);
    }

    #[tokio::test]
    async fn test_collection_lifecycle() {
        let (repo, _temp_dir) = create_test_repository().await;

        let created = repo.create_collection("养老组合".to_string()).await.unwrap();
        assert_eq!(created.name, "养老组合");
        assert!(created.fund_codes.is_empty());

        assert!(repo.add_to_collection(created.id, "110022".to_string()).await.unwrap());
        assert!(repo.add_to_collection(created.id, "005827".to_string()).await.unwrap());
        assert!(!repo.add_to_collection(created.id, "110022".to_string()).await.unwrap());

        let renamed = repo
            .rename_collection(created.id, "稳健组合".to_string())
            .await
            .unwrap();
        assert_eq!(renamed.name, "稳健组合");
        assert_eq!(renamed.fund_codes, vec!["110022", "005827"]);

        assert_eq!(
            repo.remove_from_collection(created.id, "110022".to_string())
                .await
                .unwrap(),
            1
        );
        let collections = repo.list_collections().unwrap();
        assert_eq!(collections.len(), 1);
        assert_eq!(collections[0].fund_codes, vec!["005827"]);
    }

    #[tokio::test]
    async fn test_fund_can_belong_to_many_collections() {
        let (repo, _temp_dir) = create_test_repository().await;
        let first = repo.create_collection("first".to_string()).await.unwrap();
        let second = repo.create_collection("second".to_string()).await.unwrap();
        let empty = repo.create_collection("empty".to_string()).await.unwrap();

        repo.add_to_collection(first.id, "110022".to_string()).await.unwrap();
        repo.add_to_collection(second.id, "110022".to_string()).await.unwrap();
        repo.add_to_collection(second.id, "161725".to_string()).await.unwrap();

        let collections = repo.list_collections().unwrap();
        let ids: Vec<i32> = collections.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![first.id, second.id, empty.id]);
        assert_eq!(collections[0].fund_codes, vec!["110022"]);
        assert_eq!(collections[1].fund_codes, vec!["110022", "161725"]);
        assert!(collections[2].fund_codes.is_empty());
    }

    #[tokio::test]
    async fn test_delete_collection_removes_memberships() {
        let (repo, _temp_dir) = create_test_repository().await;
        let doomed = repo.create_collection("doomed".to_string()).await.unwrap();
        let kept = repo.create_collection("kept".to_string()).await.unwrap();
        repo.add_to_collection(doomed.id, "110022".to_string()).await.unwrap();
        repo.add_to_collection(kept.id, "110022".to_string()).await.unwrap();

        assert_eq!(repo.delete_collection(doomed.id).await.unwrap(), 1);
        assert_eq!(repo.delete_collection(doomed.id).await.unwrap(), 0);

        let collections = repo.list_collections().unwrap();
        assert_eq!(collections.len(), 1);
        assert_eq!(collections[0].id, kept.id);
        assert_eq!(collections[0].fund_codes, vec!["110022"]);
    }

    #[tokio::test]
    async fn test_rename_missing_collection_is_not_found() {
        let (repo, _temp_dir) = create_test_repository().await;

        let result = repo.rename_collection(42, "ghost".to_string()).await;
        assert!(matches!(
            result,
            Err(Error::Database(DatabaseError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn test_membership_requires_existing_collection() {
        let (repo, _temp_dir) = create_test_repository().await;

        let result = repo.add_to_collection(42, "110022".to_string()).await;
        assert!(matches!(
            result,
            Err(Error::Database(DatabaseError::ForeignKeyViolation(_)))
        ));
        assert!(repo.list_collections().unwrap().is_empty());
    }
}
