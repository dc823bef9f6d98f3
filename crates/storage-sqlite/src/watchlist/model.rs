//! Database models for favorites and fund collections.

use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;

use fundpulse_core::watchlist::{FavoriteFund, FundCollection, NewFavoriteFund};

#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::favorite_funds)]
#[diesel(primary_key(code))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct FavoriteFundDB {
    pub code: String,
    pub name: String,
    pub category_label: String,
    pub added_at: NaiveDateTime,
}

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::fund_collections)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct FundCollectionDB {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::fund_collections)]
pub struct NewFundCollectionDB {
    pub name: String,
    pub created_at: NaiveDateTime,
}

/// One fund in one collection. `id` preserves insertion order.
#[derive(Queryable, Identifiable, Associations, Selectable, PartialEq, Debug, Clone)]
#[diesel(belongs_to(FundCollectionDB, foreign_key = collection_id))]
#[diesel(table_name = crate::schema::collection_members)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CollectionMemberDB {
    pub id: i32,
    pub collection_id: i32,
    pub fund_code: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::collection_members)]
pub struct NewCollectionMemberDB {
    pub collection_id: i32,
    pub fund_code: String,
}

impl From<FavoriteFundDB> for FavoriteFund {
    fn from(db: FavoriteFundDB) -> Self {
        Self {
            code: db.code,
            name: db.name,
            category_label: db.category_label,
            added_at: db.added_at,
        }
    }
}

impl From<NewFavoriteFund> for FavoriteFundDB {
    fn from(fund: NewFavoriteFund) -> Self {
        Self {
            code: fund.code,
            name: fund.name,
            category_label: fund.category_label,
            added_at: Utc::now().naive_utc(),
        }
    }
}

impl NewFundCollectionDB {
    pub fn named(name: String) -> Self {
        Self {
            name,
            created_at: Utc::now().naive_utc(),
        }
    }
}

impl FundCollectionDB {
    pub fn with_members(self, members: Vec<CollectionMemberDB>) -> FundCollection {
        FundCollection {
            id: self.id,
            name: self.name,
            created_at: self.created_at,
            fund_codes: members.into_iter().map(|m| m.fund_code).collect(),
        }
    }
}
