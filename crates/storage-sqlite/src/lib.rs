//! SQLite storage implementation for FundPulse.
//!
//! This crate is the only place in the workspace where Diesel appears. It
//! implements the watchlist repository trait defined in `fundpulse-core`:
//! - Database connection pooling and per-connection pragmas
//! - Embedded Diesel migrations
//! - A single-writer actor that serializes all mutations
//! - The favorites / collections repository
//!
//! ```text
//! core (WatchlistRepositoryTrait)
//!                  │
//!                  ▼
//!          storage-sqlite (this crate)
//!                  │
//!                  ▼
//!              SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;
pub mod watchlist;

pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, spawn_writer, DbConnection,
    DbPool, WriteHandle,
};

pub use errors::StorageError;
pub use watchlist::WatchlistRepository;

pub use fundpulse_core::errors::{DatabaseError, Error, Result};
