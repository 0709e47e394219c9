//! Record store contract and implementations.
//!
//! # Tables
//!
//! - `users` - identity records, including the nullable authorization
//!   challenge reference
//! - `user_flex_ids` - flexible-id mappings (email, phone) onto user ids,
//!   append-only so reassigned handles resolve to the latest owner
//! - `cards` - tokenized payment cards
//! - `addresses` - user and card addresses
//! - `sessions` - dialogue-engine sessions, bulk-deleted on invalidation
//!
//! # Migrations
//!
//! Migrations live in `crates/identity/migrations/` and are embedded in
//! [`MIGRATOR`]; the consuming service runs them at startup.

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub mod memory;
pub mod pg;
pub mod store;

pub use memory::MemoryStore;
pub use pg::PgStore;
pub use store::RecordStore;

/// Embedded migrations for the identity schema.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// Errors surfaced by a record store.
///
/// A "no matching row" condition on lookups is `Ok(None)`, not an error;
/// `NotFound` is reserved for writes and re-reads that target a row by id
/// and find it missing.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the store is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// A row targeted by id does not exist.
    #[error("not found")]
    NotFound,
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
