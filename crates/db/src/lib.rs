//! Data Store Gateway for product inventory records.
//!
//! [`repositories::ProductRepo`] holds the SQL. [`store::ProductStore`] is the
//! seam the HTTP layer depends on, with a Postgres and an in-memory
//! implementation.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod store;

pub use store::{DeadlineStore, MemoryProductStore, PgProductStore, ProductStore, StoreError};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
