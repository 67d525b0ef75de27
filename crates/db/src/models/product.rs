//! Product entity model.

use inventory_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `products` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
