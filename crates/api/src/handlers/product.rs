//! Handlers for the `/products` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use inventory_db::models::product::Product;

use crate::error::AppResult;
use crate::extract::{ProductId, ValidProduct};
use crate::state::AppState;

/// POST /products
pub async fn create(
    State(state): State<AppState>,
    ValidProduct(input): ValidProduct,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = state.store.create(&input).await?;

    tracing::info!(product_id = product.id, name = %product.name, "Product created");

    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /products
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = state.store.list().await?;
    Ok(Json(products))
}

/// GET /products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> AppResult<Json<Product>> {
    let product = state.store.get(id).await?;
    Ok(Json(product))
}

/// PUT /products/{id}
///
/// Replaces name, description, price and quantity. Unknown ids are a 404.
pub async fn update(
    State(state): State<AppState>,
    ProductId(id): ProductId,
    ValidProduct(input): ValidProduct,
) -> AppResult<Json<Product>> {
    let product = state.store.update(id, &input).await?;

    tracing::info!(product_id = id, "Product updated");

    Ok(Json(product))
}

/// DELETE /products/{id}
///
/// Idempotent: answers 204 whether or not the row existed.
pub async fn delete(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> AppResult<StatusCode> {
    let removed = state.store.delete(id).await?;

    tracing::info!(product_id = id, removed, "Product delete requested");

    Ok(StatusCode::NO_CONTENT)
}
