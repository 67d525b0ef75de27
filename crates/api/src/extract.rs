//! Request extractors that report rejections through [`AppError`].
//!
//! Axum's stock `Path` and `Json` rejections answer with plain-text bodies
//! and, for JSON data errors, status 422. These wrappers turn every parse
//! failure into a 400 with the standard JSON error body, before any handler
//! code (and therefore any store call) runs.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use inventory_core::error::CoreError;
use inventory_core::product::{ProductInput, ProductPayload};
use inventory_core::types::DbId;

use crate::error::AppError;

/// A product id taken from the `{id}` path segment.
#[derive(Debug, Clone, Copy)]
pub struct ProductId(pub DbId);

impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e: PathRejection| {
                AppError::Core(CoreError::Validation(format!(
                    "Invalid product id: {}",
                    e.body_text()
                )))
            })?;

        raw.parse::<DbId>().map(ProductId).map_err(|_| {
            AppError::Core(CoreError::Validation(format!(
                "Invalid product id '{raw}': expected a base-10 integer"
            )))
        })
    }
}

/// A product body that has passed field validation.
#[derive(Debug, Clone)]
pub struct ValidProduct(pub ProductInput);

impl<S> FromRequest<S> for ValidProduct
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<ProductPayload>::from_request(req, state)
            .await
            .map_err(|e: JsonRejection| {
                AppError::Core(CoreError::Validation(format!(
                    "Malformed request body: {}",
                    e.body_text()
                )))
            })?;

        Ok(ValidProduct(payload.validate()?))
    }
}
