use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use inventory_core::error::CoreError;
use inventory_db::StoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for storage
/// faults. This is the only place internal error kinds become HTTP status
/// codes; every response body carries an `"error"` message.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `inventory_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage fault. `StoreError::NotFound` never lands here; see the
    /// `From<StoreError>` impl.
    #[error(transparent)]
    Store(StoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => AppError::Core(CoreError::NotFound {
                entity: "Product",
                id,
            }),
            other => AppError::Store(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    json!({
                        "error": format!("{entity} with id {id} not found"),
                        "code": "NOT_FOUND",
                    }),
                ),
                CoreError::Validation(msg) => (
                    StatusCode::BAD_REQUEST,
                    json!({ "error": msg, "code": "VALIDATION_ERROR" }),
                ),
                CoreError::InvalidFields(fields) => (
                    StatusCode::BAD_REQUEST,
                    json!({
                        "error": core.to_string(),
                        "code": "VALIDATION_ERROR",
                        "fields": fields,
                    }),
                ),
            },

            // Storage messages are passed through verbatim.
            AppError::Store(err) => {
                tracing::error!(error = %err, "Storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": err.to_string(), "code": "STORAGE_ERROR" }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
