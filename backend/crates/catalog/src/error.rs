//! Catalog Error Types
//!
//! Catalog-specific error variants integrating with the unified
//! `kernel::error::AppError` system. Display strings are the stable
//! client-visible messages of the API contract.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Catalog-specific result type alias
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-specific error variants
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Product lookup by id matched nothing
    #[error("No valid entry found for provided ID")]
    ProductNotFound,

    /// Order creation referenced a product that does not exist
    #[error("Product not found")]
    OrderProductNotFound,

    /// Order lookup by id matched nothing
    #[error("Order not found")]
    OrderNotFound,

    /// Path id is not a valid UUID
    #[error("Invalid id")]
    InvalidId,

    /// Product payload failed validation
    #[error("Invalid product: {0}")]
    InvalidProduct(String),

    /// Update operations were empty or referenced unknown fields
    #[error("Invalid update: {0}")]
    InvalidUpdate(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::ProductNotFound
            | CatalogError::OrderProductNotFound
            | CatalogError::OrderNotFound => StatusCode::NOT_FOUND,
            CatalogError::InvalidId
            | CatalogError::InvalidProduct(_)
            | CatalogError::InvalidUpdate(_) => StatusCode::BAD_REQUEST,
            CatalogError::Database(_) | CatalogError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::ProductNotFound
            | CatalogError::OrderProductNotFound
            | CatalogError::OrderNotFound => ErrorKind::NotFound,
            CatalogError::InvalidId
            | CatalogError::InvalidProduct(_)
            | CatalogError::InvalidUpdate(_) => ErrorKind::BadRequest,
            CatalogError::Database(_) | CatalogError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            CatalogError::Database(e) => {
                tracing::error!(error = %e, "Catalog database error");
            }
            CatalogError::Internal(msg) => {
                tracing::error!(message = %msg, "Catalog internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Catalog error");
            }
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            CatalogError::ProductNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CatalogError::OrderNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(CatalogError::InvalidId.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            CatalogError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_wire_messages() {
        assert_eq!(
            CatalogError::ProductNotFound.to_string(),
            "No valid entry found for provided ID"
        );
        assert_eq!(
            CatalogError::OrderProductNotFound.to_string(),
            "Product not found"
        );
        assert_eq!(CatalogError::OrderNotFound.to_string(), "Order not found");
    }
}
