use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use strum::{AsRefStr, Display};
use thiserror::Error;
use validator::ValidationErrors;

use crate::models::ProductId;

#[derive(Debug, Error)]
pub enum ProductError {
    /// Field rule failures, keyed by field.
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Product {0} not found")]
    NotFound(ProductId),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Machine-checkable category of a [`ProductError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ProductErrorKind {
    Validation,
    NotFound,
    Storage,
}

impl ProductError {
    pub fn kind(&self) -> ProductErrorKind {
        match self {
            ProductError::Validation(_) => ProductErrorKind::Validation,
            ProductError::NotFound(_) => ProductErrorKind::NotFound,
            ProductError::Storage(_) => ProductErrorKind::Storage,
        }
    }
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::Validation(errors) => AppError::ValidationError(errors),
            ProductError::NotFound(id) => AppError::NotFound(format!("Product {id} not found")),
            ProductError::Storage(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

impl From<mongodb::error::Error> for ProductError {
    fn from(err: mongodb::error::Error) -> Self {
        ProductError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use http_body_util::BodyExt;

    fn price_errors() -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.add("price", validator::ValidationError::new("invalid_price"));
        errors
    }

    #[test]
    fn test_kind_and_display() {
        let id = ProductId::new();
        let err = ProductError::NotFound(id);
        assert_eq!(err.kind(), ProductErrorKind::NotFound);
        assert_eq!(err.to_string(), format!("Product {id} not found"));
        assert_eq!(ProductErrorKind::NotFound.to_string(), "not_found");
        assert_eq!(ProductError::Storage("x".into()).kind().as_ref(), "storage");
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                ProductError::Validation(price_errors()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                ProductError::NotFound(ProductId::new()),
                StatusCode::NOT_FOUND,
            ),
            (
                ProductError::Storage("write failed".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_validation_errors_convert() {
        let err = ProductError::from(price_errors());
        assert_eq!(err.kind(), ProductErrorKind::Validation);
        assert!(err.to_string().contains("price"));
    }

    #[tokio::test]
    async fn test_validation_response_lists_fields() {
        let response = ProductError::from(price_errors()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert_eq!(body["details"]["price"][0]["code"], "invalid_price");
    }
}
