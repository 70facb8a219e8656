//! Error types for the Storefront API service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use promptdeck_billing_core::BillingError;
use promptdeck_catalog_core::CatalogError;
use serde::Serialize;

/// API error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// API error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Catalog error")]
    Catalog(#[from] CatalogError),

    #[error("Billing error")]
    Billing(#[from] BillingError),

    #[error("Database error")]
    Database(#[from] promptdeck_db::DbError),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Catalog(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            Self::Catalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
            // A missing customer reference is the caller acting out of order
            // (portal before any purchase), not a lookup miss
            Self::Billing(BillingError::CustomerNotFound) => StatusCode::BAD_REQUEST,
            Self::Billing(e) if e.is_rejection() => StatusCode::BAD_REQUEST,
            Self::Billing(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            Self::Billing(_) | Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Catalog(e) if e.is_not_found() => "NOT_FOUND",
            Self::Billing(BillingError::CustomerNotFound) => "NO_BILLING_CUSTOMER",
            Self::Billing(BillingError::MissingPrice) => "MISSING_PRICE",
            Self::Billing(e) if e.is_rejection() => "BAD_REQUEST",
            Self::Billing(e) if e.is_not_found() => "NOT_FOUND",
            Self::Catalog(_) | Self::Billing(_) | Self::Database(_) => "INTERNAL_ERROR",
        }
    }

    /// The message sent to clients. Internal failures get a generic message;
    /// their detail stays in the logs.
    fn public_message(&self) -> String {
        match self.status_code() {
            StatusCode::INTERNAL_SERVER_ERROR => "Internal server error".to_string(),
            _ => match self {
                Self::Catalog(e) => e.to_string(),
                Self::Billing(e) => e.to_string(),
                _ => self.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = ?self, "Internal API error");
        }

        let body = ErrorResponse {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                message: self.public_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
