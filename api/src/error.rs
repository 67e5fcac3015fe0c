//! Unified error types for the Storefront API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Errors raised by ports and the data store
//! - `QueryError`: Request parameter validation failures
//! - `AppError`: Application layer errors (wraps the others for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - raised by repositories and services
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Query parameter validation errors
///
/// Raised before any query runs, so an invalid request never reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("cannot search by name and price at the same time")]
    ConflictingParameters,

    #[error("max_price ({max}) cannot be less than min_price ({min})")]
    InvertedPriceRange { min: Decimal, max: Decimal },

    #[error("{0} cannot be less than 0")]
    NegativePrice(&'static str),

    #[error("at least one of {0} is required")]
    MissingParameters(&'static str),

    #[error("{param} must be a number, got '{value}'")]
    InvalidNumber { param: &'static str, value: String },

    #[error("{0} is not supported for this search")]
    UnsupportedParameter(&'static str),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Invalid query: {0}")]
    InvalidQuery(#[from] QueryError),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Error document body for JSON responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub errors: Vec<String>,
}

impl ErrorResponse {
    fn new(message: &str, detail: Option<String>) -> Self {
        Self {
            message: message.to_string(),
            errors: detail.into_iter().collect(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("Not found", Some(msg)),
            ),
            AppError::InvalidQuery(e) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("Invalid query", Some(e.to_string())),
            ),
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Internal server error", None),
                )
            }
            AppError::Domain(DomainError::Internal(msg)) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Internal server error", None),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
