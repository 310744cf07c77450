//! Unified error types for the customer API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Persistence port errors
//! - `CustomerDataError`: Customer service failures
//! - `ConfigError`: Startup configuration errors
//! - `AppError`: HTTP layer errors (wraps service errors for responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - raised by repository implementations
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity already exists: {0}")]
    AlreadyExists(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Serialization(e.to_string())
    }
}

/// Every failure the customer service can report
#[derive(Debug, Error)]
pub enum CustomerDataError {
    #[error("Customer Not Found")]
    NotFound,

    #[error("Customer Already Exist")]
    AlreadyExists,

    #[error("Customer Insert Failed")]
    InsertFailed,

    #[error("{0}")]
    Wrapped(#[source] DomainError),
}

impl From<DomainError> for CustomerDataError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::AlreadyExists(_) => CustomerDataError::AlreadyExists,
            e => CustomerDataError::Wrapped(e),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Customer(#[from] CustomerDataError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Customer(CustomerDataError::NotFound) => {
                (StatusCode::NOT_FOUND, "Not found", Some(self.to_string()))
            }
            AppError::Customer(CustomerDataError::AlreadyExists) => {
                (StatusCode::CONFLICT, "Already exists", Some(self.to_string()))
            }
            AppError::Customer(CustomerDataError::InsertFailed) => {
                tracing::error!("Insert failed: store returned no document");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    Some(self.to_string()),
                )
            }
            AppError::Customer(CustomerDataError::Wrapped(e)) => {
                tracing::error!("Persistence error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
