//! Error types shared by the record store, the services and the HTTP layer.
//!
//! - [`StorageError`] - flat-file collection failures
//! - [`AppError`] - everything a service can return to a handler
//!
//! `StorageError` converts into `AppError` automatically, so `?` works from
//! the store all the way up to an actix handler.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use rust_decimal::Decimal;
use serde_json::json;
use thiserror::Error;

/// Failures of a single JSON-backed collection.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No record with this id in the collection.
    #[error("{collection} by id: {id} not found")]
    NotFound { collection: &'static str, id: i64 },

    /// Reading or replacing the backing file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors surfaced by the services and rendered by actix.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("insufficient funds: account {account_id} has balance {balance}, requested {requested}")]
    InsufficientFunds {
        account_id: i64,
        balance: Decimal,
        requested: Decimal,
    },

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Storage error: {0}")]
    Storage(StorageError),

    #[error("{0}")]
    Internal(String),
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { .. } => AppError::NotFound(err.to_string()),
            other => AppError::Storage(other),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Rejection for a balance change that leaves the `Decimal` range.
pub fn balance_overflow(account_id: i64) -> AppError {
    AppError::Validation(format!("balance of account {} would overflow", account_id))
}

pub type StorageResult<T> = Result<T, StorageError>;

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InsufficientFunds { .. } | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Storage(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "message": self.to_string(),
            "status": "error"
        }))
    }
}
