//! Error types for the surfsup application.
//!
//! This module defines a single error enum covering the failure modes of the
//! server, from configuration problems at startup to storage failures while a
//! request is being served.

use axum::http::StatusCode;
use thiserror::Error;

/// The main error type for surfsup operations.
#[derive(Error, Debug)]
pub enum SurfsUpError {
    /// The dataset contains no observations for a query that needs at least one
    #[error("Empty dataset: {message}")]
    EmptyDataset { message: String },

    /// The storage layer could not execute a query
    #[error("Storage unavailable: {0}")]
    Storage(#[from] sqlx::Error),

    /// Stored values do not have the expected shape (e.g. unparseable dates)
    #[error("Malformed dataset: {message}")]
    MalformedDataset { message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Invalid parameter errors
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server errors
    #[error("Server error: {message}")]
    Server { message: String },
}

impl SurfsUpError {
    /// HTTP status used when this error escapes a request handler.
    ///
    /// Only caller mistakes map to 4xx; everything else is a server fault.
    pub fn status_code(&self) -> StatusCode {
        match self {
            SurfsUpError::InvalidParameter { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Convenience type alias for Results with SurfsUpError
pub type Result<T> = std::result::Result<T, SurfsUpError>;
