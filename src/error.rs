/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use reqwest::StatusCode;
use thiserror::Error;

/// Error type shared by every stage of the snapshot pipeline
#[derive(Debug, Error)]
pub enum AppError {
    /// Transport-level failure talking to the listing API
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The listing API answered with a non-success status
    #[error("unexpected status: {0}")]
    Unexpected(StatusCode),
    /// A response body could not be decoded
    #[error("deserialization error: {0}")]
    Deserialization(String),
    /// JSON encoding or decoding failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// Filesystem failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Failure writing the snapshot file
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    /// A value supplied by the caller or the environment is not usable
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A required configuration value is absent
    #[error("missing configuration: {0}")]
    MissingConfig(String),
    /// Warehouse failure not tied to a specific driver
    #[error("warehouse error: {0}")]
    Warehouse(String),
    /// Database driver failure
    #[cfg(feature = "warehouse")]
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}
