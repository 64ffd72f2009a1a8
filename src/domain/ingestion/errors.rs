//! Ingestion Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestionError {
    #[error("Request body exceeds limit of {limit} bytes")]
    PayloadTooLarge { limit: u64 },

    #[error("Invalid body limit: {0}")]
    InvalidLimit(String),
}
