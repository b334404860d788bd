//! Error types for transaction building

use thiserror::Error;

use crate::batch::BatchError;

/// Errors from unsigned transaction construction
#[derive(Debug, Clone, Error)]
pub enum TxBuilderError {
    /// More arguments than one application call accepts
    #[error("Application call would carry {count} option arguments, limit is {limit}")]
    TooManyArgs { count: usize, limit: usize },

    /// Batching failure while validating option arguments
    #[error(transparent)]
    Batch(#[from] BatchError),
}
