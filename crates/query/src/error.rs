//! Query error types.

use record_store::LoadError;
use thiserror::Error;

use crate::record::RowFault;

/// Errors that can occur while answering a query.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The record set could not be loaded from storage.
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// The requested rank does not exist in the ranking.
    #[error("Invalid rank {n}: ranking holds {available} software")]
    InvalidRank { n: i64, available: usize },

    /// A row failed coercion while the fault policy is `Abort`.
    #[error("Row fault: {0}")]
    RowFault(RowFault),
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, QueryError>;
