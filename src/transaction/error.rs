//! Transaction error types.

use thiserror::Error;

use crate::store::{Key, StoreError};

/// Result type for transaction operations.
pub type TransactionResult<T> = Result<T, TransactionError>;

/// Errors that can occur during transaction operations.
#[derive(Debug, Error)]
pub enum TransactionError {
    /// Backing store error, passed through unmodified.
    ///
    /// Reads and single-operation commits report store failures this way, so
    /// the caller sees exactly what the store client reported.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// A multi-operation commit failed partway through its replay.
    ///
    /// Operations are replayed sequentially in key order; `applied` of
    /// `total` operations had already succeeded when the operation on `key`
    /// failed. The store now reflects those applied operations — this layer
    /// does not undo them. The transaction's queue is left intact, so the
    /// caller may retry `commit` or `rollback` explicitly.
    #[error("commit failed on key {key} ({applied} of {total} operations applied): {source}")]
    CommitFailed {
        key: Key,
        applied: usize,
        total: usize,
        source: StoreError,
    },
}

impl TransactionError {
    /// The underlying backing store error.
    pub fn store_error(&self) -> &StoreError {
        match self {
            TransactionError::Store(source) => source,
            TransactionError::CommitFailed { source, .. } => source,
        }
    }

    /// check if some queued operations reached the store before the failure
    pub fn is_partial_commit(&self) -> bool {
        matches!(self, TransactionError::CommitFailed { applied, .. } if *applied > 0)
    }
}
