//! Backing store error types
//!
//! All errors a `StoreClient` implementation can report are defined here.
//! We use `thiserror` for ergonomic error definition and better error messages

use thiserror::Error;

/// the main error type for backing store operations
///
/// The transaction layer never inspects, swallows, or retries these; they are
/// propagated verbatim to whoever issued the read or the commit.
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O error talking to the server (connect, read, write)
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// the server replied with something the client could not parse
    #[error("protocol error: {0}")]
    Protocol(String),

    /// the server reported an error of its own
    #[error("server error: {0}")]
    Server(String),
}

impl StoreError {
    /// check if this error originated on the server side
    pub fn is_server(&self) -> bool {
        matches!(self, StoreError::Server(_))
    }
}

/// result type alias for backing store operations
pub type StoreResult<T> = Result<T, StoreError>;
