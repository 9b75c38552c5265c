//! Pending operation records.

use crate::store::{Ttl, Value};

/// A buffered mutation waiting for commit.
///
/// The key is not part of the operation; it is the queue's map key, which is
/// what guarantees at most one pending operation per key. The enum is closed:
/// commit matches exhaustively, so an "unknown operation" case cannot exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingOp {
    /// Store `value` with expiry `ttl`.
    Set { value: Value, ttl: Ttl },
    /// Remove the key.
    Delete,
    /// Refresh the key's expiry without changing its value.
    Touch { ttl: Ttl },
}

impl PendingOp {
    /// short name for debug traces
    pub fn kind(&self) -> &'static str {
        match self {
            PendingOp::Set { .. } => "set",
            PendingOp::Delete => "del",
            PendingOp::Touch { .. } => "touch",
        }
    }
}
