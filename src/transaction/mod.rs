//! Transactional buffering for memtx.
//!
//! This module implements the client-side transaction: writes are queued in
//! memory, reads merge the queue and a value cache over the backing store,
//! and `commit` replays the queue while `rollback` throws it away.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Transaction                           │
//! │   (get/get_multi/set/del/touch + commit/rollback)           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!        ┌─────────────────────┼─────────────────────┐
//!        │                     │                     │
//!        ▼                     ▼                     ▼
//!  ┌─────────────┐       ┌─────────────┐       ┌─────────────┐
//!  │    Queue    │       │    Cache    │       │ StoreClient │
//!  │ (PendingOp  │       │ (key→value) │       │ (collabora- │
//!  │  per key)   │       │             │       │  tor trait) │
//!  └─────────────┘       └─────────────┘       └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use memtx::transaction::{Transaction, TransactionConfig};
//!
//! let mut tx = Transaction::new(client, TransactionConfig::default());
//!
//! // Buffer writes; nothing hits the store yet
//! tx.set(key("user:1"), json!({"name": "Alice"}), Ttl::seconds(60));
//! tx.del(key("user:2"));
//!
//! // Reads see the buffered writes immediately
//! let user = tx.get(&key("user:1")).await?;
//!
//! // Replay everything, or discard it
//! tx.commit().await?;  // or tx.rollback();
//! ```

mod config;
mod context;
mod error;
mod op;

pub use config::{DebugSink, TransactionConfig};
pub use context::Transaction;
pub use error::{TransactionError, TransactionResult};
pub use op::PendingOp;
