//! memtx - Transactional Buffering for Remote Key-Value Stores
//!
//! This crate provides a client-side transaction layer in front of a
//! memcached-style backing store. Writes (`set`, `del`, `touch`) are buffered
//! in memory and only replayed against the store on `commit`; reads observe
//! the buffered writes immediately (read-your-writes) and fall back to the
//! store on a miss. `rollback` discards everything without a single network
//! round trip.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use memtx::store::{Key, MemoryStore, Ttl};
//! use memtx::transaction::{Transaction, TransactionConfig};
//! use serde_json::json;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(MemoryStore::new());
//! let mut tx = Transaction::new(store, TransactionConfig::default());
//!
//! let key = Key::new("user:1")?;
//! tx.set(key.clone(), json!({"name": "Alice"}), Ttl::seconds(60));
//!
//! // Visible immediately, without touching the store.
//! assert!(tx.get(&key).await?.is_some());
//!
//! // One store call per queued operation, nothing before this point.
//! tx.commit().await?;
//! # Ok(())
//! # }
//! ```

pub mod store;
pub mod transaction;
