//! backing store abstraction for memtx
//!
//! This module defines the contract between the transaction layer and the
//! real key-value store client. The transaction layer uses this API and never
//! touches a socket directly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       StoreClient                           │
//! │   (async trait: get, get_multi, set, del, command)          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!        ┌─────────────────────┼─────────────────────┐
//!        │                     │                     │
//!        ▼                     ▼                     ▼
//!  ┌─────────────┐       ┌─────────────┐       ┌─────────────┐
//!  │   types     │       │   error     │       │   memory    │
//!  │ (Key, Ttl)  │       │ (StoreError)│       │ (test impl) │
//!  └─────────────┘       └─────────────┘       └─────────────┘
//! ```
//!
//! A production deployment supplies its own `StoreClient` implementation
//! wrapping a real network client; [`MemoryStore`] is the in-process stand-in.

mod client;
mod error;
mod memory;
mod types;

// Re-export public API
pub use client::{CommandKind, CommandRequest, StoreClient};
pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use types::{InvalidKeyError, Key, Ttl, Value};
