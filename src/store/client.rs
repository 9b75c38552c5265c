//! The backing store collaborator contract.
//!
//! `StoreClient` is the seam between the transaction layer and the real
//! network client. The transaction layer only ever talks to this trait; the
//! store's protocol, connection pooling, and wire serialization all live
//! behind it.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::store::error::StoreResult;
use crate::store::types::{Key, Ttl, Value};

/// Asynchronous client for a memcached-style key-value store.
///
/// All methods are non-blocking; completion is signalled through the returned
/// future. The client owns deadlines and reconnection policy — this layer
/// imposes none.
#[async_trait]
pub trait StoreClient: Send + Sync {
    /// Fetch a single key. `None` means the key does not exist.
    async fn get(&self, key: &Key) -> StoreResult<Option<Value>>;

    /// Fetch several keys in one round trip.
    ///
    /// The result maps each key that exists to its value; keys that do not
    /// exist are simply absent from the map.
    async fn get_multi(&self, keys: &[Key]) -> StoreResult<HashMap<Key, Value>>;

    /// Store a value under a key with the given expiry.
    async fn set(&self, key: &Key, value: &Value, ttl: Ttl) -> StoreResult<()>;

    /// Delete a key. Deleting an absent key is not an error.
    async fn del(&self, key: &Key) -> StoreResult<()>;

    /// Dispatch a low-level command that has no dedicated method.
    ///
    /// The client is responsible for encoding `request.command` on the wire.
    async fn command(&self, request: CommandRequest) -> StoreResult<()>;
}

/// What kind of operation a [`CommandRequest`] carries.
///
/// Touch is currently the only operation without a dedicated `StoreClient`
/// method. The enum stays closed so command handling can match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Refresh a key's expiry without changing its value.
    Touch,
}

/// A low-level command descriptor for [`StoreClient::command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    /// The command text, e.g. `"touch user:1 60"`.
    pub command: String,
    /// The key the command operates on.
    pub key: Key,
    /// What the command does, for clients that route by kind.
    pub kind: CommandKind,
}

impl CommandRequest {
    /// Build a touch request for `key` with the given expiry.
    pub fn touch(key: Key, ttl: Ttl) -> Self {
        Self {
            command: format!("touch {} {}", key, ttl),
            key,
            kind: CommandKind::Touch,
        }
    }
}
