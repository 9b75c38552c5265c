//! An in-process store for tests, examples, and dry runs.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::store::client::{CommandKind, CommandRequest, StoreClient};
use crate::store::error::{StoreError, StoreResult};
use crate::store::types::{Key, Ttl, Value};

/// An in-memory [`StoreClient`] implementation.
///
/// Behaves like a single-node store with no network: every call succeeds and
/// completes immediately. TTLs are recorded but never enforced — nothing
/// expires. Useful as a test double and for running transaction code paths
/// without a live server.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<Key, (Value, Ttl)>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// check if the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// The recorded TTL for a key, if the key exists.
    pub fn ttl_of(&self, key: &Key) -> Option<Ttl> {
        self.entries.lock().get(key).map(|(_, ttl)| *ttl)
    }
}

#[async_trait]
impl StoreClient for MemoryStore {
    async fn get(&self, key: &Key) -> StoreResult<Option<Value>> {
        Ok(self.entries.lock().get(key).map(|(value, _)| value.clone()))
    }

    async fn get_multi(&self, keys: &[Key]) -> StoreResult<HashMap<Key, Value>> {
        let entries = self.entries.lock();
        Ok(keys
            .iter()
            .filter_map(|key| entries.get(key).map(|(value, _)| (key.clone(), value.clone())))
            .collect())
    }

    async fn set(&self, key: &Key, value: &Value, ttl: Ttl) -> StoreResult<()> {
        self.entries.lock().insert(key.clone(), (value.clone(), ttl));
        Ok(())
    }

    async fn del(&self, key: &Key) -> StoreResult<()> {
        self.entries.lock().remove(key);
        Ok(())
    }

    async fn command(&self, request: CommandRequest) -> StoreResult<()> {
        match request.kind {
            CommandKind::Touch => {
                let ttl = parse_touch_ttl(&request.command)?;
                if let Some(entry) = self.entries.lock().get_mut(&request.key) {
                    entry.1 = ttl;
                }
                Ok(())
            }
        }
    }
}

/// Extract the TTL from a `"touch <key> <ttl>"` command line.
fn parse_touch_ttl(command: &str) -> StoreResult<Ttl> {
    let ttl = command
        .rsplit(' ')
        .next()
        .and_then(|raw| raw.parse::<u32>().ok())
        .ok_or_else(|| StoreError::Protocol(format!("malformed touch command: {command}")))?;
    Ok(Ttl::seconds(ttl))
}
