//! The transaction itself: pending-operation queue, value cache, and the
//! merge/replay algorithms on top of them.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::store::{CommandRequest, Key, StoreClient, StoreResult, Ttl, Value};
use crate::transaction::config::TransactionConfig;
use crate::transaction::error::{TransactionError, TransactionResult};
use crate::transaction::op::PendingOp;

/// A client-side transaction over a remote key-value store.
///
/// Writes are buffered: `set`, `del`, and `touch` mutate only in-memory
/// state and always succeed. Reads merge that buffered state over the
/// backing store — a queued delete hides the key, a queued set is visible
/// immediately, and anything unresolved is fetched (once) and cached.
/// `commit` replays the queue against the store; `rollback` discards it.
///
/// One transaction belongs to one unit of work at a time; it is not a
/// shared-state concurrent object. After `rollback` the same instance can be
/// reused for a fresh unit of work. `commit` deliberately leaves the queue
/// and cache in place (success or failure), so a failed commit can be
/// retried or rolled back explicitly.
pub struct Transaction {
    /// At most one pending operation per key. BTreeMap so commit replays in
    /// a deterministic, sorted-by-key order.
    queue: BTreeMap<Key, PendingOp>,
    /// Last known authoritative value per key within this transaction.
    cache: HashMap<Key, Value>,
    client: Arc<dyn StoreClient>,
    config: TransactionConfig,
}

impl Transaction {
    /// Create a transaction over the given store client.
    pub fn new(client: Arc<dyn StoreClient>, config: TransactionConfig) -> Self {
        Self {
            queue: BTreeMap::new(),
            cache: HashMap::new(),
            client,
            config,
        }
    }

    /// Number of queued operations waiting for commit.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// check if any writes are buffered
    pub fn is_dirty(&self) -> bool {
        !self.queue.is_empty()
    }

    // ==================== Read Path ====================

    /// Read a single key, observing buffered writes first.
    ///
    /// A queued delete returns `None` and a cached value returns directly;
    /// neither touches the store. Only an unresolved key costs a store round
    /// trip, and the fetched value is cached for the rest of the transaction.
    /// Store misses are not cached: a later `get` asks again.
    pub async fn get(&mut self, key: &Key) -> TransactionResult<Option<Value>> {
        if let Some(PendingOp::Delete) = self.queue.get(key) {
            return Ok(None);
        }

        if let Some(value) = self.cache.get(key) {
            return Ok(Some(value.clone()));
        }

        self.config.debug.trace(|| format!("memtx: getting key {key}"));

        let value = self.client.get(key).await?;
        if let Some(value) = &value {
            self.cache.insert(key.clone(), value.clone());
        }
        Ok(value)
    }

    /// Read several keys, observing buffered writes first.
    ///
    /// Returns a map containing only the keys that exist. All unresolved
    /// keys are batched into at most one store round trip; if every key is
    /// already resolved (cached or queued as deleted) the store is not
    /// contacted at all. A store error aborts the whole call — values that
    /// arrived before the error may remain cached, but no result is
    /// returned.
    pub async fn get_multi(&mut self, keys: &[Key]) -> TransactionResult<HashMap<Key, Value>> {
        let mut result = HashMap::new();
        let mut unresolved: Vec<Key> = Vec::new();

        for key in keys {
            if let Some(PendingOp::Delete) = self.queue.get(key) {
                continue;
            }

            if let Some(value) = self.cache.get(key) {
                result.insert(key.clone(), value.clone());
            } else if !unresolved.contains(key) {
                unresolved.push(key.clone());
            }
        }

        if unresolved.is_empty() {
            return Ok(result);
        }

        self.config.debug.trace(|| format!("memtx: getting keys {unresolved:?}"));

        let fetched = self.client.get_multi(&unresolved).await?;
        for (key, value) in fetched {
            self.cache.insert(key.clone(), value.clone());
            result.insert(key, value);
        }
        Ok(result)
    }

    // ==================== Write Path ====================

    /// Buffer a set. Replaces any pending operation on the key and makes the
    /// value immediately visible to reads. Never touches the store.
    pub fn set(&mut self, key: Key, value: Value, ttl: Ttl) {
        self.cache.insert(key.clone(), value.clone());
        self.queue.insert(key, PendingOp::Set { value, ttl });
    }

    /// Buffer a delete. Replaces any pending operation on the key and hides
    /// it from reads, evicting the cached value so a stale entry can never
    /// resurface. Never touches the store.
    pub fn del(&mut self, key: Key) {
        self.cache.remove(&key);
        self.queue.insert(key, PendingOp::Delete);
    }

    /// Buffer an expiry refresh without changing the value.
    ///
    /// Merges with whatever is already queued on the key: a pending set
    /// absorbs the new ttl (commit emits one set, not a set plus a touch), a
    /// pending delete wins outright, and a pending touch is overwritten.
    pub fn touch(&mut self, key: Key, ttl: Ttl) {
        match self.queue.get_mut(&key) {
            Some(PendingOp::Set { ttl: pending, .. }) => *pending = ttl,
            Some(PendingOp::Delete) => {}
            Some(PendingOp::Touch { ttl: pending }) => *pending = ttl,
            None => {
                self.queue.insert(key, PendingOp::Touch { ttl });
            }
        }
    }

    // ==================== Commit / Rollback ====================

    /// Replay every queued operation against the backing store.
    ///
    /// Operations run strictly sequentially in key order, so two operations
    /// on related keys have a defined relative order. The first store error
    /// stops the replay: a single-operation commit forwards it unchanged as
    /// [`TransactionError::Store`], a batch reports the failing key and how
    /// many operations had already been applied. No automatic rollback
    /// happens on failure — the queue and cache stay intact so the caller
    /// can retry or roll back.
    ///
    /// A successful commit also leaves the queue in place; start a new unit
    /// of work with a fresh transaction or an explicit [`rollback`].
    ///
    /// [`rollback`]: Transaction::rollback
    pub async fn commit(&self) -> TransactionResult<()> {
        let total = self.queue.len();

        for (applied, (key, op)) in self.queue.iter().enumerate() {
            self.exec(key, op).await.map_err(|source| {
                if total == 1 {
                    // Hot path: a lone operation forwards its store error
                    // unchanged, with no batch bookkeeping wrapped around it.
                    TransactionError::Store(source)
                } else {
                    TransactionError::CommitFailed { key: key.clone(), applied, total, source }
                }
            })?;
        }
        Ok(())
    }

    /// Execute one queued operation, or report it when simulating.
    async fn exec(&self, key: &Key, op: &PendingOp) -> StoreResult<()> {
        if self.config.simulate {
            self.config
                .debug
                .report(|| format!("memtx: simulating {} on key {key}", op.kind()));
            return Ok(());
        }

        match op {
            PendingOp::Set { value, ttl } => {
                self.config.debug.trace(|| {
                    format!("memtx: setting key {key} to value {value} with TTL {ttl}")
                });
                self.client.set(key, value, *ttl).await
            }
            PendingOp::Delete => {
                self.config.debug.trace(|| format!("memtx: deleting key {key}"));
                self.client.del(key).await
            }
            PendingOp::Touch { ttl } => {
                self.config
                    .debug
                    .trace(|| format!("memtx: touching key {key} with TTL {ttl}"));
                // Touch has no dedicated verb; it goes through the generic
                // command path and the client encodes it on the wire.
                self.client.command(CommandRequest::touch(key.clone(), *ttl)).await
            }
        }
    }

    /// Discard all buffered state without any store interaction.
    ///
    /// Afterward the transaction behaves as freshly constructed and may be
    /// reused for a new unit of work.
    pub fn rollback(&mut self) {
        self.queue.clear();
        self.cache.clear();
    }
}
