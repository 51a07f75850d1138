//! Collection Lock Registry
//!
//! One exclusive lock per collection name, created on first use and kept
//! for the lifetime of the registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

/// Lock shared by every writer/deleter of one collection
pub type CollectionLock = Arc<Mutex<()>>;

/// Maps collection names to their locks
///
/// ## Concurrency:
/// - `locks`: the registry mutex is held only for lookup-or-insert,
///   never while the caller does I/O under the returned collection lock
/// - Entries are never removed, so every caller naming a collection gets
///   the same lock object
#[derive(Debug, Default)]
pub struct LockRegistry {
    locks: Mutex<HashMap<String, CollectionLock>>,
}

impl LockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the lock for `collection`, creating it if this is the first use
    pub fn get_or_create(&self, collection: &str) -> CollectionLock {
        let mut locks = self.locks.lock();
        if let Some(lock) = locks.get(collection) {
            return Arc::clone(lock);
        }
        let lock = CollectionLock::default();
        locks.insert(collection.to_string(), Arc::clone(&lock));
        lock
    }

    /// Number of collections that have a lock
    pub fn len(&self) -> usize {
        self.locks.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `collection` has been locked at least once
    pub fn contains(&self, collection: &str) -> bool {
        self.locks.lock().contains_key(collection)
    }
}
