//! String-keyed key/value state store
//!
//! [`StateStore`] is the narrow interface the component layer sees: read and
//! write type-erased values by string key, subscribe to writes, and share a
//! dirty flag that tells the host a re-render pass is due. The store's
//! lifecycle and persistence belong to the embedding platform; [`MemoryStore`]
//! is the in-process implementation used by tests, demos, and hosts without
//! their own storage.
//!
//! # Example
//!
//! ```ignore
//! use trellis_core::store::{MemoryStore, StateStoreExt};
//!
//! let store = MemoryStore::new();
//! store.write("user.name", "Ada".to_string());
//!
//! let name: Option<String> = store.read("user.name")?;
//! assert_eq!(name.as_deref(), Some("Ada"));
//!
//! // Subscribe to changes on a key
//! let sub = store.subscribe("user.name", Box::new(|key| {
//!     println!("{key} changed");
//! }));
//! ```

use std::any::Any;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use tracing::{debug, trace};

use crate::error::StateError;

new_key_type! {
    /// Unique identifier for a store subscription
    pub struct SubscriptionId;
}

/// Shared flag the host polls to decide whether a re-render pass is due
pub type DirtyFlag = Arc<AtomicBool>;

/// Callback invoked with the key that changed
pub type SubscriberFn = Box<dyn Fn(&str) + Send + Sync>;

/// A type-erased value as stored under a key
///
/// Keeps the Rust type name alongside the value so mismatched reads can name
/// both sides in the error.
#[derive(Clone)]
pub struct StoredValue {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl StoredValue {
    /// Wrap a value for storage
    pub fn new<T: Send + Sync + 'static>(value: T) -> Self {
        Self {
            value: Arc::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// The Rust type name of the stored value
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Downcast to a concrete type, cloning the value out
    pub fn downcast<T: Clone + 'static>(&self) -> Option<T> {
        self.value.downcast_ref::<T>().cloned()
    }
}

impl std::fmt::Debug for StoredValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredValue")
            .field("type_name", &self.type_name)
            .finish()
    }
}

/// The key/value store behind every reactive binding
///
/// Object-safe so hosts can hand the component layer an `Arc<dyn StateStore>`
/// backed by whatever storage they own. Typed access goes through
/// [`StateStoreExt`].
pub trait StateStore: Send + Sync {
    /// Read the raw value under a key
    fn read_value(&self, key: &str) -> Option<StoredValue>;

    /// Write a raw value under a key, notifying subscribers
    fn write_value(&self, key: &str, value: StoredValue);

    /// Remove a key and its value
    fn remove(&self, key: &str);

    /// Whether a key currently holds a value
    fn contains(&self, key: &str) -> bool;

    /// Monotonic version of a key (0 if never written)
    fn version(&self, key: &str) -> u64;

    /// All keys currently present
    fn keys(&self) -> Vec<String>;

    /// Subscribe to writes on a key
    fn subscribe(&self, key: &str, callback: SubscriberFn) -> SubscriptionId;

    /// Remove a subscription
    fn unsubscribe(&self, id: SubscriptionId);

    /// The shared dirty flag set on every write
    fn dirty_flag(&self) -> DirtyFlag;
}

/// Typed convenience layer over any [`StateStore`]
pub trait StateStoreExt: StateStore {
    /// Read a key as `T`, erroring if the stored value has a different type
    fn read<T: Clone + 'static>(&self, key: &str) -> Result<Option<T>, StateError> {
        match self.read_value(key) {
            None => Ok(None),
            Some(stored) => match stored.downcast::<T>() {
                Some(value) => Ok(Some(value)),
                None => Err(StateError::TypeMismatch {
                    key: key.to_string(),
                    expected: std::any::type_name::<T>(),
                    found: stored.type_name(),
                }),
            },
        }
    }

    /// Write a typed value under a key
    fn write<T: Send + Sync + 'static>(&self, key: &str, value: T) {
        self.write_value(key, StoredValue::new(value));
    }
}

impl<S: StateStore + ?Sized> StateStoreExt for S {}

/// Subscriber bookkeeping for [`MemoryStore`]
struct Subscriber {
    key: String,
    callback: SubscriberFn,
}

/// Per-key storage entry
struct Entry {
    value: StoredValue,
    version: u64,
}

/// In-process [`StateStore`] implementation
///
/// Thread-safe; writes bump a per-key version, set the dirty flag, and notify
/// subscribers registered for that key.
pub struct MemoryStore {
    entries: RwLock<FxHashMap<String, Entry>>,
    subscribers: RwLock<SlotMap<SubscriptionId, Subscriber>>,
    dirty: DirtyFlag,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(FxHashMap::default()),
            subscribers: RwLock::new(SlotMap::with_key()),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Clear all entries and subscriptions
    pub fn clear(&self) {
        self.entries.write().unwrap().clear();
        self.subscribers.write().unwrap().clear();
    }

    /// Take and reset the dirty flag
    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::SeqCst)
    }

    fn notify_subscribers(&self, key: &str) {
        let subscribers = self.subscribers.read().unwrap();
        for (_, sub) in subscribers.iter() {
            if sub.key == key {
                (sub.callback)(key);
            }
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStore for MemoryStore {
    fn read_value(&self, key: &str) -> Option<StoredValue> {
        trace!(key, "state read");
        self.entries
            .read()
            .unwrap()
            .get(key)
            .map(|entry| entry.value.clone())
    }

    fn write_value(&self, key: &str, value: StoredValue) {
        let version = {
            let mut entries = self.entries.write().unwrap();
            let entry = entries.entry(key.to_string()).or_insert(Entry {
                value: value.clone(),
                version: 0,
            });
            entry.value = value;
            entry.version += 1;
            entry.version
        };
        debug!(key, version, "state write");
        self.dirty.store(true, Ordering::SeqCst);
        self.notify_subscribers(key);
    }

    fn remove(&self, key: &str) {
        self.entries.write().unwrap().remove(key);
        debug!(key, "state remove");
    }

    fn contains(&self, key: &str) -> bool {
        self.entries.read().unwrap().contains_key(key)
    }

    fn version(&self, key: &str) -> u64 {
        self.entries
            .read()
            .unwrap()
            .get(key)
            .map(|entry| entry.version)
            .unwrap_or(0)
    }

    fn keys(&self) -> Vec<String> {
        self.entries.read().unwrap().keys().cloned().collect()
    }

    fn subscribe(&self, key: &str, callback: SubscriberFn) -> SubscriptionId {
        let id = self.subscribers.write().unwrap().insert(Subscriber {
            key: key.to_string(),
            callback,
        });
        debug!(key, ?id, "subscribe");
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.write().unwrap().remove(id);
        debug!(?id, "unsubscribe");
    }

    fn dirty_flag(&self) -> DirtyFlag {
        self.dirty.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_read_write() {
        let store = MemoryStore::new();

        assert_eq!(store.read::<i64>("missing").unwrap(), None);

        store.write("count", 42i64);
        assert_eq!(store.read::<i64>("count").unwrap(), Some(42));

        store.write("count", 43i64);
        assert_eq!(store.read::<i64>("count").unwrap(), Some(43));
    }

    #[test]
    fn test_type_mismatch() {
        let store = MemoryStore::new();
        store.write("name", "Ada".to_string());

        let err = store.read::<i64>("name").unwrap_err();
        assert!(matches!(err, StateError::TypeMismatch { ref key, .. } if key == "name"));
    }

    #[test]
    fn test_versions() {
        let store = MemoryStore::new();
        assert_eq!(store.version("k"), 0);

        store.write("k", 1i64);
        assert_eq!(store.version("k"), 1);

        store.write("k", 2i64);
        assert_eq!(store.version("k"), 2);
    }

    #[test]
    fn test_dirty_flag() {
        let store = MemoryStore::new();
        assert!(!store.take_dirty());

        store.write("k", 1i64);
        assert!(store.take_dirty());
        assert!(!store.take_dirty());
    }

    #[test]
    fn test_subscribers() {
        let store = MemoryStore::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let calls_clone = calls.clone();
        let sub = store.subscribe(
            "watched",
            Box::new(move |_| {
                calls_clone.fetch_add(1, Ordering::SeqCst);
            }),
        );

        store.write("watched", 1i64);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // Writes to other keys don't notify
        store.write("other", 1i64);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        store.unsubscribe(sub);
        store.write("watched", 2i64);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_remove_and_contains() {
        let store = MemoryStore::new();
        store.write("k", 1i64);
        assert!(store.contains("k"));

        store.remove("k");
        assert!(!store.contains("k"));
        assert_eq!(store.read::<i64>("k").unwrap(), None);
    }
}
