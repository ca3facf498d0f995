//! Typed state handles
//!
//! [`State<T>`] binds a store and a key into a typed read/write handle. It's
//! the primary API for imperative state access outside render bodies (inside a
//! render body, reads go through the capture scope instead).
//!
//! ```ignore
//! use std::sync::Arc;
//! use trellis_core::{MemoryStore, State, StateStore};
//!
//! let store: Arc<dyn StateStore> = Arc::new(MemoryStore::new());
//! let counter: State<i64> = State::new(store.clone(), "counter");
//!
//! counter.set(1);
//! counter.update(|n| n + 1)?;
//! assert_eq!(counter.get()?, 2);
//! ```

use std::marker::PhantomData;
use std::sync::Arc;

use crate::error::StateError;
use crate::store::{StateStore, StateStoreExt, SubscriberFn, SubscriptionId};

/// A typed handle to one key in a [`StateStore`]
pub struct State<T> {
    store: Arc<dyn StateStore>,
    key: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            key: self.key.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> State<T> {
    /// Bind a store and key into a typed handle
    pub fn new(store: Arc<dyn StateStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            _marker: PhantomData,
        }
    }

    /// The key this handle is bound to
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying store
    pub fn store(&self) -> &Arc<dyn StateStore> {
        &self.store
    }

    /// Subscribe to writes on this key
    pub fn subscribe(&self, callback: SubscriberFn) -> SubscriptionId {
        self.store.subscribe(&self.key, callback)
    }
}

impl<T: Clone + Send + Sync + 'static> State<T> {
    /// Get the current value, falling back to `T::default()` when absent
    pub fn get(&self) -> Result<T, StateError>
    where
        T: Default,
    {
        Ok(self.store.read::<T>(&self.key)?.unwrap_or_default())
    }

    /// Get the current value, `None` when the key holds nothing
    pub fn try_get(&self) -> Result<Option<T>, StateError> {
        self.store.read::<T>(&self.key)
    }

    /// Set a new value, notifying subscribers and marking the store dirty
    pub fn set(&self, value: T) {
        self.store.write(&self.key, value);
    }

    /// Update the value through a function
    pub fn update(&self, f: impl FnOnce(T) -> T) -> Result<(), StateError>
    where
        T: Default,
    {
        let current = self.get()?;
        self.set(f(current));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn store() -> Arc<dyn StateStore> {
        Arc::new(MemoryStore::new())
    }

    #[test]
    fn test_get_default_when_absent() {
        let state: State<i64> = State::new(store(), "counter");
        assert_eq!(state.get().unwrap(), 0);
        assert_eq!(state.try_get().unwrap(), None);
    }

    #[test]
    fn test_set_get() {
        let state: State<String> = State::new(store(), "name");
        state.set("Ada".to_string());
        assert_eq!(state.get().unwrap(), "Ada");
    }

    #[test]
    fn test_update() {
        let state: State<i64> = State::new(store(), "counter");
        state.set(10);
        state.update(|n| n + 5).unwrap();
        assert_eq!(state.get().unwrap(), 15);
    }

    #[test]
    fn test_mismatch_propagates() {
        let store = store();
        store.write("k", "text".to_string());

        let state: State<i64> = State::new(store, "k");
        assert!(state.get().is_err());
    }

    #[test]
    fn test_subscribe_via_handle() {
        let state: State<i64> = State::new(store(), "watched");
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = calls.clone();

        let _sub = state.subscribe(Box::new(move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        }));

        state.set(7);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
