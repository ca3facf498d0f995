//! Capture scopes for reactive render bodies
//!
//! A render body declares up front which state keys it reads; the scope
//! records every read and rejects keys outside the declaration. This is the
//! capture validation the component layer relies on: a body that reaches for
//! state it never declared fails at render time, not when the renderer later
//! tries to wire subscriptions.
//!
//! Scopes are read-only by construction. Render bodies are pure value
//! producers; writes happen through [`State`](crate::State) handles outside
//! the render pass.

use std::cell::RefCell;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::warn;

use crate::error::StateError;
use crate::store::{StateStore, StateStoreExt};

/// How a scope treats reads of undeclared keys
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureMode {
    /// Undeclared reads are errors (the default)
    #[default]
    Strict,
    /// Undeclared reads are logged and allowed; useful while migrating trees
    Lenient,
}

/// The read scope handed to a reactive render body
pub struct StateScope<'a> {
    store: &'a dyn StateStore,
    declared: &'a [String],
    mode: CaptureMode,
    reads: RefCell<SmallVec<[String; 4]>>,
}

impl<'a> StateScope<'a> {
    /// Create a scope over a store with a declared key set
    pub fn new(store: &'a dyn StateStore, declared: &'a [String], mode: CaptureMode) -> Self {
        Self {
            store,
            declared,
            mode,
            reads: RefCell::new(SmallVec::new()),
        }
    }

    /// The keys this scope was declared with
    pub fn declared(&self) -> &[String] {
        self.declared
    }

    /// Keys actually read so far, in first-read order
    pub fn reads(&self) -> Vec<String> {
        self.reads.borrow().to_vec()
    }

    /// Read a key as `T`, falling back to `T::default()` when absent
    pub fn read<T: Clone + Default + 'static>(&self, key: &str) -> Result<T, StateError> {
        Ok(self.try_read::<T>(key)?.unwrap_or_default())
    }

    /// Read a key as `T`, `None` when the key holds nothing
    pub fn try_read<T: Clone + 'static>(&self, key: &str) -> Result<Option<T>, StateError> {
        self.check_capture(key)?;
        self.store.read::<T>(key)
    }

    /// Whether a declared key currently holds a value
    pub fn contains(&self, key: &str) -> Result<bool, StateError> {
        self.check_capture(key)?;
        Ok(self.store.contains(key))
    }

    fn check_capture(&self, key: &str) -> Result<(), StateError> {
        if !self.declared.iter().any(|declared| declared == key) {
            warn!(key, declared = ?self.declared, "render body read undeclared state key");
            if self.mode == CaptureMode::Strict {
                return Err(StateError::UndeclaredKey {
                    key: key.to_string(),
                    declared: self.declared.to_vec(),
                });
            }
        }
        let mut reads = self.reads.borrow_mut();
        if !reads.iter().any(|read| read == key) {
            reads.push(key.to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn declared(keys: &[&str]) -> Vec<String> {
        keys.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn test_declared_read() {
        let store = MemoryStore::new();
        store.write("counter", 41i64);

        let keys = declared(&["counter"]);
        let scope = StateScope::new(&store, &keys, CaptureMode::Strict);

        assert_eq!(scope.read::<i64>("counter").unwrap(), 41);
        assert_eq!(scope.reads(), vec!["counter".to_string()]);
    }

    #[test]
    fn test_absent_key_defaults() {
        let store = MemoryStore::new();
        let keys = declared(&["missing"]);
        let scope = StateScope::new(&store, &keys, CaptureMode::Strict);

        assert_eq!(scope.read::<String>("missing").unwrap(), String::new());
        assert_eq!(scope.try_read::<String>("missing").unwrap(), None);
    }

    #[test]
    fn test_undeclared_read_rejected() {
        let store = MemoryStore::new();
        store.write("secret", 1i64);

        let keys = declared(&["counter"]);
        let scope = StateScope::new(&store, &keys, CaptureMode::Strict);

        let err = scope.read::<i64>("secret").unwrap_err();
        assert!(matches!(err, StateError::UndeclaredKey { ref key, .. } if key == "secret"));
        // Rejected reads are not recorded
        assert!(scope.reads().is_empty());
    }

    #[test]
    fn test_lenient_mode_allows_undeclared() {
        let store = MemoryStore::new();
        store.write("secret", 1i64);

        let keys = declared(&["counter"]);
        let scope = StateScope::new(&store, &keys, CaptureMode::Lenient);

        assert_eq!(scope.read::<i64>("secret").unwrap(), 1);
        assert_eq!(scope.reads(), vec!["secret".to_string()]);
    }

    #[test]
    fn test_type_mismatch_in_scope() {
        let store = MemoryStore::new();
        store.write("name", "Ada".to_string());

        let keys = declared(&["name"]);
        let scope = StateScope::new(&store, &keys, CaptureMode::Strict);

        assert!(scope.read::<i64>("name").is_err());
    }

    #[test]
    fn test_reads_deduplicated() {
        let store = MemoryStore::new();
        store.write("counter", 1i64);

        let keys = declared(&["counter"]);
        let scope = StateScope::new(&store, &keys, CaptureMode::Strict);

        let _ = scope.read::<i64>("counter").unwrap();
        let _ = scope.read::<i64>("counter").unwrap();
        assert_eq!(scope.reads().len(), 1);
    }
}
