//! Reactive root - state-bound subtrees
//!
//! A [`ReactiveRoot`] ties a render body to the state keys it declares. Each
//! [`render`](ReactiveRoot::render) runs the body under a fresh
//! [`StateScope`], so every read is capture-checked and recorded; the result
//! is a `"Reactive.Root"` node carrying the declared keys and the rendered
//! body as its child. Hosts re-render when the store's dirty flag trips or a
//! subscription fires.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use trellis_core::{MemoryStore, StateStore};
//! use trellis_element::prelude::*;
//!
//! let store: Arc<dyn StateStore> = Arc::new(MemoryStore::new());
//!
//! let root = reactive_root(store, ["counter"], |scope| {
//!     let count: i64 = scope.read("counter")?;
//!     Ok(column()
//!         .gap(8.0)
//!         .child(text(format!("Count: {count}")))
//!         .build())
//! });
//!
//! let tree = root.render()?;
//! ```

use std::sync::Arc;

use tracing::debug;

use crate::node::UiNode;
use crate::prop::{Prop, PropValue};
use trellis_core::{CaptureMode, StateError, StateScope, StateStore, SubscriptionId};

/// A render body bound to declared state keys
pub struct ReactiveRoot<F> {
    store: Arc<dyn StateStore>,
    keys: Vec<String>,
    body: F,
    mode: CaptureMode,
}

impl<F> ReactiveRoot<F>
where
    F: Fn(&StateScope) -> Result<UiNode, StateError>,
{
    /// Create a root over a store with a declared key set
    pub fn new(
        store: Arc<dyn StateStore>,
        keys: impl IntoIterator<Item = impl Into<String>>,
        body: F,
    ) -> Self {
        Self {
            store,
            keys: keys.into_iter().map(Into::into).collect(),
            body,
            mode: CaptureMode::default(),
        }
    }

    /// Override how undeclared reads are treated
    pub fn capture_mode(mut self, mode: CaptureMode) -> Self {
        self.mode = mode;
        self
    }

    /// The declared state keys
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Run the body under a capture scope and wrap the result
    ///
    /// Fails the moment the body reads an undeclared key or a key of the
    /// wrong type; nothing partial is returned.
    pub fn render(&self) -> Result<UiNode, StateError> {
        let scope = StateScope::new(self.store.as_ref(), &self.keys, self.mode);
        let body = (self.body)(&scope)?;

        let reads = scope.reads();
        for key in &self.keys {
            if !reads.contains(key) {
                debug!(key = %key, "declared state key never read during render");
            }
        }

        let keys = PropValue::List(
            self.keys
                .iter()
                .map(|key| PropValue::Str(key.clone()))
                .collect(),
        );
        Ok(UiNode::new("Reactive.Root")
            .prop("keys", Prop::Set(keys))
            .child(body))
    }

    /// Subscribe the host to writes on every declared key
    ///
    /// Returns one subscription per key; drop them via
    /// [`StateStore::unsubscribe`] when the root is torn down.
    pub fn subscribe<C>(&self, callback: C) -> Vec<SubscriptionId>
    where
        C: Fn(&str) + Clone + Send + Sync + 'static,
    {
        self.keys
            .iter()
            .map(|key| {
                let callback = callback.clone();
                self.store
                    .subscribe(key, Box::new(move |key| callback(key)))
            })
            .collect()
    }
}

/// Create a reactive root over a store
pub fn reactive_root<F>(
    store: Arc<dyn StateStore>,
    keys: impl IntoIterator<Item = impl Into<String>>,
    body: F,
) -> ReactiveRoot<F>
where
    F: Fn(&StateScope) -> Result<UiNode, StateError>,
{
    ReactiveRoot::new(store, keys, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::box_element::column;
    use crate::element::ElementBuilder;
    use crate::text::text;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use trellis_core::{MemoryStore, StateStoreExt};

    fn store_with_counter(value: i64) -> Arc<dyn StateStore> {
        let store = MemoryStore::new();
        store.write("counter", value);
        Arc::new(store)
    }

    #[test]
    fn test_render_wraps_body() {
        let store = store_with_counter(7);
        let root = reactive_root(store, ["counter"], |scope| {
            let count: i64 = scope.read("counter")?;
            Ok(text(format!("Count: {count}")).build())
        });

        let tree = root.render().unwrap();
        assert_eq!(tree.tag, "Reactive.Root");
        assert_eq!(
            tree.get_prop("keys"),
            Some(&Prop::Set(PropValue::List(vec![PropValue::Str(
                "counter".into()
            )])))
        );
        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.children[0].tag, "Text");
    }

    #[test]
    fn test_rerender_sees_new_state() {
        let store = store_with_counter(1);
        let root = reactive_root(store.clone(), ["counter"], |scope| {
            let count: i64 = scope.read("counter")?;
            Ok(text(format!("{count}")).build())
        });

        let first = root.render().unwrap();
        store.write("counter", 2i64);
        let second = root.render().unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_undeclared_capture_fails_render() {
        let store = store_with_counter(1);
        let root = reactive_root(store, ["counter"], |scope| {
            let _: i64 = scope.read("other")?;
            Ok(column().build())
        });

        let err = root.render().unwrap_err();
        assert!(matches!(err, StateError::UndeclaredKey { ref key, .. } if key == "other"));
    }

    #[test]
    fn test_lenient_mode_renders_anyway() {
        let store = store_with_counter(1);
        let root = reactive_root(store, ["counter"], |scope| {
            let _: i64 = scope.read("other")?;
            Ok(column().build())
        })
        .capture_mode(CaptureMode::Lenient);

        assert!(root.render().is_ok());
    }

    #[test]
    fn test_subscribe_fires_on_write() {
        let store = store_with_counter(0);
        let root = reactive_root(store.clone(), ["counter"], |scope| {
            let _: i64 = scope.read("counter")?;
            Ok(column().build())
        });

        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = calls.clone();
        let _subs = root.subscribe(move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        store.write("counter", 1i64);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_type_mismatch_surfaces() {
        let store: Arc<dyn StateStore> = Arc::new(MemoryStore::new());
        store.write("counter", "not a number".to_string());

        let root = reactive_root(store, ["counter"], |scope| {
            let count: i64 = scope.read("counter")?;
            Ok(text(format!("{count}")).build())
        });

        assert!(matches!(
            root.render().unwrap_err(),
            StateError::TypeMismatch { .. }
        ));
    }
}
