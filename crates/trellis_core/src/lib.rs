//! Trellis core runtime
//!
//! The state side of Trellis: a string-keyed key/value store behind the
//! [`StateStore`] trait, typed [`State`] handles over it, and the
//! [`StateScope`] capture scope that reactive render bodies read through.
//!
//! The store's lifecycle (initialization, persistence, platform bridging) is
//! owned by the embedding host. This crate ships [`MemoryStore`] as the
//! in-process implementation; platforms with their own storage implement
//! [`StateStore`] and hand the handle to the component layer.
//!
//! ```ignore
//! use std::sync::Arc;
//! use trellis_core::{MemoryStore, State, StateStore, StateStoreExt};
//!
//! let store: Arc<dyn StateStore> = Arc::new(MemoryStore::new());
//! store.write("counter", 0i64);
//!
//! let counter: State<i64> = State::new(store.clone(), "counter");
//! counter.set(counter.get()? + 1);
//! ```

pub mod color;
pub mod error;
pub mod scope;
pub mod state;
pub mod store;

pub use color::Color;
pub use error::StateError;
pub use scope::{CaptureMode, StateScope};
pub use state::State;
pub use store::{
    DirtyFlag, MemoryStore, StateStore, StateStoreExt, StoredValue, SubscriptionId,
};
