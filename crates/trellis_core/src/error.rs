//! Error types for the state layer
//!
//! Component builders themselves are infallible value constructors; everything
//! that can go wrong lives on the state side and surfaces the moment it
//! happens, never deferred to the render side.

use thiserror::Error;

/// Errors produced by state reads and capture validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// A key exists but holds a value of a different type than was requested
    #[error("type mismatch reading state key `{key}`: expected {expected}, found {found}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A reactive render body read a key it never declared
    #[error("render body read undeclared state key `{key}` (declared: {declared:?})")]
    UndeclaredKey { key: String, declared: Vec<String> },
}
