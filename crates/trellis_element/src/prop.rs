//! Tagged prop values and the present/absent wrapper
//!
//! Every component payload is assembled from two pieces:
//!
//! - [`PropValue`] - the discriminated payload type. Each value carries an
//!   explicit `type` tag so a renderer in another process can interpret the
//!   tree without Rust type information.
//! - [`Prop<T>`] - the present/absent marker wrapping each optional field.
//!   `Unset` fields stay in the payload with an explicit marker rather than
//!   being dropped, so the serialized shape of a component is the same no
//!   matter which options were supplied.
//!
//! Builders keep their fields strongly typed (`Prop<Edges>`, `Prop<Color>`)
//! and erase to `Prop<PropValue>` at [`build`](crate::ElementBuilder::build)
//! time via [`ToPropValue`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use trellis_core::Color;

use crate::node::UiNode;

/// A discriminated prop payload
///
/// Serialized adjacently tagged: `{"type": "float", "value": 12.0}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PropValue {
    Str(String),
    Float(f64),
    Int(i64),
    Bool(bool),
    Color(Color),
    List(Vec<PropValue>),
    Map(IndexMap<String, PropValue>),
    Node(Box<UiNode>),
}

impl PropValue {
    /// Build a `Map` value from label/value pairs, preserving order
    pub fn map<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, PropValue)>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        )
    }

    /// Build a `List` value by converting each item
    pub fn list<T: ToPropValue>(items: impl IntoIterator<Item = T>) -> Self {
        Self::List(items.into_iter().map(|item| item.to_prop_value()).collect())
    }
}

/// Present/absent marker for one optional field
///
/// Serialized adjacently tagged: `{"presence": "set", "value": ...}` or
/// `{"presence": "unset"}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "presence", content = "value", rename_all = "snake_case")]
pub enum Prop<T> {
    Set(T),
    Unset,
}

impl<T> Prop<T> {
    pub fn set(value: T) -> Self {
        Prop::Set(value)
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Prop::Set(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Prop::Set(value) => Some(value),
            Prop::Unset => None,
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Prop::Set(value) => value,
            Prop::Unset => default,
        }
    }

    /// Erase to the serializable payload form
    pub fn encode(&self) -> Prop<PropValue>
    where
        T: ToPropValue,
    {
        match self {
            Prop::Set(value) => Prop::Set(value.to_prop_value()),
            Prop::Unset => Prop::Unset,
        }
    }
}

impl<T> Default for Prop<T> {
    fn default() -> Self {
        Prop::Unset
    }
}

impl<T> From<Option<T>> for Prop<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Prop::Set(value),
            None => Prop::Unset,
        }
    }
}

/// Conversion into the discriminated payload type
pub trait ToPropValue {
    fn to_prop_value(&self) -> PropValue;
}

impl ToPropValue for PropValue {
    fn to_prop_value(&self) -> PropValue {
        self.clone()
    }
}

impl ToPropValue for &str {
    fn to_prop_value(&self) -> PropValue {
        PropValue::Str(self.to_string())
    }
}

impl ToPropValue for String {
    fn to_prop_value(&self) -> PropValue {
        PropValue::Str(self.clone())
    }
}

impl ToPropValue for bool {
    fn to_prop_value(&self) -> PropValue {
        PropValue::Bool(*self)
    }
}

impl ToPropValue for f32 {
    fn to_prop_value(&self) -> PropValue {
        PropValue::Float(*self as f64)
    }
}

impl ToPropValue for f64 {
    fn to_prop_value(&self) -> PropValue {
        PropValue::Float(*self)
    }
}

impl ToPropValue for i64 {
    fn to_prop_value(&self) -> PropValue {
        PropValue::Int(*self)
    }
}

impl ToPropValue for i32 {
    fn to_prop_value(&self) -> PropValue {
        PropValue::Int(*self as i64)
    }
}

impl ToPropValue for u32 {
    fn to_prop_value(&self) -> PropValue {
        PropValue::Int(*self as i64)
    }
}

impl ToPropValue for Color {
    fn to_prop_value(&self) -> PropValue {
        PropValue::Color(*self)
    }
}

impl ToPropValue for UiNode {
    fn to_prop_value(&self) -> PropValue {
        PropValue::Node(Box::new(self.clone()))
    }
}

impl<T: ToPropValue> ToPropValue for Vec<T> {
    fn to_prop_value(&self) -> PropValue {
        PropValue::List(self.iter().map(|item| item.to_prop_value()).collect())
    }
}
