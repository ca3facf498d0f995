//! The tagged UI-tree value
//!
//! [`UiNode`] is what every builder ultimately produces: a string tag naming
//! the component (`"Box"`, `"Chart.Bar"`, ...), an insertion-ordered prop map
//! whose entries are presence-wrapped [`PropValue`]s, and nested children.
//! Nodes are plain data - constructed once, serialized, and interpreted by an
//! external renderer.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::prop::{Prop, PropValue, ToPropValue};

/// One node of a serializable UI tree
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiNode {
    /// Component tag, e.g. `"Box"` or `"Chart.Bar"`
    pub tag: String,
    /// Presence-wrapped props, insertion order preserved
    #[serde(default)]
    pub props: IndexMap<String, Prop<PropValue>>,
    /// Nested child nodes (always a plain array, possibly empty)
    #[serde(default)]
    pub children: Vec<UiNode>,
}

impl UiNode {
    /// Create an empty node with the given tag
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            props: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Insert a presence-wrapped prop
    pub fn prop(mut self, name: impl Into<String>, value: Prop<PropValue>) -> Self {
        self.props.insert(name.into(), value);
        self
    }

    /// Insert a prop that is always present
    pub fn prop_set(self, name: impl Into<String>, value: impl ToPropValue) -> Self {
        self.prop(name, Prop::Set(value.to_prop_value()))
    }

    /// Append a child node
    pub fn child(mut self, child: UiNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append several child nodes
    pub fn with_children(mut self, children: impl IntoIterator<Item = UiNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Look up a prop by name
    pub fn get_prop(&self, name: &str) -> Option<&Prop<PropValue>> {
        self.props.get(name)
    }

    /// Serialize to a `serde_json::Value`
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("UiNode serialization is infallible")
    }

    /// Serialize to a JSON string
    pub fn to_json_string(&self) -> String {
        serde_json::to_string(self).expect("UiNode serialization is infallible")
    }

    /// Parse a node back from JSON text
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Total number of nodes in this subtree, including self
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(UiNode::len).sum::<usize>()
    }
}
