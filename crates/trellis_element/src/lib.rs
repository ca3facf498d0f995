//! Trellis encoding layer and primitive builders
//!
//! This crate is the mechanism under every component: builder calls compile
//! into tagged, strictly-typed variant trees ([`UiNode`]) ready for
//! serialization and later interpretation by an external renderer.
//!
//! - [`prop`] - the discriminated payload type and the present/absent wrapper
//! - [`node`] - the tagged tree value
//! - [`element`] - the [`ElementBuilder`] seam
//! - [`style`] - the shared style vocabulary
//! - Box / Stack / Text primitives, plus [`ReactiveRoot`] for state-bound
//!   subtrees
//!
//! Composite components (charts, tables, dialogs, inputs) live in
//! `trellis_ui` and build on these primitives.

pub mod box_element;
pub mod element;
pub mod node;
pub mod prop;
pub mod reactive_root;
pub mod stack;
pub mod style;
pub mod text;

pub use box_element::{box_, column, row, BoxElement};
pub use element::{build_children, BoxedElement, ElementBuilder};
pub use node::UiNode;
pub use prop::{Prop, PropValue, ToPropValue};
pub use reactive_root::{reactive_root, ReactiveRoot};
pub use stack::{stack, Stack};
pub use style::{
    Align, CornerRadius, Dimension, Direction, Edges, FontWeight, Justify, Placement, Shadow,
    TextAlign,
};
pub use text::{text, Text};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::box_element::{box_, column, row, BoxElement};
    pub use crate::element::{build_children, BoxedElement, ElementBuilder};
    pub use crate::node::UiNode;
    pub use crate::prop::{Prop, PropValue, ToPropValue};
    pub use crate::reactive_root::{reactive_root, ReactiveRoot};
    pub use crate::stack::{stack, Stack};
    pub use crate::style::{
        Align, CornerRadius, Dimension, Direction, Edges, FontWeight, Justify, Placement, Shadow,
        TextAlign,
    };
    pub use crate::text::{text, Text};
}
