//! Stack - container for overlayed elements
//!
//! A specialized Box where children layer on top of each other in document
//! order (last child on top). The renderer positions every child against the
//! stack's bounds; the `align` prop controls where non-full-size children sit.
//!
//! # Example
//!
//! ```ignore
//! use trellis_element::prelude::*;
//! use trellis_core::Color;
//!
//! stack()
//!     .size(200.0, 200.0)
//!     .child(box_().w_full().h_full().bg(Color::GRAY))  // bottom layer
//!     .child(text("On top"))
//! ```

use crate::box_element::BoxElement;
use crate::element::ElementBuilder;
use crate::node::UiNode;
use crate::style::Shadow;
use trellis_core::Color;

/// An overlay container; children stack bottom-to-top in document order
pub struct Stack {
    inner: BoxElement,
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

impl Stack {
    pub fn new() -> Self {
        Self {
            inner: BoxElement::new(),
        }
    }

    /// Add a layer (later layers render on top)
    pub fn child(mut self, child: impl ElementBuilder + 'static) -> Self {
        self.inner = self.inner.child(child);
        self
    }

    /// Add multiple layers
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: ElementBuilder + 'static,
    {
        self.inner = self.inner.children(children);
        self
    }

    // Delegated Box styling

    pub fn w(mut self, px: f32) -> Self {
        self.inner = self.inner.w(px);
        self
    }

    pub fn w_full(mut self) -> Self {
        self.inner = self.inner.w_full();
        self
    }

    pub fn h(mut self, px: f32) -> Self {
        self.inner = self.inner.h(px);
        self
    }

    pub fn h_full(mut self) -> Self {
        self.inner = self.inner.h_full();
        self
    }

    pub fn size(mut self, w: f32, h: f32) -> Self {
        self.inner = self.inner.size(w, h);
        self
    }

    pub fn items_center(mut self) -> Self {
        self.inner = self.inner.items_center();
        self
    }

    pub fn items_start(mut self) -> Self {
        self.inner = self.inner.items_start();
        self
    }

    pub fn items_end(mut self) -> Self {
        self.inner = self.inner.items_end();
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.inner = self.inner.bg(color);
        self
    }

    pub fn rounded(mut self, radius: f32) -> Self {
        self.inner = self.inner.rounded(radius);
        self
    }

    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.inner = self.inner.shadow(shadow);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.inner = self.inner.opacity(opacity);
        self
    }
}

impl ElementBuilder for Stack {
    fn build(&self) -> UiNode {
        self.inner.build_with_tag("Stack")
    }
}

/// Create a stack container where children overlay each other
pub fn stack() -> Stack {
    Stack::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::box_element::box_;
    use crate::text::text;

    #[test]
    fn test_stack_tag() {
        let node = stack().build();
        assert_eq!(node.tag, "Stack");
    }

    #[test]
    fn test_layer_order() {
        let node = stack()
            .child(box_().w_full().h_full())
            .child(text("top"))
            .build();

        assert_eq!(node.children.len(), 2);
        // Last child in document order is the top layer
        assert_eq!(node.children[1].tag, "Text");
    }
}
