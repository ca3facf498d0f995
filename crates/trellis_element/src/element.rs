//! The builder seam every component implements
//!
//! [`ElementBuilder`] is the trait boundary between component builders and the
//! tagged tree they produce. Containers store children as boxed builders and
//! encode them when the container itself is built, so a tree is assembled
//! top-down in one pass.

use crate::node::UiNode;

/// Anything that can produce a tagged UI node
pub trait ElementBuilder {
    /// Encode this element (and its children) into a tagged tree value
    fn build(&self) -> UiNode;
}

/// A boxed child element
pub type BoxedElement = Box<dyn ElementBuilder>;

impl ElementBuilder for UiNode {
    fn build(&self) -> UiNode {
        self.clone()
    }
}

impl<E: ElementBuilder + ?Sized> ElementBuilder for Box<E> {
    fn build(&self) -> UiNode {
        (**self).build()
    }
}

/// Encode a slice of boxed children in document order
pub fn build_children(children: &[BoxedElement]) -> Vec<UiNode> {
    children.iter().map(|child| child.build()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_is_its_own_builder() {
        let node = UiNode::new("Text");
        assert_eq!(node.build(), node);
    }

    #[test]
    fn test_build_children_order() {
        let children: Vec<BoxedElement> = vec![
            Box::new(UiNode::new("First")),
            Box::new(UiNode::new("Second")),
        ];
        let built = build_children(&children);
        assert_eq!(built[0].tag, "First");
        assert_eq!(built[1].tag, "Second");
    }
}
