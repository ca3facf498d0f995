//! Tooltip component
//!
//! Wraps exactly one anchor element with tip content the renderer shows on
//! hover or focus. The tip is either plain text or an arbitrary component.
//!
//! # Example
//!
//! ```ignore
//! use trellis_ui::prelude::*;
//!
//! ui::tooltip(ui::icon("info"), "More details")
//!     .placement(Placement::Right)
//!
//! // Rich tip content
//! ui::tooltip_with(ui::badge("Beta"), ui::card().child(text("Ships next quarter")))
//! ```

use trellis_element::prelude::*;

/// Tooltip wrapping a single anchor element
pub struct Tooltip {
    anchor: BoxedElement,
    text: Prop<String>,
    content: Prop<UiNode>,
    placement: Prop<Placement>,
}

impl Tooltip {
    /// Create a tooltip with plain tip text
    pub fn new(anchor: impl ElementBuilder + 'static, tip: impl Into<String>) -> Self {
        Self {
            anchor: Box::new(anchor),
            text: Prop::Set(tip.into()),
            content: Prop::Unset,
            placement: Prop::Unset,
        }
    }

    /// Create a tooltip with rich tip content
    pub fn with_content(
        anchor: impl ElementBuilder + 'static,
        content: impl ElementBuilder + 'static,
    ) -> Self {
        Self {
            anchor: Box::new(anchor),
            text: Prop::Unset,
            content: Prop::Set(content.build()),
            placement: Prop::Unset,
        }
    }

    /// Which side of the anchor the tip appears on
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = Prop::Set(placement);
        self
    }
}

impl ElementBuilder for Tooltip {
    fn build(&self) -> UiNode {
        UiNode::new("Tooltip")
            .prop("text", self.text.encode())
            .prop("content", self.content.encode())
            .prop("placement", self.placement.encode())
            .child(self.anchor.build())
    }
}

/// Create a tooltip with plain tip text around an anchor element
pub fn tooltip(anchor: impl ElementBuilder + 'static, tip: impl Into<String>) -> Tooltip {
    Tooltip::new(anchor, tip)
}

/// Create a tooltip with rich tip content around an anchor element
pub fn tooltip_with(
    anchor: impl ElementBuilder + 'static,
    content: impl ElementBuilder + 'static,
) -> Tooltip {
    Tooltip::with_content(anchor, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::icon::icon;

    #[test]
    fn test_tooltip_wraps_anchor() {
        let node = tooltip(icon("info"), "Details").build();
        assert_eq!(node.tag, "Tooltip");
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.children[0].tag, "Icon");
        assert_eq!(
            node.get_prop("text"),
            Some(&Prop::Set(PropValue::Str("Details".into())))
        );
        assert_eq!(node.get_prop("content"), Some(&Prop::Unset));
    }

    #[test]
    fn test_rich_content() {
        let node = tooltip_with(icon("info"), text("rich")).build();
        assert_eq!(node.get_prop("text"), Some(&Prop::Unset));
        assert!(
            matches!(node.get_prop("content"), Some(Prop::Set(PropValue::Node(tip))) if tip.tag == "Text")
        );
    }

    #[test]
    fn test_placement() {
        let node = tooltip(icon("info"), "tip")
            .placement(Placement::Right)
            .build();
        assert_eq!(
            node.get_prop("placement"),
            Some(&Prop::Set(PropValue::Str("right".into())))
        );
    }
}
