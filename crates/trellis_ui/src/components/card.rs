//! Card component for content containers
//!
//! A surface for grouping related content, with structured header, content,
//! and footer sections.
//!
//! # Example
//!
//! ```ignore
//! use trellis_ui::prelude::*;
//!
//! ui::card()
//!     .child(ui::card_header().title("Revenue").description("Last 30 days"))
//!     .child(ui::card_content().child(text("Main content")))
//!     .child(ui::card_footer().child(ui::badge("Updated")))
//! ```

use trellis_core::Color;
use trellis_element::box_element::BoxElement;
use trellis_element::prelude::*;

/// Card component for content containers
pub struct Card {
    inner: BoxElement,
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl Card {
    /// Create a new empty card
    pub fn new() -> Self {
        Self {
            inner: BoxElement::new(),
        }
    }

    /// Add content to the card body
    pub fn child(mut self, content: impl ElementBuilder + 'static) -> Self {
        self.inner = self.inner.child(content);
        self
    }

    // Forwarding methods for common styling

    /// Set width in pixels
    pub fn w(mut self, width: f32) -> Self {
        self.inner = self.inner.w(width);
        self
    }

    /// Set full width
    pub fn w_full(mut self) -> Self {
        self.inner = self.inner.w_full();
        self
    }

    /// Set padding on all sides
    pub fn p(mut self, padding: f32) -> Self {
        self.inner = self.inner.p(padding);
        self
    }

    /// Set gap between sections
    pub fn gap(mut self, gap: f32) -> Self {
        self.inner = self.inner.gap(gap);
        self
    }

    /// Set background color
    pub fn bg(mut self, color: Color) -> Self {
        self.inner = self.inner.bg(color);
        self
    }

    /// Apply a medium shadow
    pub fn shadow_md(mut self) -> Self {
        self.inner = self.inner.shadow_md();
        self
    }

    /// Apply a large shadow
    pub fn shadow_lg(mut self) -> Self {
        self.inner = self.inner.shadow_lg();
        self
    }
}

impl ElementBuilder for Card {
    fn build(&self) -> UiNode {
        self.inner.build_with_tag("Card")
    }
}

/// Create an empty card
pub fn card() -> Card {
    Card::new()
}

// ============================================================================
// Card subcomponents for structured content
// ============================================================================

/// Card header section
pub struct CardHeader {
    title: Prop<String>,
    description: Prop<String>,
}

impl Default for CardHeader {
    fn default() -> Self {
        Self::new()
    }
}

impl CardHeader {
    pub fn new() -> Self {
        Self {
            title: Prop::Unset,
            description: Prop::Unset,
        }
    }

    /// Set the header title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Prop::Set(title.into());
        self
    }

    /// Set the header description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Prop::Set(description.into());
        self
    }
}

impl ElementBuilder for CardHeader {
    fn build(&self) -> UiNode {
        UiNode::new("Card.Header")
            .prop("title", self.title.encode())
            .prop("description", self.description.encode())
    }
}

/// Create a card header
pub fn card_header() -> CardHeader {
    CardHeader::new()
}

/// Card content section
pub struct CardContent {
    children: Vec<BoxedElement>,
}

impl Default for CardContent {
    fn default() -> Self {
        Self::new()
    }
}

impl CardContent {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    /// Add a child element
    pub fn child(mut self, content: impl ElementBuilder + 'static) -> Self {
        self.children.push(Box::new(content));
        self
    }
}

impl ElementBuilder for CardContent {
    fn build(&self) -> UiNode {
        let mut node = UiNode::new("Card.Content");
        node.children = build_children(&self.children);
        node
    }
}

/// Create a card content section
pub fn card_content() -> CardContent {
    CardContent::new()
}

/// Card footer section
pub struct CardFooter {
    justify: Prop<Justify>,
    children: Vec<BoxedElement>,
}

impl Default for CardFooter {
    fn default() -> Self {
        Self::new()
    }
}

impl CardFooter {
    pub fn new() -> Self {
        Self {
            justify: Prop::Unset,
            children: Vec::new(),
        }
    }

    /// Add a child element
    pub fn child(mut self, content: impl ElementBuilder + 'static) -> Self {
        self.children.push(Box::new(content));
        self
    }

    /// Distribute footer children
    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = Prop::Set(justify);
        self
    }
}

impl ElementBuilder for CardFooter {
    fn build(&self) -> UiNode {
        let mut node = UiNode::new("Card.Footer").prop("justify", self.justify.encode());
        node.children = build_children(&self.children);
        node
    }
}

/// Create a card footer
pub fn card_footer() -> CardFooter {
    CardFooter::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_tag() {
        let node = card().build();
        assert_eq!(node.tag, "Card");
    }

    #[test]
    fn test_card_sections() {
        let node = card()
            .child(card_header().title("Title").description("Description"))
            .child(card_content().child(text("Body")))
            .child(card_footer().justify(Justify::End))
            .build();

        assert_eq!(node.children.len(), 3);
        assert_eq!(node.children[0].tag, "Card.Header");
        assert_eq!(node.children[1].tag, "Card.Content");
        assert_eq!(node.children[2].tag, "Card.Footer");
    }

    #[test]
    fn test_header_props() {
        let node = card_header().title("Title").build();
        assert_eq!(
            node.get_prop("title"),
            Some(&Prop::Set(PropValue::Str("Title".into())))
        );
        assert_eq!(node.get_prop("description"), Some(&Prop::Unset));
    }

    #[test]
    fn test_content_nests_children() {
        let node = card_content().child(text("a")).child(text("b")).build();
        assert_eq!(node.children.len(), 2);
    }
}
