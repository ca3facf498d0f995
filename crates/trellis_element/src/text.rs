//! Text element builder
//!
//! ```ignore
//! use trellis_element::prelude::*;
//! use trellis_core::Color;
//!
//! let label = text("Hello, World!")
//!     .size(16.0)
//!     .color(Color::WHITE)
//!     .semibold();
//! ```

use crate::element::ElementBuilder;
use crate::node::UiNode;
use crate::prop::Prop;
use crate::style::{FontWeight, TextAlign};
use trellis_core::Color;

/// A text leaf element
pub struct Text {
    content: String,
    size: Prop<f32>,
    color: Prop<Color>,
    weight: Prop<FontWeight>,
    align: Prop<TextAlign>,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            size: Prop::Unset,
            color: Prop::Unset,
            weight: Prop::Unset,
            align: Prop::Unset,
        }
    }

    /// Set the font size in pixels
    pub fn size(mut self, size: f32) -> Self {
        self.size = Prop::Set(size);
        self
    }

    /// Set the text color
    pub fn color(mut self, color: Color) -> Self {
        self.color = Prop::Set(color);
        self
    }

    /// Set the font weight
    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = Prop::Set(weight);
        self
    }

    /// Medium weight
    pub fn medium(self) -> Self {
        self.weight(FontWeight::Medium)
    }

    /// Semibold weight
    pub fn semibold(self) -> Self {
        self.weight(FontWeight::Semibold)
    }

    /// Bold weight
    pub fn bold(self) -> Self {
        self.weight(FontWeight::Bold)
    }

    /// Set horizontal alignment
    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = Prop::Set(align);
        self
    }

    /// Get the text content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl ElementBuilder for Text {
    fn build(&self) -> UiNode {
        UiNode::new("Text")
            .prop_set("content", self.content.clone())
            .prop("size", self.size.encode())
            .prop("color", self.color.encode())
            .prop("weight", self.weight.encode())
            .prop("align", self.align.encode())
    }
}

/// Create a text element
pub fn text(content: impl Into<String>) -> Text {
    Text::new(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prop::PropValue;

    #[test]
    fn test_text_builder() {
        let t = text("Hello").size(16.0).color(Color::WHITE);
        assert_eq!(t.content(), "Hello");

        let node = t.build();
        assert_eq!(node.tag, "Text");
        assert_eq!(
            node.get_prop("content"),
            Some(&Prop::Set(PropValue::Str("Hello".into())))
        );
        assert_eq!(
            node.get_prop("size"),
            Some(&Prop::Set(PropValue::Float(16.0)))
        );
    }

    #[test]
    fn test_weight_shorthands() {
        let node = text("x").bold().build();
        assert_eq!(
            node.get_prop("weight"),
            Some(&Prop::Set(PropValue::Str("bold".into())))
        );
    }

    #[test]
    fn test_unstyled_fields_stay_unset() {
        let node = text("x").build();
        assert_eq!(node.get_prop("color"), Some(&Prop::Unset));
        assert_eq!(node.get_prop("align"), Some(&Prop::Unset));
        assert!(node.children.is_empty());
    }
}
