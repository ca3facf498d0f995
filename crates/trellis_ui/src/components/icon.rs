//! Icon component
//!
//! A leaf element naming a glyph from the renderer's icon set.
//!
//! # Example
//!
//! ```ignore
//! use trellis_ui::prelude::*;
//!
//! ui::icon("check")
//! ui::icon("alert-triangle").size(20.0).color(Color::YELLOW)
//! ```

use trellis_core::Color;
use trellis_element::prelude::*;

/// Icon component referencing a named glyph
pub struct Icon {
    name: String,
    size: Prop<f32>,
    color: Prop<Color>,
}

impl Icon {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: Prop::Unset,
            color: Prop::Unset,
        }
    }

    /// Set the icon size in pixels
    pub fn size(mut self, size: f32) -> Self {
        self.size = Prop::Set(size);
        self
    }

    /// Set the icon color
    pub fn color(mut self, color: Color) -> Self {
        self.color = Prop::Set(color);
        self
    }
}

impl ElementBuilder for Icon {
    fn build(&self) -> UiNode {
        UiNode::new("Icon")
            .prop_set("name", self.name.clone())
            .prop("size", self.size.encode())
            .prop("color", self.color.encode())
    }
}

/// Create an icon by name
pub fn icon(name: impl Into<String>) -> Icon {
    Icon::new(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_shape() {
        let node = icon("check").size(16.0).build();
        assert_eq!(node.tag, "Icon");
        assert_eq!(
            node.get_prop("name"),
            Some(&Prop::Set(PropValue::Str("check".into())))
        );
        assert_eq!(
            node.get_prop("size"),
            Some(&Prop::Set(PropValue::Float(16.0)))
        );
        assert_eq!(node.get_prop("color"), Some(&Prop::Unset));
    }
}
