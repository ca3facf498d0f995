//! Box container builder with tailwind-style methods
//!
//! The Box is the workhorse container: a flex-style element whose optional
//! style fields are each presence-wrapped in the encoded payload. The fluent
//! surface mirrors what a renderer-side stylesheet would expose:
//!
//! ```ignore
//! use trellis_element::prelude::*;
//! use trellis_core::Color;
//!
//! let ui = box_()
//!     .flex_row()
//!     .gap(8.0)
//!     .p(16.0)
//!     .bg(Color::from_hex(0x1a1a2e))
//!     .rounded(8.0)
//!     .child(text("Hello"));
//! ```

use crate::element::{build_children, BoxedElement, ElementBuilder};
use crate::node::UiNode;
use crate::prop::Prop;
use crate::style::{Align, CornerRadius, Dimension, Direction, Edges, Justify, Shadow};
use trellis_core::Color;

/// A flex-style container element
pub struct BoxElement {
    direction: Prop<Direction>,
    wrap: Prop<bool>,
    gap: Prop<f32>,
    padding: Prop<Edges>,
    margin: Prop<Edges>,
    width: Prop<Dimension>,
    height: Prop<Dimension>,
    min_width: Prop<Dimension>,
    max_width: Prop<Dimension>,
    min_height: Prop<Dimension>,
    max_height: Prop<Dimension>,
    grow: Prop<f32>,
    align: Prop<Align>,
    justify: Prop<Justify>,
    background: Prop<Color>,
    border_width: Prop<f32>,
    border_color: Prop<Color>,
    radius: Prop<CornerRadius>,
    shadow: Prop<Shadow>,
    opacity: Prop<f32>,
    pub(crate) children: Vec<BoxedElement>,
}

impl Default for BoxElement {
    fn default() -> Self {
        Self::new()
    }
}

impl BoxElement {
    /// Create a new box with every style field unset
    pub fn new() -> Self {
        Self {
            direction: Prop::Unset,
            wrap: Prop::Unset,
            gap: Prop::Unset,
            padding: Prop::Unset,
            margin: Prop::Unset,
            width: Prop::Unset,
            height: Prop::Unset,
            min_width: Prop::Unset,
            max_width: Prop::Unset,
            min_height: Prop::Unset,
            max_height: Prop::Unset,
            grow: Prop::Unset,
            align: Prop::Unset,
            justify: Prop::Unset,
            background: Prop::Unset,
            border_width: Prop::Unset,
            border_color: Prop::Unset,
            radius: Prop::Unset,
            shadow: Prop::Unset,
            opacity: Prop::Unset,
            children: Vec::new(),
        }
    }

    // =========================================================================
    // Direction & Flow
    // =========================================================================

    /// Lay children out horizontally
    pub fn flex_row(mut self) -> Self {
        self.direction = Prop::Set(Direction::Row);
        self
    }

    /// Lay children out vertically
    pub fn flex_col(mut self) -> Self {
        self.direction = Prop::Set(Direction::Column);
        self
    }

    /// Lay children out horizontally, reversed
    pub fn flex_row_reverse(mut self) -> Self {
        self.direction = Prop::Set(Direction::RowReverse);
        self
    }

    /// Lay children out vertically, reversed
    pub fn flex_col_reverse(mut self) -> Self {
        self.direction = Prop::Set(Direction::ColumnReverse);
        self
    }

    /// Allow children to wrap onto new lines
    pub fn flex_wrap(mut self) -> Self {
        self.wrap = Prop::Set(true);
        self
    }

    /// Grow to fill available space along the parent's main axis
    pub fn flex_grow(mut self) -> Self {
        self.grow = Prop::Set(1.0);
        self
    }

    // =========================================================================
    // Alignment
    // =========================================================================

    /// Align children to the cross-axis start
    pub fn items_start(mut self) -> Self {
        self.align = Prop::Set(Align::Start);
        self
    }

    /// Center children on the cross axis
    pub fn items_center(mut self) -> Self {
        self.align = Prop::Set(Align::Center);
        self
    }

    /// Align children to the cross-axis end
    pub fn items_end(mut self) -> Self {
        self.align = Prop::Set(Align::End);
        self
    }

    /// Stretch children across the cross axis
    pub fn items_stretch(mut self) -> Self {
        self.align = Prop::Set(Align::Stretch);
        self
    }

    /// Pack children at the main-axis start
    pub fn justify_start(mut self) -> Self {
        self.justify = Prop::Set(Justify::Start);
        self
    }

    /// Center children on the main axis
    pub fn justify_center(mut self) -> Self {
        self.justify = Prop::Set(Justify::Center);
        self
    }

    /// Pack children at the main-axis end
    pub fn justify_end(mut self) -> Self {
        self.justify = Prop::Set(Justify::End);
        self
    }

    /// Distribute children with space between them
    pub fn justify_between(mut self) -> Self {
        self.justify = Prop::Set(Justify::SpaceBetween);
        self
    }

    /// Distribute children with space around them
    pub fn justify_around(mut self) -> Self {
        self.justify = Prop::Set(Justify::SpaceAround);
        self
    }

    /// Distribute children with even spacing
    pub fn justify_evenly(mut self) -> Self {
        self.justify = Prop::Set(Justify::SpaceEvenly);
        self
    }

    // =========================================================================
    // Sizing
    // =========================================================================

    /// Set width in pixels
    pub fn w(mut self, px: f32) -> Self {
        self.width = Prop::Set(Dimension::Px(px));
        self
    }

    /// Set width to 100% of the parent
    pub fn w_full(mut self) -> Self {
        self.width = Prop::Set(Dimension::FULL);
        self
    }

    /// Let the renderer size the width
    pub fn w_auto(mut self) -> Self {
        self.width = Prop::Set(Dimension::Auto);
        self
    }

    /// Shrink width to content
    pub fn w_fit(mut self) -> Self {
        self.width = Prop::Set(Dimension::Fit);
        self
    }

    /// Set height in pixels
    pub fn h(mut self, px: f32) -> Self {
        self.height = Prop::Set(Dimension::Px(px));
        self
    }

    /// Set height to 100% of the parent
    pub fn h_full(mut self) -> Self {
        self.height = Prop::Set(Dimension::FULL);
        self
    }

    /// Shrink height to content
    pub fn h_fit(mut self) -> Self {
        self.height = Prop::Set(Dimension::Fit);
        self
    }

    /// Set both width and height in pixels
    pub fn size(self, w: f32, h: f32) -> Self {
        self.w(w).h(h)
    }

    /// Square size (width and height equal)
    pub fn square(self, px: f32) -> Self {
        self.size(px, px)
    }

    /// Set minimum width in pixels
    pub fn min_w(mut self, px: f32) -> Self {
        self.min_width = Prop::Set(Dimension::Px(px));
        self
    }

    /// Set maximum width in pixels
    pub fn max_w(mut self, px: f32) -> Self {
        self.max_width = Prop::Set(Dimension::Px(px));
        self
    }

    /// Set minimum height in pixels
    pub fn min_h(mut self, px: f32) -> Self {
        self.min_height = Prop::Set(Dimension::Px(px));
        self
    }

    /// Set maximum height in pixels
    pub fn max_h(mut self, px: f32) -> Self {
        self.max_height = Prop::Set(Dimension::Px(px));
        self
    }

    // =========================================================================
    // Spacing
    // =========================================================================

    /// Set gap between children in pixels
    pub fn gap(mut self, px: f32) -> Self {
        self.gap = Prop::Set(px);
        self
    }

    /// Set padding on all sides in pixels
    pub fn p(mut self, px: f32) -> Self {
        self.padding = Prop::Set(Edges::all(px));
        self
    }

    /// Set horizontal padding in pixels
    pub fn px(mut self, px: f32) -> Self {
        self.padding = Prop::Set(self.padding.unwrap_or(Edges::ZERO).with_x(px));
        self
    }

    /// Set vertical padding in pixels
    pub fn py(mut self, px: f32) -> Self {
        self.padding = Prop::Set(self.padding.unwrap_or(Edges::ZERO).with_y(px));
        self
    }

    /// Set padding per side
    pub fn padding(mut self, edges: Edges) -> Self {
        self.padding = Prop::Set(edges);
        self
    }

    /// Set margin on all sides in pixels
    pub fn m(mut self, px: f32) -> Self {
        self.margin = Prop::Set(Edges::all(px));
        self
    }

    /// Set horizontal margin in pixels
    pub fn mx(mut self, px: f32) -> Self {
        self.margin = Prop::Set(self.margin.unwrap_or(Edges::ZERO).with_x(px));
        self
    }

    /// Set vertical margin in pixels
    pub fn my(mut self, px: f32) -> Self {
        self.margin = Prop::Set(self.margin.unwrap_or(Edges::ZERO).with_y(px));
        self
    }

    /// Set margin per side
    pub fn margin(mut self, edges: Edges) -> Self {
        self.margin = Prop::Set(edges);
        self
    }

    // =========================================================================
    // Visual
    // =========================================================================

    /// Set background color
    pub fn bg(mut self, color: Color) -> Self {
        self.background = Prop::Set(color);
        self
    }

    /// Set border width and color
    pub fn border(mut self, width: f32, color: Color) -> Self {
        self.border_width = Prop::Set(width);
        self.border_color = Prop::Set(color);
        self
    }

    /// Set corner radius (all corners)
    pub fn rounded(mut self, radius: f32) -> Self {
        self.radius = Prop::Set(CornerRadius::uniform(radius));
        self
    }

    /// Pill shape
    pub fn rounded_full(mut self) -> Self {
        self.radius = Prop::Set(CornerRadius::full());
        self
    }

    /// Set individual corner radii
    pub fn rounded_corners(mut self, tl: f32, tr: f32, br: f32, bl: f32) -> Self {
        self.radius = Prop::Set(CornerRadius {
            top_left: tl,
            top_right: tr,
            bottom_right: br,
            bottom_left: bl,
        });
        self
    }

    /// Apply a drop shadow
    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Prop::Set(shadow);
        self
    }

    /// Small drop shadow
    pub fn shadow_sm(self) -> Self {
        self.shadow(Shadow::sm())
    }

    /// Medium drop shadow
    pub fn shadow_md(self) -> Self {
        self.shadow(Shadow::md())
    }

    /// Large drop shadow
    pub fn shadow_lg(self) -> Self {
        self.shadow(Shadow::lg())
    }

    /// Extra large drop shadow
    pub fn shadow_xl(self) -> Self {
        self.shadow(Shadow::xl())
    }

    /// Set opacity (0.0 = transparent, 1.0 = opaque)
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Prop::Set(opacity);
        self
    }

    // =========================================================================
    // Children
    // =========================================================================

    /// Append a child element
    pub fn child(mut self, child: impl ElementBuilder + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// Append multiple children
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: ElementBuilder + 'static,
    {
        for child in children {
            self.children.push(Box::new(child));
        }
        self
    }

    /// Encode under a different tag; used by containers that specialize Box
    /// (Stack here, Card in the component layer)
    pub fn build_with_tag(&self, tag: &'static str) -> UiNode {
        let mut node = UiNode::new(tag)
            .prop("direction", self.direction.encode())
            .prop("wrap", self.wrap.encode())
            .prop("gap", self.gap.encode())
            .prop("padding", self.padding.encode())
            .prop("margin", self.margin.encode())
            .prop("width", self.width.encode())
            .prop("height", self.height.encode())
            .prop("min_width", self.min_width.encode())
            .prop("max_width", self.max_width.encode())
            .prop("min_height", self.min_height.encode())
            .prop("max_height", self.max_height.encode())
            .prop("grow", self.grow.encode())
            .prop("align", self.align.encode())
            .prop("justify", self.justify.encode())
            .prop("background", self.background.encode())
            .prop("border_width", self.border_width.encode())
            .prop("border_color", self.border_color.encode())
            .prop("radius", self.radius.encode())
            .prop("shadow", self.shadow.encode())
            .prop("opacity", self.opacity.encode());
        node.children = build_children(&self.children);
        node
    }
}

impl ElementBuilder for BoxElement {
    fn build(&self) -> UiNode {
        self.build_with_tag("Box")
    }
}

/// Create a box container (`box` is a keyword, hence the trailing underscore)
pub fn box_() -> BoxElement {
    BoxElement::new()
}

/// Create a box laid out horizontally
pub fn row() -> BoxElement {
    BoxElement::new().flex_row()
}

/// Create a box laid out vertically
pub fn column() -> BoxElement {
    BoxElement::new().flex_col()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prop::PropValue;
    use crate::text::text;

    #[test]
    fn test_unstyled_box_is_all_unset() {
        let node = box_().build();
        assert_eq!(node.tag, "Box");
        assert!(node.props.values().all(|prop| !prop.is_set()));
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_styled_box() {
        let node = box_()
            .flex_row()
            .gap(8.0)
            .p(16.0)
            .bg(Color::RED)
            .rounded(4.0)
            .build();

        assert_eq!(
            node.get_prop("direction"),
            Some(&Prop::Set(PropValue::Str("row".into())))
        );
        assert_eq!(
            node.get_prop("gap"),
            Some(&Prop::Set(PropValue::Float(8.0)))
        );
        assert_eq!(
            node.get_prop("background"),
            Some(&Prop::Set(PropValue::Color(Color::RED)))
        );
        // Fields never touched stay explicitly unset
        assert_eq!(node.get_prop("opacity"), Some(&Prop::Unset));
    }

    #[test]
    fn test_children_in_document_order() {
        let node = row().child(text("a")).child(text("b")).build();
        assert_eq!(node.children.len(), 2);
        assert_eq!(node.children[0].tag, "Text");
    }

    #[test]
    fn test_px_py_compose() {
        let node = box_().px(12.0).py(4.0).build();
        let padding = node.get_prop("padding").unwrap();
        let Prop::Set(PropValue::Map(map)) = padding else {
            panic!("padding should be set to a map");
        };
        assert_eq!(map["left"], PropValue::Float(12.0));
        assert_eq!(map["top"], PropValue::Float(4.0));
    }

    #[test]
    fn test_helpers_set_direction() {
        assert_eq!(
            row().build().get_prop("direction"),
            Some(&Prop::Set(PropValue::Str("row".into())))
        );
        assert_eq!(
            column().build().get_prop("direction"),
            Some(&Prop::Set(PropValue::Str("column".into())))
        );
    }
}
