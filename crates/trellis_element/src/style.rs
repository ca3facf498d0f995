//! Style vocabulary shared by the component builders
//!
//! Layout interpretation (flexbox resolution, measurement, wrapping) happens
//! in the external renderer; these types only describe intent. Simple enums
//! encode as their lowercase names, compound values as small maps.

use trellis_core::Color;

use crate::prop::{PropValue, ToPropValue};

/// Main-axis direction of a container
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    Row,
    #[default]
    Column,
    RowReverse,
    ColumnReverse,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Row => "row",
            Direction::Column => "column",
            Direction::RowReverse => "row_reverse",
            Direction::ColumnReverse => "column_reverse",
        }
    }
}

/// Cross-axis alignment of children
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
    Stretch,
    Baseline,
}

impl Align {
    pub fn as_str(&self) -> &'static str {
        match self {
            Align::Start => "start",
            Align::Center => "center",
            Align::End => "end",
            Align::Stretch => "stretch",
            Align::Baseline => "baseline",
        }
    }
}

/// Main-axis distribution of children
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Justify {
    #[default]
    Start,
    Center,
    End,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

impl Justify {
    pub fn as_str(&self) -> &'static str {
        match self {
            Justify::Start => "start",
            Justify::Center => "center",
            Justify::End => "end",
            Justify::SpaceBetween => "space_between",
            Justify::SpaceAround => "space_around",
            Justify::SpaceEvenly => "space_evenly",
        }
    }
}

/// One sizing dimension
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Dimension {
    /// Fixed pixels
    Px(f32),
    /// Fraction of the parent (1.0 = full)
    Fraction(f32),
    /// Sized by the renderer
    Auto,
    /// Shrink to content
    Fit,
}

impl Dimension {
    pub const FULL: Dimension = Dimension::Fraction(1.0);
}

impl ToPropValue for Dimension {
    fn to_prop_value(&self) -> PropValue {
        match self {
            Dimension::Px(px) => PropValue::map([
                ("unit", PropValue::Str("px".into())),
                ("value", PropValue::Float(*px as f64)),
            ]),
            Dimension::Fraction(fraction) => PropValue::map([
                ("unit", PropValue::Str("fraction".into())),
                ("value", PropValue::Float(*fraction as f64)),
            ]),
            Dimension::Auto => PropValue::map([("unit", PropValue::Str("auto".into()))]),
            Dimension::Fit => PropValue::map([("unit", PropValue::Str("fit".into()))]),
        }
    }
}

/// Per-side spacing (padding or margin)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    pub const ZERO: Edges = Edges::all(0.0);

    pub const fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub const fn xy(x: f32, y: f32) -> Self {
        Self {
            top: y,
            right: x,
            bottom: y,
            left: x,
        }
    }

    pub fn with_x(mut self, x: f32) -> Self {
        self.left = x;
        self.right = x;
        self
    }

    pub fn with_y(mut self, y: f32) -> Self {
        self.top = y;
        self.bottom = y;
        self
    }
}

impl ToPropValue for Edges {
    fn to_prop_value(&self) -> PropValue {
        PropValue::map([
            ("top", PropValue::Float(self.top as f64)),
            ("right", PropValue::Float(self.right as f64)),
            ("bottom", PropValue::Float(self.bottom as f64)),
            ("left", PropValue::Float(self.left as f64)),
        ])
    }
}

/// Font weight for text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
}

impl FontWeight {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontWeight::Regular => "regular",
            FontWeight::Medium => "medium",
            FontWeight::Semibold => "semibold",
            FontWeight::Bold => "bold",
        }
    }
}

/// Horizontal text alignment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Drop shadow description
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub color: Color,
}

impl Shadow {
    pub fn new(offset_x: f32, offset_y: f32, blur: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            color,
        }
    }

    pub fn sm() -> Self {
        Self::new(0.0, 1.0, 2.0, Color::BLACK.with_alpha(0.05))
    }

    pub fn md() -> Self {
        Self::new(0.0, 4.0, 6.0, Color::BLACK.with_alpha(0.1))
    }

    pub fn lg() -> Self {
        Self::new(0.0, 10.0, 15.0, Color::BLACK.with_alpha(0.1))
    }

    pub fn xl() -> Self {
        Self::new(0.0, 20.0, 25.0, Color::BLACK.with_alpha(0.1))
    }
}

impl ToPropValue for Shadow {
    fn to_prop_value(&self) -> PropValue {
        PropValue::map([
            ("offset_x", PropValue::Float(self.offset_x as f64)),
            ("offset_y", PropValue::Float(self.offset_y as f64)),
            ("blur", PropValue::Float(self.blur as f64)),
            ("color", PropValue::Color(self.color)),
        ])
    }
}

/// Per-corner radius
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerRadius {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadius {
    /// Radius large enough that any box renders as a pill
    const PILL: f32 = 9999.0;

    pub const fn uniform(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    pub const fn full() -> Self {
        Self::uniform(Self::PILL)
    }
}

impl ToPropValue for CornerRadius {
    fn to_prop_value(&self) -> PropValue {
        PropValue::map([
            ("top_left", PropValue::Float(self.top_left as f64)),
            ("top_right", PropValue::Float(self.top_right as f64)),
            ("bottom_right", PropValue::Float(self.bottom_right as f64)),
            ("bottom_left", PropValue::Float(self.bottom_left as f64)),
        ])
    }
}

/// Side of an anchor a floating element attaches to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Placement {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl Placement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Placement::Top => "top",
            Placement::Bottom => "bottom",
            Placement::Left => "left",
            Placement::Right => "right",
        }
    }
}

macro_rules! prop_value_from_as_str {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ToPropValue for $ty {
                fn to_prop_value(&self) -> PropValue {
                    PropValue::Str(self.as_str().to_string())
                }
            }
        )+
    };
}

prop_value_from_as_str!(Direction, Align, Justify, FontWeight, TextAlign, Placement);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_enum_encoding() {
        assert_eq!(
            serde_json::to_value(Direction::RowReverse.to_prop_value()).unwrap(),
            json!({"type": "str", "value": "row_reverse"})
        );
    }

    #[test]
    fn test_dimension_encoding() {
        let px = Dimension::Px(120.0).to_prop_value();
        assert_eq!(
            serde_json::to_value(px).unwrap(),
            json!({"type": "map", "value": {
                "unit": {"type": "str", "value": "px"},
                "value": {"type": "float", "value": 120.0},
            }})
        );

        let auto = Dimension::Auto.to_prop_value();
        assert_eq!(
            serde_json::to_value(auto).unwrap(),
            json!({"type": "map", "value": {"unit": {"type": "str", "value": "auto"}}})
        );
    }

    #[test]
    fn test_edges_constructors() {
        let e = Edges::xy(16.0, 8.0);
        assert_eq!(e.left, 16.0);
        assert_eq!(e.top, 8.0);

        let e = Edges::all(4.0).with_y(0.0);
        assert_eq!(e.right, 4.0);
        assert_eq!(e.bottom, 0.0);
    }

    #[test]
    fn test_corner_radius_full() {
        let r = CornerRadius::full();
        assert_eq!(r.top_left, r.bottom_right);
        assert!(r.top_left >= 9999.0);
    }
}
