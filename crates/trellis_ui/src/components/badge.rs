//! Badge component for status indicators
//!
//! Small labeled indicators for status, counts, or categories.
//!
//! # Example
//!
//! ```ignore
//! use trellis_ui::prelude::*;
//!
//! // Default badge
//! ui::badge("New")
//!
//! // Variant badges
//! ui::badge("Success").variant(BadgeVariant::Success)
//! ui::badge("Draft").variant(BadgeVariant::Outline)
//! ```

use trellis_core::Color;
use trellis_element::prelude::*;

/// Badge visual variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Default badge - primary color
    #[default]
    Default,
    /// Secondary badge - muted
    Secondary,
    /// Success badge - green
    Success,
    /// Warning badge - yellow/orange
    Warning,
    /// Destructive badge - red
    Destructive,
    /// Outline badge - border only
    Outline,
}

impl BadgeVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "default",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Outline => "outline",
        }
    }
}

/// Badge component for status indicators
pub struct Badge {
    label: String,
    variant: BadgeVariant,
    color: Prop<Color>,
}

impl Badge {
    /// Create a new badge with text
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: BadgeVariant::default(),
            color: Prop::Unset,
        }
    }

    /// Set the badge variant
    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Override the variant's color
    pub fn color(mut self, color: Color) -> Self {
        self.color = Prop::Set(color);
        self
    }
}

impl ElementBuilder for Badge {
    fn build(&self) -> UiNode {
        UiNode::new("Badge")
            .prop_set("label", self.label.clone())
            .prop_set("variant", self.variant.as_str())
            .prop("color", self.color.encode())
    }
}

/// Create a badge with text
pub fn badge(label: impl Into<String>) -> Badge {
    Badge::new(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_badge_default() {
        let node = badge("Test").build();
        assert_eq!(
            node.to_json(),
            json!({
                "tag": "Badge",
                "props": {
                    "label": {"presence": "set", "value": {"type": "str", "value": "Test"}},
                    "variant": {"presence": "set", "value": {"type": "str", "value": "default"}},
                    "color": {"presence": "unset"},
                },
                "children": [],
            })
        );
    }

    #[test]
    fn test_badge_variants() {
        let node = badge("Error").variant(BadgeVariant::Destructive).build();
        assert_eq!(
            node.get_prop("variant"),
            Some(&Prop::Set(PropValue::Str("destructive".into())))
        );
    }

    #[test]
    fn test_badge_color_override() {
        let node = badge("Custom").color(Color::BLUE).build();
        assert_eq!(
            node.get_prop("color"),
            Some(&Prop::Set(PropValue::Color(Color::BLUE)))
        );
    }
}
