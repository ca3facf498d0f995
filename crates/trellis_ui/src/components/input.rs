//! Input components - state-bound form controls
//!
//! Every input names the state key it binds to; the renderer wires edits back
//! into the platform store under that key, and reactive roots that declared
//! the key re-render. Descriptions never hold live values, only the binding
//! and an optional initial.
//!
//! # Example
//!
//! ```ignore
//! use trellis_ui::prelude::*;
//!
//! input::text("form.username").placeholder("Enter username")
//! input::checkbox("form.subscribe").label("Subscribe to updates")
//! input::select("form.country")
//!     .option("us", "United States")
//!     .option("de", "Germany")
//! input::slider("form.volume").range(0.0, 100.0).step(5.0)
//! ```

use trellis_element::prelude::*;

/// Text input bound to a state key
pub struct TextInput {
    bind: String,
    label: Prop<String>,
    placeholder: Prop<String>,
    initial: Prop<String>,
    disabled: Prop<bool>,
    masked: Prop<bool>,
}

impl TextInput {
    pub fn new(bind: impl Into<String>) -> Self {
        Self {
            bind: bind.into(),
            label: Prop::Unset,
            placeholder: Prop::Unset,
            initial: Prop::Unset,
            disabled: Prop::Unset,
            masked: Prop::Unset,
        }
    }

    /// Label shown above the field
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Prop::Set(label.into());
        self
    }

    /// Placeholder shown while empty
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Prop::Set(placeholder.into());
        self
    }

    /// Value written to the bound key when it holds nothing yet
    pub fn initial(mut self, initial: impl Into<String>) -> Self {
        self.initial = Prop::Set(initial.into());
        self
    }

    /// Disable editing
    pub fn disabled(mut self) -> Self {
        self.disabled = Prop::Set(true);
        self
    }

    /// Mask typed characters (password entry)
    pub fn masked(mut self) -> Self {
        self.masked = Prop::Set(true);
        self
    }
}

impl ElementBuilder for TextInput {
    fn build(&self) -> UiNode {
        UiNode::new("Input.Text")
            .prop_set("bind", self.bind.clone())
            .prop("label", self.label.encode())
            .prop("placeholder", self.placeholder.encode())
            .prop("initial", self.initial.encode())
            .prop("disabled", self.disabled.encode())
            .prop("masked", self.masked.encode())
    }
}

/// Create a text input bound to a state key
pub fn text(bind: impl Into<String>) -> TextInput {
    TextInput::new(bind)
}

/// Checkbox bound to a state key
pub struct Checkbox {
    bind: String,
    label: Prop<String>,
    initial: Prop<bool>,
    disabled: Prop<bool>,
}

impl Checkbox {
    pub fn new(bind: impl Into<String>) -> Self {
        Self {
            bind: bind.into(),
            label: Prop::Unset,
            initial: Prop::Unset,
            disabled: Prop::Unset,
        }
    }

    /// Label shown beside the box
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Prop::Set(label.into());
        self
    }

    /// Checked state written when the bound key holds nothing yet
    pub fn initial(mut self, checked: bool) -> Self {
        self.initial = Prop::Set(checked);
        self
    }

    /// Disable toggling
    pub fn disabled(mut self) -> Self {
        self.disabled = Prop::Set(true);
        self
    }
}

impl ElementBuilder for Checkbox {
    fn build(&self) -> UiNode {
        UiNode::new("Input.Checkbox")
            .prop_set("bind", self.bind.clone())
            .prop("label", self.label.encode())
            .prop("initial", self.initial.encode())
            .prop("disabled", self.disabled.encode())
    }
}

/// Create a checkbox bound to a state key
pub fn checkbox(bind: impl Into<String>) -> Checkbox {
    Checkbox::new(bind)
}

/// One selectable option
#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption {
    value: String,
    label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

impl ToPropValue for SelectOption {
    fn to_prop_value(&self) -> PropValue {
        PropValue::map([
            ("value", PropValue::Str(self.value.clone())),
            ("label", PropValue::Str(self.label.clone())),
        ])
    }
}

/// Select dropdown bound to a state key
pub struct Select {
    bind: String,
    options: Vec<SelectOption>,
    placeholder: Prop<String>,
    disabled: Prop<bool>,
}

impl Select {
    pub fn new(bind: impl Into<String>) -> Self {
        Self {
            bind: bind.into(),
            options: Vec::new(),
            placeholder: Prop::Unset,
            disabled: Prop::Unset,
        }
    }

    /// Add one option
    pub fn option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.push(SelectOption::new(value, label));
        self
    }

    /// Add several options
    pub fn options(mut self, options: impl IntoIterator<Item = SelectOption>) -> Self {
        self.options.extend(options);
        self
    }

    /// Placeholder shown before a selection is made
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Prop::Set(placeholder.into());
        self
    }

    /// Disable the control
    pub fn disabled(mut self) -> Self {
        self.disabled = Prop::Set(true);
        self
    }
}

impl ElementBuilder for Select {
    fn build(&self) -> UiNode {
        UiNode::new("Input.Select")
            .prop_set("bind", self.bind.clone())
            .prop_set("options", self.options.clone())
            .prop("placeholder", self.placeholder.encode())
            .prop("disabled", self.disabled.encode())
    }
}

/// Create a select bound to a state key
pub fn select(bind: impl Into<String>) -> Select {
    Select::new(bind)
}

/// Slider bound to a state key
pub struct Slider {
    bind: String,
    min: Prop<f64>,
    max: Prop<f64>,
    step: Prop<f64>,
    initial: Prop<f64>,
    disabled: Prop<bool>,
}

impl Slider {
    pub fn new(bind: impl Into<String>) -> Self {
        Self {
            bind: bind.into(),
            min: Prop::Unset,
            max: Prop::Unset,
            step: Prop::Unset,
            initial: Prop::Unset,
            disabled: Prop::Unset,
        }
    }

    /// Set the value range
    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = Prop::Set(min);
        self.max = Prop::Set(max);
        self
    }

    /// Snap values to multiples of `step`
    pub fn step(mut self, step: f64) -> Self {
        self.step = Prop::Set(step);
        self
    }

    /// Value written when the bound key holds nothing yet
    pub fn initial(mut self, value: f64) -> Self {
        self.initial = Prop::Set(value);
        self
    }

    /// Disable the control
    pub fn disabled(mut self) -> Self {
        self.disabled = Prop::Set(true);
        self
    }
}

impl ElementBuilder for Slider {
    fn build(&self) -> UiNode {
        UiNode::new("Input.Slider")
            .prop_set("bind", self.bind.clone())
            .prop("min", self.min.encode())
            .prop("max", self.max.encode())
            .prop("step", self.step.encode())
            .prop("initial", self.initial.encode())
            .prop("disabled", self.disabled.encode())
    }
}

/// Create a slider bound to a state key
pub fn slider(bind: impl Into<String>) -> Slider {
    Slider::new(bind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_input_shape() {
        let node = text("form.username")
            .placeholder("Enter username")
            .build();

        assert_eq!(node.tag, "Input.Text");
        assert_eq!(
            node.get_prop("bind"),
            Some(&Prop::Set(PropValue::Str("form.username".into())))
        );
        assert_eq!(node.get_prop("masked"), Some(&Prop::Unset));
    }

    #[test]
    fn test_masked_text_input() {
        let node = text("form.password").masked().build();
        assert_eq!(
            node.get_prop("masked"),
            Some(&Prop::Set(PropValue::Bool(true)))
        );
    }

    #[test]
    fn test_checkbox_shape() {
        let node = checkbox("form.subscribe")
            .label("Subscribe")
            .initial(true)
            .build();

        assert_eq!(node.tag, "Input.Checkbox");
        assert_eq!(
            node.get_prop("initial"),
            Some(&Prop::Set(PropValue::Bool(true)))
        );
    }

    #[test]
    fn test_select_options() {
        let node = select("form.country")
            .option("us", "United States")
            .option("de", "Germany")
            .build();

        assert_eq!(
            serde_json::to_value(node.get_prop("options").unwrap()).unwrap(),
            json!({"presence": "set", "value": {"type": "list", "value": [
                {"type": "map", "value": {
                    "value": {"type": "str", "value": "us"},
                    "label": {"type": "str", "value": "United States"},
                }},
                {"type": "map", "value": {
                    "value": {"type": "str", "value": "de"},
                    "label": {"type": "str", "value": "Germany"},
                }},
            ]}})
        );
    }

    #[test]
    fn test_slider_range() {
        let node = slider("form.volume").range(0.0, 100.0).step(5.0).build();
        assert_eq!(node.tag, "Input.Slider");
        assert_eq!(node.get_prop("min"), Some(&Prop::Set(PropValue::Float(0.0))));
        assert_eq!(
            node.get_prop("max"),
            Some(&Prop::Set(PropValue::Float(100.0)))
        );
    }
}
