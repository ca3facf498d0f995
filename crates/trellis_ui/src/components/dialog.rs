//! Dialog component for modal dialogs
//!
//! A serializable dialog description: title, optional description, body
//! children, and an action row. The overlay/backdrop machinery belongs to the
//! renderer.
//!
//! # Example
//!
//! ```ignore
//! use trellis_ui::prelude::*;
//!
//! ui::dialog("Confirm Action")
//!     .description("Are you sure you want to proceed?")
//!     .size(DialogSize::Small)
//!     .child(text("This cannot be undone."))
//!     .action(ui::badge("Cancel"))
//!     .action(ui::badge("Confirm"))
//! ```

use trellis_element::prelude::*;

/// Dialog size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DialogSize {
    /// Small dialog (max-width: 400px)
    Small,
    /// Medium dialog (max-width: 500px)
    #[default]
    Medium,
    /// Large dialog (max-width: 600px)
    Large,
    /// Full width dialog (max-width: 800px)
    Full,
}

impl DialogSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            DialogSize::Small => "small",
            DialogSize::Medium => "medium",
            DialogSize::Large => "large",
            DialogSize::Full => "full",
        }
    }

    /// The max width the renderer should apply for this size
    pub fn max_width(&self) -> f32 {
        match self {
            DialogSize::Small => 400.0,
            DialogSize::Medium => 500.0,
            DialogSize::Large => 600.0,
            DialogSize::Full => 800.0,
        }
    }
}

impl ToPropValue for DialogSize {
    fn to_prop_value(&self) -> PropValue {
        PropValue::Str(self.as_str().to_string())
    }
}

/// Modal dialog description
pub struct Dialog {
    title: String,
    description: Prop<String>,
    size: Prop<DialogSize>,
    modal: Prop<bool>,
    dismissible: Prop<bool>,
    children: Vec<BoxedElement>,
    actions: Vec<BoxedElement>,
}

impl Dialog {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Prop::Unset,
            size: Prop::Unset,
            modal: Prop::Unset,
            dismissible: Prop::Unset,
            children: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Set the description line under the title
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Prop::Set(description.into());
        self
    }

    /// Set the dialog size
    pub fn size(mut self, size: DialogSize) -> Self {
        self.size = Prop::Set(size);
        self
    }

    /// Block interaction with content behind the dialog
    pub fn modal(mut self) -> Self {
        self.modal = Prop::Set(true);
        self
    }

    /// Allow dismissal via backdrop click or escape
    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = Prop::Set(dismissible);
        self
    }

    /// Add body content
    pub fn child(mut self, content: impl ElementBuilder + 'static) -> Self {
        self.children.push(Box::new(content));
        self
    }

    /// Add an element to the action row
    pub fn action(mut self, action: impl ElementBuilder + 'static) -> Self {
        self.actions.push(Box::new(action));
        self
    }
}

impl ElementBuilder for Dialog {
    fn build(&self) -> UiNode {
        let mut node = UiNode::new("Dialog")
            .prop_set("title", self.title.clone())
            .prop("description", self.description.encode())
            .prop("size", self.size.encode())
            .prop("modal", self.modal.encode())
            .prop("dismissible", self.dismissible.encode());
        node.children = build_children(&self.children);
        if !self.actions.is_empty() {
            let mut actions = UiNode::new("Dialog.Actions");
            actions.children = build_children(&self.actions);
            node.children.push(actions);
        }
        node
    }
}

/// Create a dialog with a title
pub fn dialog(title: impl Into<String>) -> Dialog {
    Dialog::new(title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::badge::badge;

    #[test]
    fn test_dialog_shape() {
        let node = dialog("Confirm")
            .description("Are you sure?")
            .size(DialogSize::Small)
            .modal()
            .build();

        assert_eq!(node.tag, "Dialog");
        assert_eq!(
            node.get_prop("title"),
            Some(&Prop::Set(PropValue::Str("Confirm".into())))
        );
        assert_eq!(
            node.get_prop("size"),
            Some(&Prop::Set(PropValue::Str("small".into())))
        );
        assert_eq!(node.get_prop("dismissible"), Some(&Prop::Unset));
    }

    #[test]
    fn test_actions_collected_last() {
        let node = dialog("D")
            .child(text("Body"))
            .action(badge("Cancel"))
            .action(badge("OK"))
            .build();

        assert_eq!(node.children.len(), 2);
        assert_eq!(node.children[0].tag, "Text");

        let actions = &node.children[1];
        assert_eq!(actions.tag, "Dialog.Actions");
        assert_eq!(actions.children.len(), 2);
    }

    #[test]
    fn test_no_actions_no_action_row() {
        let node = dialog("D").child(text("Body")).build();
        assert_eq!(node.children.len(), 1);
    }

    #[test]
    fn test_size_max_widths() {
        assert_eq!(DialogSize::Small.max_width(), 400.0);
        assert_eq!(DialogSize::Full.max_width(), 800.0);
    }
}
