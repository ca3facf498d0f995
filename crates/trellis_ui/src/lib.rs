//! # Trellis Component Library (trellis_ui)
//!
//! Styled and composite component builders over `trellis_element` primitives.
//!
//! ## Philosophy
//!
//! - **Primitives**: `trellis_element` provides the encoding layer and the
//!   low-level building blocks (box, stack, text, reactive root)
//! - **Components**: `trellis_ui` provides the component families a dashboard
//!   is made of - badges, cards, charts, tables, dialogs, inputs, tooltips
//!
//! Every builder returns a plain value; `build()` encodes it into a tagged
//! tree for the external renderer. Styling tokens are resolved by the
//! embedding host's design system before concrete values reach a builder.
//!
//! ## Example
//!
//! ```ignore
//! use trellis_ui::prelude::*;
//!
//! let panel = ui::card()
//!     .child(ui::card_header().title("Traffic").description("Last 7 days"))
//!     .child(ui::card_content().child(
//!         chart::line([Series::new("visits", [120.0, 140.0, 90.0])]).smooth(),
//!     ))
//!     .child(ui::card_footer().child(ui::badge("Live").variant(BadgeVariant::Success)));
//! ```

pub mod components;

pub use components::*;

/// Convenience module for accessing components with a `ui::` prefix
pub mod ui {
    pub use crate::components::badge::badge;
    pub use crate::components::card::{card, card_content, card_footer, card_header};
    pub use crate::components::dialog::dialog;
    pub use crate::components::icon::icon;
    pub use crate::components::table::table;
    pub use crate::components::tooltip::{tooltip, tooltip_with};
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::components::badge::{badge, Badge, BadgeVariant};
    pub use crate::components::card::{
        card, card_content, card_footer, card_header, Card, CardContent, CardFooter, CardHeader,
    };
    pub use crate::components::chart::{self, Series, Slice};
    pub use crate::components::dialog::{dialog, Dialog, DialogSize};
    pub use crate::components::icon::{icon, Icon};
    pub use crate::components::input::{self, SelectOption};
    pub use crate::components::table::{table, Cell, Table, TableColumn};
    pub use crate::components::tooltip::{tooltip, tooltip_with, Tooltip};
    pub use crate::ui;
    // Re-export the primitives layer
    pub use trellis_element::prelude::*;
}
