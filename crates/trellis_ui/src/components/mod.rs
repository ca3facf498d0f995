//! Component modules
//!
//! One module per component family, each producing tagged tree values through
//! the `trellis_element` encoding layer.

pub mod badge;
pub mod card;
pub mod chart;
pub mod dialog;
pub mod icon;
pub mod input;
pub mod table;
pub mod tooltip;
