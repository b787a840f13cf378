//! Ordered multiselect: pick items from a dropdown into an ordered list
//! that can be reordered and trimmed by clicking.
//!
//! `multiselect::OrderedMultiselect` is the widget. The `tui` and `events`
//! modules draw it with ratatui and turn crossterm input into `Action`s;
//! `app::App` is the terminal host that ties them together.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod log;
pub mod multiselect;
pub mod picker;
pub mod tui;

pub use multiselect::{NumberingPosition, OrderedMultiselect, ValueChangeEvent};
