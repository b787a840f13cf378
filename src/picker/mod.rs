//! Dropdown value picker
//!
//! `Picker` carries the selection logic shared by list-based pickers;
//! `Select` is the dropdown the multiselect draws its items from.

mod select;
mod traits;

pub use select::{ItemLabelGenerator, Select};
pub use traits::Picker;
