//! Ordered multiselect widget
//!
//! - `entry` - the ordered list of picked items and swap separators
//! - `label` - position numbering on remove buttons
//! - `strip` - the controls rendered for the entry list
//! - `widget` - `OrderedMultiselect`, which ties the picker, trigger and strip together

mod entry;
mod label;
mod strip;
mod widget;

pub use entry::{Entry, EntryId, EntryList};
pub use label::NumberingPosition;
pub use strip::{AffordanceStyle, Cursor, StripControl};
pub use widget::{ListenerId, OrderedMultiselect, ValueChangeEvent, MAX_REACHED_TEXT};
