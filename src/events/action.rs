//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents. Mouse regions and key bindings produce
//! them; `App::apply` is the only place they change state.

use crate::multiselect::EntryId;

/// Actions that can be dispatched from event handlers.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // === Application ===
    /// Quit the application
    Quit,

    // === Picker ===
    /// Open or close the dropdown
    TogglePicker,
    /// Close the dropdown
    ClosePicker,
    /// Pick catalog item by index
    PickItem(usize),
    /// Move the picker selection down
    PickNext,
    /// Move the picker selection up
    PickPrev,

    // === Entry list ===
    /// Click on the add trigger
    AddSelected,
    /// Click on a remove button
    RemoveEntry(EntryId),
    /// Click on a swap affordance
    SwapAt(EntryId),
    /// Remove every entry
    Clear,

    // === Widget state ===
    /// Enable or disable the whole widget
    ToggleEnabled,
    /// Flip between "(n) label" and "label (n)"
    ToggleNumbering,

    /// No action
    None,
}
