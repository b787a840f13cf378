//! The ordered multiselect widget.

use std::fmt;
use std::rc::Rc;

use super::strip::{build_strip, restyle_affordances};
use super::{EntryId, EntryList, NumberingPosition, StripControl};
use crate::error::{MultiselectError, MultiselectResult};
use crate::log::{DiagnosticSink, NullLog};
use crate::picker::{ItemLabelGenerator, Picker, Select};

/// Trigger text shown once the item cap is reached.
pub const MAX_REACHED_TEXT: &str = "No items could be added anymore.";

/// Handle for removing a value change listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Fired whenever the observable value changes
#[derive(Debug, Clone, PartialEq)]
pub struct ValueChangeEvent<T> {
    pub old_value: Vec<T>,
    pub value: Vec<T>,
    /// True if a click on the widget caused the change
    pub from_client: bool,
}

type Listener<T> = Box<dyn FnMut(&ValueChangeEvent<T>)>;

/// Picks items from a dropdown into an ordered, editable list.
///
/// Each pick is shown as a remove button numbered by position, with a swap
/// affordance between every two neighbours. The value is the picked items in
/// order.
pub struct OrderedMultiselect<T> {
    select: Select<T>,
    entries: EntryList<T>,
    strip: Vec<StripControl>,
    strip_enabled: bool,

    description: String,
    button_text: String,
    button_width: Option<u16>,
    trigger_enabled: bool,
    trigger_text: String,
    /// Cleared by an add, set again by a fresh pick or a removal
    trigger_armed: bool,

    max_items: usize,
    numbering: NumberingPosition,

    observed: Vec<T>,
    listeners: Vec<(ListenerId, Listener<T>)>,
    next_listener: u64,
    sink: Rc<dyn DiagnosticSink>,
}

impl<T: fmt::Debug> fmt::Debug for OrderedMultiselect<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedMultiselect")
            .field("select", &self.select)
            .field("entries", &self.entries)
            .field("strip", &self.strip)
            .field("trigger_enabled", &self.trigger_enabled)
            .field("max_items", &self.max_items)
            .field("numbering", &self.numbering)
            .finish_non_exhaustive()
    }
}

impl<T: Clone + PartialEq> Default for OrderedMultiselect<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + PartialEq> OrderedMultiselect<T> {
    pub fn new() -> Self {
        let mut widget = Self {
            select: Select::new(),
            entries: EntryList::new(),
            strip: Vec::new(),
            strip_enabled: true,
            description: String::new(),
            button_text: String::new(),
            button_width: None,
            trigger_enabled: false,
            trigger_text: String::new(),
            trigger_armed: false,
            max_items: 0,
            numbering: NumberingPosition::default(),
            observed: Vec::new(),
            listeners: Vec::new(),
            next_listener: 0,
            sink: Rc::new(NullLog),
        };
        widget.refresh_labels(false);
        widget
    }

    pub fn with_select_label(label: impl Into<String>) -> Self {
        let mut widget = Self::new();
        widget.set_select_label(label);
        widget
    }

    pub fn set_diagnostic_sink(&mut self, sink: Rc<dyn DiagnosticSink>) {
        self.sink = sink;
    }

    // === Catalog and labels ===

    /// Replace the items offered by the picker. The picker selection is dropped.
    pub fn set_items(&mut self, items: impl IntoIterator<Item = T>) {
        self.select.set_items(items.into_iter().collect());
        self.update_trigger(false);
    }

    pub fn items(&self) -> &[T] {
        self.select.items()
    }

    pub fn set_item_label_generator(&mut self, generator: impl Fn(&T) -> String + 'static) {
        let generator: ItemLabelGenerator<T> = Rc::new(generator);
        self.select.set_label_generator(generator);
        self.refresh_labels(false);
    }

    /// Display text for `item` as the picker shows it
    pub fn item_label(&self, item: &T) -> String {
        self.select.item_label(item)
    }

    // === Configuration ===

    /// Cap the number of items. `None` or a non-positive cap means unlimited.
    pub fn set_max_items(&mut self, max: Option<i64>) {
        self.max_items = max.filter(|m| *m > 0).map_or(0, |m| m as usize);
        self.update_trigger(self.trigger_armed);
    }

    /// The item cap, 0 if unlimited
    pub fn max_items(&self) -> usize {
        self.max_items
    }

    pub fn set_numbering_position(&mut self, numbering: NumberingPosition) {
        self.numbering = numbering;
        self.refresh_labels(false);
    }

    /// `None` means the default, numbers right of the text.
    pub fn set_numbers_left_of_text(&mut self, left: Option<bool>) {
        self.set_numbering_position(NumberingPosition::from_numbers_left_of_text(
            left.unwrap_or(false),
        ));
    }

    pub fn numbering_position(&self) -> NumberingPosition {
        self.numbering
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_select_label(&mut self, label: impl Into<String>) {
        self.select.set_label(label);
    }

    pub fn select_label(&self) -> &str {
        self.select.label()
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.set_select_label(label);
    }

    pub fn label(&self) -> &str {
        self.select_label()
    }

    pub fn set_select_width(&mut self, width: Option<u16>) {
        self.select.set_width(width);
    }

    pub fn select_width(&self) -> Option<u16> {
        self.select.width()
    }

    pub fn set_button_text(&mut self, text: impl Into<String>) {
        self.button_text = text.into();
        self.update_trigger(self.trigger_armed);
    }

    /// The configured trigger text, whatever is currently displayed
    pub fn button_text(&self) -> &str {
        &self.button_text
    }

    pub fn set_button_width(&mut self, width: Option<u16>) {
        self.button_width = width;
    }

    pub fn button_width(&self) -> Option<u16> {
        self.button_width
    }

    // === Value ===

    /// The picked items in order
    pub fn value(&self) -> Vec<T> {
        self.entries.values()
    }

    /// Replace the value. Items past the cap are dropped.
    ///
    /// A non-empty value disarms the add trigger like an add does.
    pub fn set_value(&mut self, value: Vec<T>) {
        self.entries.clear();
        let appended = !value.is_empty();
        for item in value {
            if self.max_reached() {
                self.sink
                    .warn("set_value: more items than the configured maximum, rest dropped");
                break;
            }
            self.entries.push(item);
        }
        self.refresh_labels(false);
        if appended {
            self.update_trigger(false);
        } else {
            self.update_trigger(self.trigger_armed);
        }
    }

    pub fn empty_value(&self) -> Vec<T> {
        Vec::new()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.refresh_labels(false);
        self.update_trigger(true);
    }

    pub fn entries(&self) -> &EntryList<T> {
        &self.entries
    }

    pub fn add_value_change_listener(
        &mut self,
        listener: impl FnMut(&ValueChangeEvent<T>) + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn remove_value_change_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(l, _)| *l != id);
        self.listeners.len() != before
    }

    // === Picker ===

    pub fn picker(&self) -> &Select<T> {
        &self.select
    }

    /// Label of the picker's current selection
    pub fn selected_label(&self) -> Option<String> {
        self.select.selected_item().map(|item| self.select.item_label(item))
    }

    /// Pick the catalog item at `index`, or drop the selection with `None`.
    pub fn select_item(&mut self, index: Option<usize>) {
        if !self.select.is_enabled() {
            return;
        }
        self.select.select_index(index);
        self.select.close();
        self.update_trigger(self.select.selected_index().is_some());
    }

    pub fn select_next(&mut self) {
        if self.select.is_enabled() {
            self.select.select_next();
            self.update_trigger(self.select.selected_index().is_some());
        }
    }

    pub fn select_prev(&mut self) {
        if self.select.is_enabled() {
            self.select.select_prev();
            self.update_trigger(self.select.selected_index().is_some());
        }
    }

    pub fn toggle_picker(&mut self) {
        self.select.toggle_open();
    }

    pub fn close_picker(&mut self) {
        self.select.close();
    }

    // === Add trigger ===

    pub fn trigger_enabled(&self) -> bool {
        self.trigger_enabled
    }

    /// Text currently displayed on the trigger
    pub fn trigger_text(&self) -> &str {
        &self.trigger_text
    }

    /// Click on the add trigger
    pub fn add_selected(&mut self) {
        if !self.trigger_enabled {
            return;
        }
        let item = self.select.selected_item().cloned();
        self.append(item, true);
    }

    /// Append `item` to the list. `None` and appends past the cap are ignored.
    pub fn append(&mut self, item: Option<T>, from_client: bool) {
        let Some(item) = item else {
            return;
        };
        if self.max_reached() {
            return;
        }
        self.entries.push(item);
        self.refresh_labels(from_client);
        self.update_trigger(false);
    }

    fn max_reached(&self) -> bool {
        self.max_items > 0 && self.entries.len() >= 2 * self.max_items - 1
    }

    fn update_trigger(&mut self, armed: bool) {
        self.trigger_armed = armed;
        let max_reached = self.max_reached();
        self.trigger_enabled = armed
            && self.select.is_enabled()
            && self.select.selected_item().is_some()
            && !max_reached;
        self.trigger_text = if max_reached {
            MAX_REACHED_TEXT.to_string()
        } else {
            self.button_text.clone()
        };
    }

    // === Strip ===

    pub fn strip(&self) -> &[StripControl] {
        &self.strip
    }

    pub fn strip_enabled(&self) -> bool {
        self.strip_enabled
    }

    /// Click on a remove button, resolved by the button's text.
    pub fn remove_by_label(&mut self, text: &str) {
        if !self.strip_enabled {
            return;
        }
        if let Err(e) = self.try_remove_by_label(text) {
            self.sink.error(&e.to_string());
        }
    }

    /// Remove the item whose button reads `text`.
    ///
    /// `Ok(None)` means there was nothing to do.
    pub fn try_remove_by_label(&mut self, text: &str) -> MultiselectResult<Option<T>> {
        if self.entries.is_empty() || text.trim().is_empty() {
            return Ok(None);
        }

        let position = self
            .numbering
            .parse(text)
            .filter(|n| *n <= self.entries.item_count())
            .ok_or_else(|| MultiselectError::MalformedLabel(text.to_string()))?;

        Ok(self.remove_index(2 * (position - 1)))
    }

    /// Click on a remove button, resolved by the entry it was rendered for.
    pub fn remove_entry(&mut self, id: EntryId) {
        if !self.strip_enabled {
            return;
        }
        if let Err(e) = self.try_remove_entry(id) {
            self.sink.error(&e.to_string());
        }
    }

    pub fn try_remove_entry(&mut self, id: EntryId) -> MultiselectResult<T> {
        let index = self
            .entries
            .position_of(id)
            .ok_or(MultiselectError::UnknownEntry(id))?;
        self.remove_index(index)
            .ok_or(MultiselectError::UnknownEntry(id))
    }

    fn remove_index(&mut self, index: usize) -> Option<T> {
        let removed = self.entries.remove_item_at(index)?;
        self.refresh_labels(true);
        self.update_trigger(true);
        Some(removed)
    }

    /// Click on a swap affordance, resolved by its position identifier.
    pub fn swap_adjacent(&mut self, position_id: &str) {
        if !self.strip_enabled {
            return;
        }
        if let Err(e) = self.try_swap_adjacent(position_id) {
            self.sink.error(&e.to_string());
        }
    }

    /// Swap the items around the separator at `position_id`.
    ///
    /// Returns whether anything was swapped.
    pub fn try_swap_adjacent(&mut self, position_id: &str) -> MultiselectResult<bool> {
        if self.entries.is_empty() || position_id.is_empty() {
            return Ok(false);
        }

        let index = position_id
            .parse::<usize>()
            .map_err(|_| MultiselectError::MalformedSwapId(position_id.to_string()))?;

        if !self.entries.swap_around(index) {
            return Err(MultiselectError::MalformedSwapId(position_id.to_string()));
        }
        self.after_swap();
        Ok(true)
    }

    /// Click on a swap affordance, resolved by the separator it was rendered for.
    pub fn swap_at(&mut self, id: EntryId) {
        if !self.strip_enabled {
            return;
        }
        if let Err(e) = self.try_swap_at(id) {
            self.sink.error(&e.to_string());
        }
    }

    pub fn try_swap_at(&mut self, id: EntryId) -> MultiselectResult<()> {
        let index = self
            .entries
            .position_of(id)
            .ok_or(MultiselectError::UnknownEntry(id))?;
        if !self.entries.swap_around(index) {
            return Err(MultiselectError::NotASeparator(id));
        }
        self.after_swap();
        Ok(())
    }

    fn after_swap(&mut self) {
        self.refresh_labels(true);
        self.update_trigger(true);
    }

    /// Rebuild the strip and publish the value if it changed.
    fn refresh_labels(&mut self, from_client: bool) {
        if !self.entries.is_empty() && !self.select.has_label_generator() {
            self.sink.warn("No item label generator set; items render as placeholders");
        }

        let select = &self.select;
        let strip = build_strip(&self.entries, self.numbering, self.strip_enabled, |item| {
            select.item_label(item)
        });
        self.strip = strip;
        self.update_value(from_client);
    }

    fn update_value(&mut self, from_client: bool) {
        let value = self.entries.values();
        if value == self.observed {
            return;
        }

        let old_value = std::mem::replace(&mut self.observed, value.clone());
        let event = ValueChangeEvent {
            old_value,
            value,
            from_client,
        };
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
    }

    // === State flags ===

    /// Enable or disable the picker, the trigger, and the strip together.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.select.set_enabled(enabled);
        self.update_trigger(enabled);
        self.strip_enabled = enabled;
        restyle_affordances(&mut self.strip, enabled);
    }

    pub fn is_enabled(&self) -> bool {
        self.select.is_enabled()
    }

    pub fn set_required_indicator_visible(&mut self, visible: bool) {
        self.select.set_required_indicator_visible(visible);
    }

    pub fn is_required_indicator_visible(&self) -> bool {
        self.select.is_required_indicator_visible()
    }

    pub fn set_invalid(&mut self, invalid: bool) {
        self.select.set_invalid(invalid);
    }

    pub fn is_invalid(&self) -> bool {
        self.select.is_invalid()
    }

    pub fn set_error_message(&mut self, message: impl Into<String>) {
        self.select.set_error_message(message);
    }

    pub fn error_message(&self) -> &str {
        self.select.error_message()
    }

    /// Whether the error message should be displayed
    pub fn shows_error(&self) -> bool {
        self.select.is_invalid() && !self.select.error_message().is_empty()
    }
}
