//! Dropdown select box.

use std::fmt;
use std::rc::Rc;

use super::Picker;

/// Item to display-text function, shared between the select and its host.
pub type ItemLabelGenerator<T> = Rc<dyn Fn(&T) -> String>;

/// Text shown for an item when no label generator has been set.
pub const MISSING_LABEL: &str = "?";

/// A dropdown over a host-supplied catalog of items.
pub struct Select<T> {
    items: Vec<T>,
    selected: Option<usize>,
    open: bool,
    label: String,
    width: Option<u16>,
    enabled: bool,
    invalid: bool,
    required_indicator_visible: bool,
    error_message: String,
    label_generator: Option<ItemLabelGenerator<T>>,
}

impl<T> Default for Select<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            open: false,
            label: String::new(),
            width: None,
            enabled: true,
            invalid: false,
            required_indicator_visible: false,
            error_message: String::new(),
            label_generator: None,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Select<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Select")
            .field("items", &self.items)
            .field("selected", &self.selected)
            .field("open", &self.open)
            .field("label", &self.label)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

impl<T> Select<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the catalog. The selection is dropped.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.selected = None;
    }

    pub fn set_label_generator(&mut self, generator: ItemLabelGenerator<T>) {
        self.label_generator = Some(generator);
    }

    pub fn has_label_generator(&self) -> bool {
        self.label_generator.is_some()
    }

    /// Display text for `item`
    pub fn item_label(&self, item: &T) -> String {
        match &self.label_generator {
            Some(generate) => generate(item),
            None => MISSING_LABEL.to_string(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open or close the dropdown list. A disabled select stays closed.
    pub fn toggle_open(&mut self) {
        self.open = self.enabled && !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn width(&self) -> Option<u16> {
        self.width
    }

    pub fn set_width(&mut self, width: Option<u16>) {
        self.width = width;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.open = false;
        }
    }

    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    pub fn set_invalid(&mut self, invalid: bool) {
        self.invalid = invalid;
    }

    pub fn is_required_indicator_visible(&self) -> bool {
        self.required_indicator_visible
    }

    pub fn set_required_indicator_visible(&mut self, visible: bool) {
        self.required_indicator_visible = visible;
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn set_error_message(&mut self, message: impl Into<String>) {
        self.error_message = message.into();
    }
}

impl<T> Picker for Select<T> {
    type Item = T;

    fn items(&self) -> &[T] {
        &self.items
    }

    fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    fn set_selected_index(&mut self, index: Option<usize>) {
        self.selected = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select() -> Select<&'static str> {
        let mut select = Select::new();
        select.set_items(vec!["red", "green", "blue"]);
        select
    }

    #[test]
    fn test_starts_without_selection() {
        let select = select();
        assert_eq!(select.selected_index(), None);
        assert!(select.selected_item().is_none());
    }

    #[test]
    fn test_select_next_from_nothing_starts_at_first() {
        let mut select = select();
        select.select_next();
        assert_eq!(select.selected_item(), Some(&"red"));
        select.select_next();
        select.select_next();
        select.select_next();
        assert_eq!(select.selected_item(), Some(&"red"));
    }

    #[test]
    fn test_select_prev_from_nothing_starts_at_last() {
        let mut select = select();
        select.select_prev();
        assert_eq!(select.selected_item(), Some(&"blue"));
    }

    #[test]
    fn test_select_index_clamps() {
        let mut select = select();
        select.select_index(Some(10));
        assert_eq!(select.selected_index(), Some(2));
        select.select_index(None);
        assert_eq!(select.selected_index(), None);
    }

    #[test]
    fn test_set_items_drops_selection() {
        let mut select = select();
        select.select_index(Some(1));
        select.set_items(vec!["cyan"]);
        assert_eq!(select.selected_index(), None);
    }

    #[test]
    fn test_disabled_select_does_not_open() {
        let mut select = select();
        select.toggle_open();
        assert!(select.is_open());
        select.set_enabled(false);
        assert!(!select.is_open());
        select.toggle_open();
        assert!(!select.is_open());
    }

    #[test]
    fn test_item_label_without_generator() {
        let mut select = select();
        assert_eq!(select.item_label(&"red"), MISSING_LABEL);
        select.set_label_generator(Rc::new(|s: &&str| s.to_uppercase()));
        assert_eq!(select.item_label(&"red"), "RED");
    }
}
