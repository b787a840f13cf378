//! Picker trait definition
//!
//! A generic trait for list-based selection components whose selection may
//! be empty.

/// A generic picker trait for list selection
///
/// Unlike a menu, a picker can have nothing selected. Moving the selection
/// from "nothing" starts at the first (or last) item.
///
/// # Example
///
/// ```ignore
/// struct MyPicker {
///     items: Vec<String>,
///     selected: Option<usize>,
/// }
///
/// impl Picker for MyPicker {
///     type Item = String;
///
///     fn items(&self) -> &[Self::Item] {
///         &self.items
///     }
///
///     fn selected_index(&self) -> Option<usize> {
///         self.selected
///     }
///
///     fn set_selected_index(&mut self, index: Option<usize>) {
///         self.selected = index;
///     }
/// }
/// ```
pub trait Picker {
    /// The type of items in the picker
    type Item;

    /// Get the list of items
    fn items(&self) -> &[Self::Item];

    /// Get the current selected index, if any
    fn selected_index(&self) -> Option<usize>;

    /// Set the selected index without range checks
    fn set_selected_index(&mut self, index: Option<usize>);

    /// Get the number of items
    fn len(&self) -> usize {
        self.items().len()
    }

    /// Check if the picker is empty
    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Select the next item (wraps around)
    fn select_next(&mut self) {
        if !self.is_empty() {
            let next = match self.selected_index() {
                Some(i) => (i + 1) % self.len(),
                None => 0,
            };
            self.set_selected_index(Some(next));
        }
    }

    /// Select the previous item (wraps around)
    fn select_prev(&mut self) {
        if !self.is_empty() {
            let prev = self
                .selected_index()
                .and_then(|i| i.checked_sub(1))
                .unwrap_or(self.len() - 1);
            self.set_selected_index(Some(prev));
        }
    }

    /// Get the currently selected item
    fn selected_item(&self) -> Option<&Self::Item> {
        self.selected_index().and_then(|i| self.items().get(i))
    }

    /// Select a specific index (clamped to valid range), or clear with `None`
    fn select_index(&mut self, index: Option<usize>) {
        match index {
            Some(i) if !self.is_empty() => {
                let clamped = i.min(self.len() - 1);
                self.set_selected_index(Some(clamped));
            }
            _ => self.set_selected_index(None),
        }
    }
}
