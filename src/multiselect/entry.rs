//! Ordered entry list: picked items with a swap separator between each pair.

use std::fmt;

/// Stable identity of one entry, assigned when the entry is inserted.
///
/// Ids are never reused within one list, so a control rendered for an entry
/// keeps pointing at that entry (or at nothing) however the list changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Entry<T> {
    /// A picked item
    Value { id: EntryId, item: T },
    /// "Swap with next" marker between two items
    Separator { id: EntryId },
}

impl<T> Entry<T> {
    pub fn id(&self) -> EntryId {
        match self {
            Entry::Value { id, .. } | Entry::Separator { id } => *id,
        }
    }

    pub fn item(&self) -> Option<&T> {
        match self {
            Entry::Value { item, .. } => Some(item),
            Entry::Separator { .. } => None,
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, Entry::Separator { .. })
    }
}

/// Items interleaved with separators: `Item, Sep, Item, ..., Item` or empty.
///
/// Items sit at even indices and separators at odd ones. Every mutation
/// keeps that shape, so N items always come with N-1 separators.
#[derive(Debug, Clone)]
pub struct EntryList<T> {
    entries: Vec<Entry<T>>,
    next_id: u64,
}

impl<T> Default for EntryList<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> EntryList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    /// Number of entries, separators included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.entries.len().div_ceil(2)
    }

    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().filter_map(Entry::item)
    }

    fn fresh_id(&mut self) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append `item`, preceded by a separator unless the list is empty.
    pub fn push(&mut self, item: T) -> EntryId {
        if !self.entries.is_empty() {
            let id = self.fresh_id();
            self.entries.push(Entry::Separator { id });
        }
        let id = self.fresh_id();
        self.entries.push(Entry::Value { id, item });
        id
    }

    /// Remove the item at `index` together with one adjacent separator.
    ///
    /// The separator that followed the item goes, unless the item was the
    /// last one, in which case the separator before it goes. Returns `None`
    /// when `index` does not hold an item.
    pub fn remove_item_at(&mut self, index: usize) -> Option<T> {
        if index >= self.entries.len() || self.entries[index].is_separator() {
            return None;
        }

        let item = match self.entries.remove(index) {
            Entry::Value { item, .. } => item,
            Entry::Separator { .. } => unreachable!("checked above"),
        };

        if self.entries.is_empty() {
            return Some(item);
        }

        if index < self.entries.len() {
            self.entries.remove(index);
        } else {
            self.entries.remove(index - 1);
        }

        Some(item)
    }

    /// Swap the two items on either side of the separator at `index`.
    ///
    /// Returns false when `index` is not a separator with a neighbour on
    /// each side.
    pub fn swap_around(&mut self, index: usize) -> bool {
        let is_inner_separator = index > 0
            && index + 1 < self.entries.len()
            && self.entries[index].is_separator();
        if !is_inner_separator {
            return false;
        }

        self.entries.swap(index - 1, index + 1);
        true
    }

    pub fn position_of(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id() == id)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Check the alternation invariant
    pub fn check_invariant(&self) -> bool {
        if self.entries.len() % 2 == 0 && !self.entries.is_empty() {
            return false;
        }
        self.entries
            .iter()
            .enumerate()
            .all(|(i, entry)| entry.is_separator() == (i % 2 == 1))
    }
}

impl<T: Clone> EntryList<T> {
    /// The items in order, separators excluded
    pub fn values(&self) -> Vec<T> {
        self.items().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&'static str]) -> EntryList<&'static str> {
        let mut list = EntryList::new();
        for item in items {
            list.push(*item);
        }
        list
    }

    #[test]
    fn test_push_interleaves_separators() {
        let list = list(&["a", "b", "c"]);
        assert_eq!(list.len(), 5);
        assert_eq!(list.item_count(), 3);
        assert!(list.entries()[1].is_separator());
        assert!(list.entries()[3].is_separator());
        assert!(list.check_invariant());
    }

    #[test]
    fn test_ids_are_unique_and_not_reused() {
        let mut list = list(&["a", "b"]);
        let before: Vec<EntryId> = list.entries().iter().map(Entry::id).collect();
        list.remove_item_at(2);
        let id = list.push("c");
        assert!(!before.contains(&id));
    }

    #[test]
    fn test_remove_first_item_takes_following_separator() {
        let mut list = list(&["a", "b", "c"]);
        assert_eq!(list.remove_item_at(0), Some("a"));
        assert_eq!(list.values(), vec!["b", "c"]);
        assert!(list.check_invariant());
    }

    #[test]
    fn test_remove_middle_item() {
        let mut list = list(&["a", "b", "c"]);
        assert_eq!(list.remove_item_at(2), Some("b"));
        assert_eq!(list.values(), vec!["a", "c"]);
        assert!(list.check_invariant());
    }

    #[test]
    fn test_remove_last_item_takes_preceding_separator() {
        let mut list = list(&["a", "b", "c"]);
        assert_eq!(list.remove_item_at(4), Some("c"));
        assert_eq!(list.values(), vec!["a", "b"]);
        assert!(list.check_invariant());
    }

    #[test]
    fn test_remove_only_item() {
        let mut list = list(&["a"]);
        assert_eq!(list.remove_item_at(0), Some("a"));
        assert!(list.is_empty());
        assert!(list.check_invariant());
    }

    #[test]
    fn test_remove_rejects_separator_and_out_of_range() {
        let mut list = list(&["a", "b"]);
        assert_eq!(list.remove_item_at(1), None);
        assert_eq!(list.remove_item_at(7), None);
        assert_eq!(list.values(), vec!["a", "b"]);
    }

    #[test]
    fn test_swap_around_separator() {
        let mut list = list(&["a", "b", "c"]);
        assert!(list.swap_around(1));
        assert_eq!(list.values(), vec!["b", "a", "c"]);
        assert!(list.swap_around(3));
        assert_eq!(list.values(), vec!["b", "c", "a"]);
        assert!(list.check_invariant());
    }

    #[test]
    fn test_swap_around_rejects_items_and_edges() {
        let mut list = list(&["a", "b"]);
        assert!(!list.swap_around(0));
        assert!(!list.swap_around(2));
        assert!(!list.swap_around(5));
        assert_eq!(list.values(), vec!["a", "b"]);
    }

    #[test]
    fn test_invariant_holds_under_mixed_operations() {
        let mut list = EntryList::new();
        for step in 0..40usize {
            match step % 5 {
                0 | 1 | 2 => {
                    list.push(step);
                }
                3 => {
                    let n = list.item_count();
                    if n > 0 {
                        list.remove_item_at(2 * (step % n));
                    }
                }
                _ => {
                    if list.len() >= 3 {
                        list.swap_around(1);
                    }
                }
            }
            assert!(list.check_invariant(), "broken after step {}", step);
        }
        list.clear();
        assert!(list.check_invariant());
    }

    #[test]
    fn test_position_of() {
        let mut list = list(&["a"]);
        let id = list.push("b");
        assert_eq!(list.position_of(id), Some(2));
        list.remove_item_at(2);
        assert_eq!(list.position_of(id), None);
    }
}
