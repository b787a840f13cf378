//! The rendered strip: remove buttons with swap affordances between them.
//!
//! The strip is derived data. It is rebuilt from the entry list after every
//! mutation and never edited in place, except for affordance restyling when
//! the widget is enabled or disabled.

use ratatui::style::Color;

use super::{Entry, EntryId, EntryList, NumberingPosition};
use crate::tui::theme::{TEXT_DISABLED, TEXT_SECONDARY};

/// Mouse cursor shown over a control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Pointer,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffordanceStyle {
    pub cursor: Cursor,
    pub color: Color,
}

impl AffordanceStyle {
    pub fn for_enabled(enabled: bool) -> Self {
        if enabled {
            Self {
                cursor: Cursor::Pointer,
                color: TEXT_SECONDARY,
            }
        } else {
            Self {
                cursor: Cursor::Default,
                color: TEXT_DISABLED,
            }
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.cursor == Cursor::Pointer
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StripControl {
    /// Clicking removes the item
    RemoveButton {
        entry: EntryId,
        /// 1-based position among the items
        position: usize,
        text: String,
    },
    /// Clicking swaps the items on either side
    SwapAffordance {
        entry: EntryId,
        /// Index of the separator in the entry list at render time
        position_id: String,
        style: AffordanceStyle,
    },
}

impl StripControl {
    pub fn entry(&self) -> EntryId {
        match self {
            StripControl::RemoveButton { entry, .. } | StripControl::SwapAffordance { entry, .. } => {
                *entry
            }
        }
    }

    /// Text of a remove button, `None` for affordances
    pub fn text(&self) -> Option<&str> {
        match self {
            StripControl::RemoveButton { text, .. } => Some(text),
            StripControl::SwapAffordance { .. } => None,
        }
    }
}

/// Rebuild the whole strip from `entries`.
pub fn build_strip<T>(
    entries: &EntryList<T>,
    numbering: NumberingPosition,
    enabled: bool,
    label: impl Fn(&T) -> String,
) -> Vec<StripControl> {
    let mut count = 0;
    entries
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            Entry::Separator { id } => StripControl::SwapAffordance {
                entry: *id,
                position_id: index.to_string(),
                style: AffordanceStyle::for_enabled(enabled),
            },
            Entry::Value { id, item } => {
                count += 1;
                StripControl::RemoveButton {
                    entry: *id,
                    position: count,
                    text: numbering.format(count, &label(item)),
                }
            }
        })
        .collect()
}

/// Restyle every swap affordance for the given enabled state.
pub fn restyle_affordances(strip: &mut [StripControl], enabled: bool) {
    for control in strip.iter_mut() {
        if let StripControl::SwapAffordance { style, .. } = control {
            *style = AffordanceStyle::for_enabled(enabled);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> EntryList<&'static str> {
        let mut list = EntryList::new();
        list.push("a");
        list.push("b");
        list.push("c");
        list
    }

    #[test]
    fn test_build_strip_numbers_items() {
        let strip = build_strip(&entries(), NumberingPosition::Left, true, |s| s.to_string());
        let texts: Vec<_> = strip.iter().filter_map(StripControl::text).collect();
        assert_eq!(texts, vec!["(1) a", "(2) b", "(3) c"]);
    }

    #[test]
    fn test_build_strip_tags_affordances_with_index() {
        let strip = build_strip(&entries(), NumberingPosition::Right, true, |s| s.to_string());
        let ids: Vec<_> = strip
            .iter()
            .filter_map(|c| match c {
                StripControl::SwapAffordance { position_id, .. } => Some(position_id.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_restyle_affordances() {
        let mut strip = build_strip(&entries(), NumberingPosition::Right, true, |s| s.to_string());
        restyle_affordances(&mut strip, false);
        for control in &strip {
            if let StripControl::SwapAffordance { style, .. } = control {
                assert_eq!(style.cursor, Cursor::Default);
                assert_eq!(style.color, TEXT_DISABLED);
            }
        }
        restyle_affordances(&mut strip, true);
        assert!(strip.iter().all(|c| match c {
            StripControl::SwapAffordance { style, .. } => style.is_interactive(),
            _ => true,
        }));
    }
}
