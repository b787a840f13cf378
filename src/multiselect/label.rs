//! Position numbers on remove buttons.

use serde::{Deserialize, Serialize};

/// Where the 1-based position number sits relative to the item text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberingPosition {
    /// `"(n) label"`
    Left,
    /// `"label (n)"`
    #[default]
    Right,
}

impl NumberingPosition {
    pub fn from_numbers_left_of_text(left: bool) -> Self {
        if left {
            NumberingPosition::Left
        } else {
            NumberingPosition::Right
        }
    }

    pub fn is_left(self) -> bool {
        self == NumberingPosition::Left
    }

    pub fn toggled(self) -> Self {
        match self {
            NumberingPosition::Left => NumberingPosition::Right,
            NumberingPosition::Right => NumberingPosition::Left,
        }
    }

    pub fn format(self, position: usize, label: &str) -> String {
        match self {
            NumberingPosition::Left => format!("({}) {}", position, label),
            NumberingPosition::Right => format!("{} ({})", label, position),
        }
    }

    /// Read the position number back out of a formatted button text.
    ///
    /// Returns `None` if `text` is not in this numbering format or the
    /// number is zero.
    pub fn parse(self, text: &str) -> Option<usize> {
        let number = match self {
            NumberingPosition::Left => text.strip_prefix('(')?.split_once(") ")?.0,
            NumberingPosition::Right => text.strip_suffix(')')?.rsplit_once(" (")?.1,
        };
        number.parse::<usize>().ok().filter(|n| *n > 0)
    }
}
