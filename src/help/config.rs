//! Help layout configuration
//!
//! Column widths are taken from the config when set, otherwise derived from the terminal width.

use serde::Deserialize;

/// Terminal width assumed when it cannot be queried (e.g. output is piped).
pub const DEFAULT_COLUMNS: usize = 80;

/// Share of the terminal given to the name column.
const LEFT_SHARE: f64 = 0.3;

/// Spaces between the two columns.
pub const GUTTER: usize = 2;

/// Help layout configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HelpConfig {
    /// Width of the name column; derived from the terminal when `None`.
    pub left_width: Option<usize>,
    /// Width of the description column; fills the rest of the terminal when `None`.
    pub right_width: Option<usize>,
    /// Terminal width override; queried from the terminal when `None`.
    pub terminal_width: Option<usize>,
}

/// Resolved column widths, both at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub left: usize,
    pub right: usize,
}

impl ColumnWidths {
    pub fn new(left: usize, right: usize) -> Self {
        Self {
            left: left.max(1),
            right: right.max(1),
        }
    }
}

impl HelpConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name column width
    pub fn with_left_width(mut self, width: usize) -> Self {
        self.left_width = Some(width);
        self
    }

    /// Set the description column width
    pub fn with_right_width(mut self, width: usize) -> Self {
        self.right_width = Some(width);
        self
    }

    /// Set the terminal width used to derive unset column widths
    pub fn with_terminal_width(mut self, width: usize) -> Self {
        self.terminal_width = Some(width);
        self
    }

    /// The terminal width: the override, the live terminal, or [`DEFAULT_COLUMNS`].
    pub fn columns(&self) -> usize {
        self.terminal_width
            .or_else(terminal_columns)
            .unwrap_or(DEFAULT_COLUMNS)
    }

    /// Resolve both column widths.
    ///
    /// The left column defaults to 30% of the terminal (rounded half to even); the right column defaults to what
    /// is left after the left column and the two-space gutter. The terminal is only consulted when a width is unset.
    pub fn resolve(&self) -> ColumnWidths {
        let left = match self.left_width {
            Some(left) => left,
            None => (self.columns() as f64 * LEFT_SHARE).round_ties_even() as usize,
        };
        let right = match self.right_width {
            Some(right) => right,
            None => self.columns().saturating_sub(left + GUTTER),
        };
        ColumnWidths::new(left, right)
    }
}

fn terminal_columns() -> Option<usize> {
    crossterm::terminal::size()
        .ok()
        .map(|(columns, _rows)| usize::from(columns))
        .filter(|columns| *columns > 0)
}
