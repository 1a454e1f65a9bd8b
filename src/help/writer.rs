//! Output writer for help pages
//!
//! Tracks indentation and lays out two-column rows.

use cly_core::strings::{char_len, split_at_chars};

use super::config::{ColumnWidths, GUTTER};

/// Spaces per indentation level.
const INDENT_WIDTH: usize = 2;

/// Lay out a two-column row.
///
/// Both columns are cut into chunks of exactly their width (the last chunk may be shorter) and emitted side by side,
/// one line per chunk, until both columns are exhausted. A left chunk shorter than the column is padded with
/// spaces; the columns are always separated by a two-space gutter.
///
/// Widths count Unicode scalar values. Line breaks inside either column are laid out as spaces, and a zero width is
/// treated as one.
pub fn two_columns(left: &str, right: &str, widths: ColumnWidths) -> String {
    let widths = ColumnWidths::new(widths.left, widths.right);
    let (left, right) = (left.replace('\n', " "), right.replace('\n', " "));
    let mut out = String::new();
    let (mut left, mut right) = (left.as_str(), right.as_str());

    while !left.is_empty() || !right.is_empty() {
        let (head, tail) = split_at_chars(left, widths.left);
        out.push_str(head);
        out.push_str(&" ".repeat(widths.left - char_len(head)));
        left = tail;

        out.push_str(&" ".repeat(GUTTER));

        let (head, tail) = split_at_chars(right, widths.right);
        out.push_str(head);
        right = tail;

        out.push('\n');
    }
    out
}

/// Writer that tracks indentation and builds help output
pub struct HelpWriter {
    /// The output buffer
    output: String,
    /// Current indentation level
    indent_level: usize,
    /// Whether we're at the start of a line
    at_line_start: bool,
}

impl HelpWriter {
    pub fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            at_line_start: true,
        }
    }

    /// Get the written output
    pub fn finish(self) -> String {
        self.output
    }

    /// Increase indentation level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indentation level
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Width the current indentation takes up
    pub fn indent_width(&self) -> usize {
        self.indent_level * INDENT_WIDTH
    }

    fn write_indent(&mut self) {
        if self.at_line_start {
            self.output.push_str(&" ".repeat(self.indent_width()));
            self.at_line_start = false;
        }
    }

    /// Write a string (with auto-indent)
    pub fn write(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.write_indent();
        self.output.push_str(s);
    }

    /// Write a string and newline
    pub fn writeln(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    /// Write just a newline
    pub fn newline(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    /// Write a two-column row; every wrapped line is indented.
    ///
    /// The left column is narrowed by the current indentation so rows stay within the resolved widths.
    pub fn row(&mut self, left: &str, right: &str, widths: ColumnWidths) {
        let widths = ColumnWidths::new(widths.left.saturating_sub(self.indent_width()), widths.right);
        for line in two_columns(left, right, widths).lines() {
            self.writeln(line);
        }
    }
}

impl Default for HelpWriter {
    fn default() -> Self {
        Self::new()
    }
}
