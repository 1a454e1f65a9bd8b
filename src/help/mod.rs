//! Help and usage generation
//!
//! Help pages are laid out in two columns: names (plus metavars) on the left, descriptions on the right. Both
//! columns hard-wrap at their width.
//!
//! ## Module Structure
//!
//! - `config` - `HelpConfig` and column-width resolution
//! - `writer` - `HelpWriter` and the two-column row layout

mod config;
mod writer;

pub use config::{ColumnWidths, DEFAULT_COLUMNS, GUTTER, HelpConfig};
pub use writer::{HelpWriter, two_columns};

use crate::parser::{Argument, Flag, Parser};

/// Description shown for the help flag itself.
pub const HELP_FLAG_DESCRIPTION: &str = "Show this help message and exit";

/// Something that can be listed in a help page.
pub trait HelpEntry {
    /// The name column: `--long, -s` plus any metavar.
    fn left_column(&self) -> String;
    /// The description column.
    fn description(&self) -> &str;
}

fn names(long_name: &str, short_name: Option<&str>) -> String {
    match short_name {
        Some(short) => format!("{long_name}, {short}"),
        None => long_name.to_string(),
    }
}

impl HelpEntry for Argument {
    fn left_column(&self) -> String {
        let mut left = names(&self.long_name, self.short_name.as_deref());
        if let Some(meta) = &self.metavar {
            if self.indefinite {
                left.push_str(&format!("  <{meta}1> <{meta}2> ... <{meta}n>"));
            } else {
                left.push_str(&format!(" <{meta}>"));
            }
        }
        left
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl HelpEntry for Flag {
    fn left_column(&self) -> String {
        names(&self.long_name, self.short_name.as_deref())
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// Render the help row for a single argument or flag.
///
/// ## Examples
/// ```rust
/// use cly::{Argument, help::{HelpConfig, gen_help}};
///
/// let arg = Argument::new("--name", "Some good description", "name").short("-n");
/// let config = HelpConfig::new().with_left_width(10).with_right_width(21);
/// assert_eq!(gen_help(&arg, &config), "--name, -n  Some good description\n");
/// ```
pub fn gen_help(entry: &dyn HelpEntry, config: &HelpConfig) -> String {
    two_columns(&entry.left_column(), entry.description(), config.resolve())
}

impl Parser {
    /// The usage line: the `usage` option, or one generated from the registry.
    ///
    /// Required arguments appear bare, optional ones and flags in brackets, all in registration order.
    pub fn usage(&self) -> String {
        let options = self.options();
        if !options.usage.is_empty() {
            return options.usage.clone();
        }

        let mut usage = format!("{} [{}]", options.prog, self.help_flag().short);
        for argument in self.arguments() {
            let meta = argument.metavar_or_default();
            let repeat = if argument.indefinite { "..." } else { "" };
            if argument.required() {
                usage.push_str(&format!(" {} <{meta}>{repeat}", argument.long_name));
            } else {
                usage.push_str(&format!(" [{} <{meta}>{repeat}]", argument.long_name));
            }
        }
        for flag in self.flags() {
            usage.push_str(&format!(" [{}]", flag.long_name));
        }
        usage
    }

    /// The help page: the `help` option, or one generated from the registry.
    #[tracing::instrument(skip_all, fields(prog = %self.prog()))]
    pub fn help(&self) -> String {
        let options = self.options();
        if !options.help.is_empty() {
            return options.help.clone();
        }

        let widths = options.help_layout.resolve();
        let mut writer = HelpWriter::new();
        writer.writeln(&format!("Usage: {}", self.usage()));

        if !options.description.is_empty() {
            writer.newline();
            writer.writeln(&options.description);
        }

        if !self.arguments().is_empty() {
            writer.newline();
            writer.writeln("Arguments:");
            writer.indent();
            for argument in self.arguments() {
                writer.row(&argument.left_column(), argument.description(), widths);
            }
            writer.dedent();
        }

        writer.newline();
        writer.writeln("Flags:");
        writer.indent();
        for flag in self.flags() {
            writer.row(&flag.left_column(), flag.description(), widths);
        }
        let help_flag = self.help_flag();
        writer.row(
            &names(&help_flag.long, Some(&help_flag.short)),
            HELP_FLAG_DESCRIPTION,
            widths,
        );
        writer.dedent();

        writer.finish()
    }
}
