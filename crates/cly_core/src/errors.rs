//! Errors raised while *defining* an interface (registering arguments and flags).
//!
//! These are programmer errors rather than user errors: they surface when the CLI author registers a name that
//! collides, is empty, or breaks the strict-mode style rules. Command-line input errors live in the parser.

use miette::Diagnostic;
use thiserror::Error;

use crate::names::NameKind;

/// Identify which strict-mode style rule a name broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRule {
    /// Long names must start with `--`, short names with `-`.
    MissingPrefix,
    /// After removing `-`, the name must be a non-empty alphanumeric string.
    NotAlphanumeric,
    /// Short names are a dash followed by exactly one character; `len` counts the characters after the dash.
    WrongLength { len: usize },
}

/// An error produced while registering an argument or flag.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum DefinitionError {
    #[error("{kind} names can't be empty strings")]
    #[diagnostic(code(cly::definition::empty_name))]
    EmptyName { kind: NameKind },

    #[error("{}", describe_long(.name, .reason))]
    #[diagnostic(
        code(cly::definition::invalid_long_name),
        help("in strict mode long names look like `--output` or `--dry-run`")
    )]
    InvalidLongName { name: String, reason: NameRule },

    #[error("{}", describe_short(.name, .reason))]
    #[diagnostic(
        code(cly::definition::invalid_short_name),
        help("in strict mode short names are a dash and one alphanumeric character, like `-o`")
    )]
    InvalidShortName { name: String, reason: NameRule },

    #[error("the {kind} name '{name}' is redundant; it has been registered already")]
    #[diagnostic(code(cly::definition::redundant))]
    Redundant { kind: NameKind, name: String },

    #[error("wrong value of help flag provided: '{value}'")]
    #[diagnostic(
        code(cly::definition::invalid_help_flag),
        help("the help flag must be of the form \"<short-name>, <long-name>\", e.g. \"-h, --help\"")
    )]
    InvalidHelpFlag { value: String },
}

fn describe_long(name: &str, reason: &NameRule) -> String {
    match reason {
        NameRule::MissingPrefix => format!("expected long name '{name}' to start with `--`"),
        NameRule::NotAlphanumeric => {
            format!("long name '{name}' must be an alphanumeric string with the exception of `-`")
        }
        NameRule::WrongLength { len } => format!("long name '{name}' has an unexpected length of {len}"),
    }
}

fn describe_short(name: &str, reason: &NameRule) -> String {
    match reason {
        NameRule::MissingPrefix => format!("expected short name '{name}' to start with `-`"),
        NameRule::NotAlphanumeric => format!("short name '{name}' must be an alphanumeric character"),
        NameRule::WrongLength { len } => {
            format!("expected short name '{name}' of length 1 but instead got length {len}")
        }
    }
}
