//! Diagnostics for malformed spec strings.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// What went wrong while reading a spec string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecErrorKind {
    #[error("expected a long name at the start of the spec")]
    MissingLongName,

    #[error("unexpected character '{ch}' in a name")]
    InvalidNameChar { ch: char },

    #[error("expected a description enclosed in `[` and `]`")]
    MissingDescription,

    #[error("the description is missing its closing `]`")]
    UnterminatedDescription,

    #[error("the description must not be empty")]
    EmptyDescription,

    #[error("expected `, ` after the description")]
    ExpectedSeparator,

    #[error("'{value}' is not a valid metavar")]
    InvalidMetavar { value: String },

    #[error("expected `true` or `false` for the indefinite field, found '{value}'")]
    InvalidIndefinite { value: String },

    #[error("empty field after `, `")]
    EmptyField,

    #[error("unexpected input after the flag description")]
    TrailingInput,
}

impl SpecErrorKind {
    fn help(&self) -> Option<&'static str> {
        match self {
            SpecErrorKind::MissingLongName | SpecErrorKind::InvalidNameChar { .. } => {
                Some("names may only contain letters, digits, `-` and `_`")
            }
            SpecErrorKind::UnterminatedDescription => Some("escape literal brackets inside a description as `\\[` and `\\]`"),
            SpecErrorKind::InvalidMetavar { .. } => Some("a metavar may only contain letters, digits, `-` and `_`"),
            SpecErrorKind::ExpectedSeparator | SpecErrorKind::TrailingInput => {
                Some("argument specs continue as `[description], METAVAR, <true|false>, default`; flag specs end at `]`")
            }
            _ => None,
        }
    }
}

/// A spec string could not be parsed.
///
/// Carries the full spec as source code so the diagnostic renderer can point at the offending part.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("invalid spec: {kind}")]
#[diagnostic(code(cly::spec::invalid))]
pub struct SpecError {
    pub kind: SpecErrorKind,
    #[source_code]
    pub src: String,
    #[label("here")]
    pub span: SourceSpan,
    #[help]
    pub help: Option<String>,
}

impl SpecError {
    pub(crate) fn new(kind: SpecErrorKind, src: &str, offset: usize, len: usize) -> Self {
        let help = kind.help().map(str::to_string);
        Self {
            kind,
            src: src.to_string(),
            span: (offset, len).into(),
            help,
        }
    }

    /// Byte offset of the offending part within the spec.
    pub fn offset(&self) -> usize {
        self.span.offset()
    }
}
