//! Define the spelling rules for argument/flag names and classify raw command-line tokens.
//!
//! ## Notes
//! - **Strict mode** enforces the familiar POSIX/GNU style: `--long-name` and `-s`. Outside strict mode any non-empty
//!   spelling is accepted (e.g. `/v` or `build`).
//! - Token classification (`is_cluster_candidate`, `split_assignment`) mirrors the word-character rules used by the
//!   parser: a "word" character is alphanumeric or `_`.

use std::fmt;

use crate::errors::{DefinitionError, NameRule};

/// The two spellings an argument or flag can be registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameKind {
    Long,
    Short,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameKind::Long => write!(f, "long"),
            NameKind::Short => write!(f, "short"),
        }
    }
}

/// Check whether `c` is a "word" character (alphanumeric or `_`).
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Validate a long name.
///
/// ## Parameters
/// - `name`: the spelling to register (e.g. `--output`).
/// - `strict`: whether strict-mode style rules apply.
///
/// ## Errors
/// - `EmptyName` for `""`, in any mode.
/// - `InvalidLongName` when strict and the name does not start with `--` or is not alphanumeric apart from `-`.
pub fn validate_long_name(name: &str, strict: bool) -> Result<(), DefinitionError> {
    if name.is_empty() {
        return Err(DefinitionError::EmptyName { kind: NameKind::Long });
    }
    if !strict {
        return Ok(());
    }

    let invalid = |reason| DefinitionError::InvalidLongName {
        name: name.to_string(),
        reason,
    };
    if !name.starts_with("--") {
        return Err(invalid(NameRule::MissingPrefix));
    }
    if !is_alphanumeric_without_dashes(name) {
        return Err(invalid(NameRule::NotAlphanumeric));
    }
    Ok(())
}

/// Validate a short name.
///
/// ## Parameters
/// - `name`: the spelling to register (e.g. `-o`).
/// - `strict`: whether strict-mode style rules apply.
///
/// ## Errors
/// - `EmptyName` for `""`, in any mode.
/// - `InvalidShortName` when strict and the name is not a single `-` followed by one alphanumeric character.
pub fn validate_short_name(name: &str, strict: bool) -> Result<(), DefinitionError> {
    if name.is_empty() {
        return Err(DefinitionError::EmptyName { kind: NameKind::Short });
    }
    if !strict {
        return Ok(());
    }

    let invalid = |reason| DefinitionError::InvalidShortName {
        name: name.to_string(),
        reason,
    };
    if !name.starts_with('-') {
        return Err(invalid(NameRule::MissingPrefix));
    }
    let len = name.chars().count();
    if len != 2 {
        return Err(invalid(NameRule::WrongLength { len: len - 1 }));
    }
    if !is_alphanumeric_without_dashes(name) {
        return Err(invalid(NameRule::NotAlphanumeric));
    }
    Ok(())
}

fn is_alphanumeric_without_dashes(name: &str) -> bool {
    let mut rest = name.chars().filter(|c| *c != '-').peekable();
    rest.peek().is_some() && rest.all(|c| c.is_ascii_alphanumeric())
}

/// The pair of names that asks a parser to print its help page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpFlag {
    pub short: String,
    pub long: String,
}

impl HelpFlag {
    /// Parse a help-flag spelling of the form `"<short-name>, <long-name>"`.
    ///
    /// ## Errors
    /// - `InvalidHelpFlag` unless splitting on `", "` yields exactly two non-empty names.
    ///
    /// ## Examples
    /// ```rust
    /// use cly_core::HelpFlag;
    ///
    /// let flag = HelpFlag::parse("-h, --help").unwrap();
    /// assert_eq!(flag.short, "-h");
    /// assert_eq!(flag.long, "--help");
    /// assert!(HelpFlag::parse("--help").is_err());
    /// ```
    pub fn parse(value: &str) -> Result<Self, DefinitionError> {
        let parts: Vec<&str> = value.split(", ").collect();
        match parts.as_slice() {
            [short, long] if !short.is_empty() && !long.is_empty() => Ok(Self {
                short: short.to_string(),
                long: long.to_string(),
            }),
            _ => Err(DefinitionError::InvalidHelpFlag {
                value: value.to_string(),
            }),
        }
    }

    /// Check whether a token is either of the help names.
    pub fn matches(&self, token: &str) -> bool {
        token == self.short || token == self.long
    }
}

impl Default for HelpFlag {
    fn default() -> Self {
        Self {
            short: "-h".to_string(),
            long: "--help".to_string(),
        }
    }
}

impl fmt::Display for HelpFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.short, self.long)
    }
}

/// Check whether a token looks like a cluster of short flags (`-abc`).
///
/// A cluster is a single dash followed by a word character. `--long` and a bare `-` are not clusters.
pub fn is_cluster_candidate(token: &str) -> bool {
    let mut chars = token.chars();
    chars.next() == Some('-') && chars.next().is_some_and(is_word_char)
}

/// Split a `name=value` token at its first `=`.
///
/// ## Returns
/// - `Some((name, value))` when the part before `=` is a non-empty run of word characters and `-`, and the value is
///   non-empty. `None` otherwise.
///
/// ## Examples
/// ```rust
/// use cly_core::split_assignment;
///
/// assert_eq!(split_assignment("--file=/tmp/a=b"), Some(("--file", "/tmp/a=b")));
/// assert_eq!(split_assignment("--file="), None);
/// assert_eq!(split_assignment("no-equals"), None);
/// ```
pub fn split_assignment(token: &str) -> Option<(&str, &str)> {
    let (name, value) = token.split_once('=')?;
    let name_ok = !name.is_empty() && name.chars().all(|c| is_word_char(c) || c == '-');
    (name_ok && !value.is_empty()).then_some((name, value))
}
