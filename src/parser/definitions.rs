//! Argument and flag definitions.
//!
//! An [`Argument`] takes one value (or, when `indefinite`, a run of values); a [`Flag`] takes none and is simply
//! present or absent.

use cly_syntax::{ArgumentSpec, FlagSpec};
use serde::{Deserialize, Serialize};

/// Metavar shown in usage hints when an argument does not declare one.
pub const DEFAULT_METAVAR: &str = "value";

/// A named argument that takes a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    /// The long spelling, e.g. `--project`.
    pub long_name: String,
    /// Text shown in help output.
    pub description: String,
    /// Key the parsed value is stored under in [`crate::Matches`].
    pub dest: String,
    /// The short spelling, e.g. `-p`.
    #[serde(default)]
    pub short_name: Option<String>,
    /// Name used for the value in help and usage text.
    #[serde(default)]
    pub metavar: Option<String>,
    /// Accept every following token up to the next registered name.
    #[serde(default)]
    pub indefinite: bool,
    /// Value used when the argument is not supplied. An argument without a default is required.
    #[serde(default)]
    pub default: Option<String>,
}

impl Argument {
    pub fn new(long_name: impl Into<String>, description: impl Into<String>, dest: impl Into<String>) -> Self {
        Self {
            long_name: long_name.into(),
            description: description.into(),
            dest: dest.into(),
            short_name: None,
            metavar: None,
            indefinite: false,
            default: None,
        }
    }

    /// Build an argument from a parsed spec string.
    pub fn from_spec(spec: ArgumentSpec, dest: impl Into<String>) -> Self {
        Self {
            long_name: spec.long_name,
            description: spec.description,
            dest: dest.into(),
            short_name: spec.short_name,
            metavar: spec.metavar,
            indefinite: spec.indefinite,
            default: spec.default,
        }
    }

    pub fn short(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = Some(short_name.into());
        self
    }

    pub fn metavar(mut self, metavar: impl Into<String>) -> Self {
        self.metavar = Some(metavar.into());
        self
    }

    pub fn indefinite(mut self, indefinite: bool) -> Self {
        self.indefinite = indefinite;
        self
    }

    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Whether the argument must appear on the command line.
    pub fn required(&self) -> bool {
        self.default.is_none()
    }

    /// The metavar, falling back to [`DEFAULT_METAVAR`].
    pub fn metavar_or_default(&self) -> &str {
        self.metavar.as_deref().unwrap_or(DEFAULT_METAVAR)
    }
}

/// A boolean switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flag {
    /// The long spelling, e.g. `--all`.
    pub long_name: String,
    /// Text shown in help output.
    pub description: String,
    /// Key the flag state is stored under in [`crate::Matches`].
    pub dest: String,
    /// The short spelling, e.g. `-A`.
    #[serde(default)]
    pub short_name: Option<String>,
}

impl Flag {
    pub fn new(long_name: impl Into<String>, description: impl Into<String>, dest: impl Into<String>) -> Self {
        Self {
            long_name: long_name.into(),
            description: description.into(),
            dest: dest.into(),
            short_name: None,
        }
    }

    /// Build a flag from a parsed spec string.
    pub fn from_spec(spec: FlagSpec, dest: impl Into<String>) -> Self {
        Self {
            long_name: spec.long_name,
            description: spec.description,
            dest: dest.into(),
            short_name: spec.short_name,
        }
    }

    pub fn short(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = Some(short_name.into());
        self
    }
}
