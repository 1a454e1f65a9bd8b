//! Parser configuration.

use std::path::Path;

use serde::Deserialize;

use crate::help::HelpConfig;

/// Program name used when `argv[0]` is unavailable.
pub const FALLBACK_PROG: &str = "cly";

/// The default help flag spelling.
pub const DEFAULT_HELP_FLAG: &str = "-h, --help";

/// Parser-wide settings.
///
/// Every field has a default, so a definition file only needs to mention what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Program name used in usage strings, help and rejection messages.
    pub prog: String,
    /// Description shown in the generated help page.
    pub description: String,
    /// Usage override; generated from the registry when empty.
    pub usage: String,
    /// Full help override; generated from the registry when empty.
    pub help: String,
    /// `"<short-name>, <long-name>"` that prints the help page.
    pub help_flag: String,
    /// Skip unrecognised tokens instead of rejecting them. Skipped tokens end up in `Matches::unknown`.
    pub allow_unknown_args: bool,
    /// Enforce `--long` / `-s` name style and enable short-flag clustering (`-abc`).
    pub strict_mode: bool,
    /// Column layout for generated help.
    pub help_layout: HelpConfig,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            prog: default_prog(),
            description: String::new(),
            usage: String::new(),
            help: String::new(),
            help_flag: DEFAULT_HELP_FLAG.to_string(),
            allow_unknown_args: false,
            strict_mode: true,
            help_layout: HelpConfig::default(),
        }
    }
}

impl ParserOptions {
    /// Create options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prog(mut self, prog: impl Into<String>) -> Self {
        self.prog = prog.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    pub fn with_help_flag(mut self, help_flag: impl Into<String>) -> Self {
        self.help_flag = help_flag.into();
        self
    }

    pub fn with_allow_unknown_args(mut self, allow: bool) -> Self {
        self.allow_unknown_args = allow;
        self
    }

    pub fn with_strict_mode(mut self, strict: bool) -> Self {
        self.strict_mode = strict;
        self
    }

    pub fn with_help_layout(mut self, layout: HelpConfig) -> Self {
        self.help_layout = layout;
        self
    }
}

/// The file name of `argv[0]`, or [`FALLBACK_PROG`].
fn default_prog() -> String {
    std::env::args_os()
        .next()
        .and_then(|arg0| Path::new(&arg0).file_name().map(|name| name.to_string_lossy().into_owned()))
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| FALLBACK_PROG.to_string())
}
