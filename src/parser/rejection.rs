//! User-facing parse failures.

use std::fmt;

use thiserror::Error;

/// Exit status used by [`crate::Parser::parse_or_exit`] for rejected command lines.
pub const REJECTION_EXIT_CODE: i32 = 2;

/// Why a command line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("{name} is an argument and it requires some value to work")]
    MissingValue { name: String },

    #[error("{name} is not a recognised flag or argument")]
    Unrecognised { name: String },

    #[error("Arguments are allowed only at the last place in shorthand cluster mode")]
    ArgumentInsideCluster { cluster: String },

    #[error("{name} is a flag and does not take a value")]
    FlagWithValue { name: String },

    #[error("the following arguments are required: {}", .names.join(", "))]
    MissingRequired { names: Vec<String> },
}

/// A rejected command line, ready to show to the user.
///
/// Renders as:
///
/// ```text
/// prog: <reason>
/// <details, when present>
///
/// Use prog --help for detailed help message
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub prog: String,
    pub reason: RejectReason,
    /// Extra context such as the correct usage of an argument. Starts with a newline.
    pub details: Option<String>,
    /// Long spelling of the help flag, for the closing hint.
    pub help_long: String,
}

impl Rejection {
    pub fn exit_code(&self) -> i32 {
        REJECTION_EXIT_CODE
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", self.prog, self.reason)?;
        if let Some(details) = &self.details {
            writeln!(f, "{details}")?;
        }
        write!(f, "\nUse {} {} for detailed help message", self.prog, self.help_long)
    }
}

impl std::error::Error for Rejection {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.reason)
    }
}
