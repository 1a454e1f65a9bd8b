#![forbid(unsafe_code)]
//! cly: declarative command-line argument parsing
//!
//! Register arguments and flags on a [`Parser`], either with builders or with compact spec strings such as
//! `"--file -f [Input file], PATH, false, in.txt"`, then parse a command line into [`Matches`].
//!
//! ## Crates
//!
//! - `cly_core` - name rules and definition errors
//! - `cly_syntax` - the compact spec-string grammar
//! - `cly` (this crate) - the parser, help rendering and the `cly` tool
//!
//! ## Panic Policy
//!
//! - **Library code**: errors are returned as `Result`; [`Parser::parse_or_exit`] is the one function that exits the
//!   process, and only when asked to.
//! - **CLI**: the `cli` module enforces `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod help;
pub mod parser;
pub mod version;

pub use cly_core::{DefinitionError, HelpFlag, NameKind, NameRule};
pub use cly_syntax::SpecError;

pub use help::{HelpConfig, HelpEntry, gen_help};
pub use parser::{
    Argument, Flag, Matches, Outcome, Parser, ParserOptions, RegisterError, RejectReason, Rejection, Value,
};
