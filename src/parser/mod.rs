//! The argument parser: registration and command-line parsing.
//!
//! ## Module Structure
//!
//! - `options` - `ParserOptions` (program name, help flag, strict mode, ...)
//! - `definitions` - `Argument` and `Flag`
//! - `registry` - the shared long/short name namespace
//! - `scan` - the argv scan
//! - `matches` - `Matches`, `Value` and `Outcome`
//! - `rejection` - user-facing parse failures
//!
//! ## Examples
//! ```rust
//! use cly::{Argument, Flag, Outcome, Parser, ParserOptions};
//!
//! let mut parser = Parser::with_options(ParserOptions::new().with_prog("tsc")).unwrap();
//! parser.add_argument(Argument::new("--project", "Project file", "project").short("-p")).unwrap();
//! parser.add_flag(Flag::new("--watch", "Watch input files", "watch").short("-w")).unwrap();
//!
//! let Outcome::Parsed(matches) = parser.parse(["-w", "--project", "tsconfig.json"]).unwrap() else {
//!     panic!("expected a parse");
//! };
//! assert!(matches.get_flag("watch"));
//! assert_eq!(matches.get_one("project"), Some("tsconfig.json"));
//! ```

mod definitions;
mod matches;
mod options;
mod registry;
mod rejection;
mod scan;
#[cfg(test)]
mod tests;

use std::process;

use cly_core::{DefinitionError, HelpFlag, validate_long_name, validate_short_name};
use cly_syntax::SpecError;
use miette::Diagnostic;
use thiserror::Error;

pub use definitions::{Argument, DEFAULT_METAVAR, Flag};
pub use matches::{Matches, Outcome, Value};
pub use options::{DEFAULT_HELP_FLAG, FALLBACK_PROG, ParserOptions};
pub use rejection::{REJECTION_EXIT_CODE, RejectReason, Rejection};

use registry::Registry;
use scan::Scan;

/// Failure to register an argument or flag from a spec string.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum RegisterError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Spec(#[from] SpecError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Definition(#[from] DefinitionError),
}

/// Parses command lines against a registry of arguments and flags.
#[derive(Debug, Clone)]
pub struct Parser {
    options: ParserOptions,
    help_flag: HelpFlag,
    registry: Registry,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        let options = ParserOptions::default();
        let help_flag = HelpFlag::default();
        let registry = Registry::with_help(&help_flag);
        Self {
            options,
            help_flag,
            registry,
        }
    }

    /// Create a parser with custom options.
    ///
    /// ## Errors
    /// - `InvalidHelpFlag` if `options.help_flag` is not of the form `"<short-name>, <long-name>"`.
    pub fn with_options(options: ParserOptions) -> Result<Self, DefinitionError> {
        let help_flag = HelpFlag::parse(&options.help_flag)?;
        let registry = Registry::with_help(&help_flag);
        Ok(Self {
            options,
            help_flag,
            registry,
        })
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    pub fn prog(&self) -> &str {
        &self.options.prog
    }

    pub fn help_flag(&self) -> &HelpFlag {
        &self.help_flag
    }

    /// Registered arguments, in registration order.
    pub fn arguments(&self) -> &[Argument] {
        self.registry.arguments()
    }

    /// Registered flags, in registration order.
    pub fn flags(&self) -> &[Flag] {
        self.registry.flags()
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Register an argument.
    ///
    /// ## Errors
    /// - `EmptyName` for an empty long or short name.
    /// - `Redundant` if either name is already taken (including by the help flag).
    /// - `InvalidLongName` / `InvalidShortName` when strict mode is on and a name breaks the style rules.
    pub fn add_argument(&mut self, argument: Argument) -> Result<&Argument, DefinitionError> {
        self.check_names(&argument.long_name, argument.short_name.as_deref())?;
        tracing::debug!(long_name = %argument.long_name, dest = %argument.dest, required = argument.required(), "registered argument");
        let idx = self.registry.insert_argument(argument);
        Ok(self.registry.argument(idx))
    }

    /// Register a flag. Fails for the same reasons as [`Parser::add_argument`].
    pub fn add_flag(&mut self, flag: Flag) -> Result<&Flag, DefinitionError> {
        self.check_names(&flag.long_name, flag.short_name.as_deref())?;
        tracing::debug!(long_name = %flag.long_name, dest = %flag.dest, "registered flag");
        let idx = self.registry.insert_flag(flag);
        Ok(self.registry.flag(idx))
    }

    /// Register an argument from a spec string like `"--file -f [Input file], PATH, false, in.txt"`.
    pub fn add_arg(&mut self, spec: &str, dest: impl Into<String>) -> Result<&Argument, RegisterError> {
        let spec = cly_syntax::parse_argument_spec(spec)?;
        Ok(self.add_argument(Argument::from_spec(spec, dest))?)
    }

    /// Register a flag from a spec string like `"--verbose -v [Print more]"`.
    pub fn flag(&mut self, spec: &str, dest: impl Into<String>) -> Result<&Flag, RegisterError> {
        let spec = cly_syntax::parse_flag_spec(spec)?;
        Ok(self.add_flag(Flag::from_spec(spec, dest))?)
    }

    fn check_names(&self, long_name: &str, short_name: Option<&str>) -> Result<(), DefinitionError> {
        let strict = self.options.strict_mode;
        // Emptiness is checked before anything else, in both modes.
        validate_long_name(long_name, false)?;
        if let Some(short) = short_name {
            validate_short_name(short, false)?;
        }

        self.registry.check_free(long_name, short_name)?;

        validate_long_name(long_name, strict)?;
        if let Some(short) = short_name {
            validate_short_name(short, strict)?;
        }
        Ok(())
    }

    // ========================================================================
    // Parsing
    // ========================================================================

    /// Parse a command line (without the program name).
    ///
    /// ## Returns
    /// - `Outcome::Help` as soon as the help flag is seen.
    /// - `Outcome::Parsed` otherwise.
    ///
    /// ## Errors
    /// A [`Rejection`] describing the first problem found.
    #[tracing::instrument(skip_all, fields(prog = %self.options.prog))]
    pub fn parse<I, S>(&self, args: I) -> Result<Outcome, Rejection>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        tracing::debug!(arg_count = args.len(), "parsing command line");
        Scan::new(self, args).run()
    }

    /// Parse the process's own command line.
    pub fn parse_env(&self) -> Result<Outcome, Rejection> {
        self.parse(std::env::args().skip(1))
    }

    /// Parse `args`, printing help (exit 0) or the rejection (exit [`REJECTION_EXIT_CODE`]) and exiting when the
    /// command line does not parse into matches.
    pub fn parse_or_exit<I, S>(&self, args: I) -> Matches
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match self.parse(args) {
            Ok(Outcome::Parsed(matches)) => matches,
            Ok(Outcome::Help(help)) => {
                print!("{help}");
                process::exit(0);
            }
            Err(rejection) => {
                println!("{rejection}");
                process::exit(rejection.exit_code());
            }
        }
    }
}
