//! CLI module for the `cly` tool
//!
//! This module provides a command-line interface for working with interface definition files.
//!
//! ## Commands
//!
//! - `check <file>` - Build the parser a definition file describes and report the first error
//! - `help <file>` - Print the generated help page
//! - `parse <file> -- <args>` - Parse a command line and print the matches as JSON
//! - `spec <spec>` - Parse one compact spec string and print its fields
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//! - `definition` - The JSON definition file
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;
pub mod definition;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::version::CLY_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Create an error with a custom exit code.
    pub fn with_code(message: impl Into<String>, code: i32) -> Self {
        Self::new(message, ExitCode(code))
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Check, render and try out cly interface definitions
#[derive(Parser, Debug)]
#[command(name = "cly")]
#[command(version = CLY_VERSION)]
#[command(about = "Check, render and try out cly interface definitions", long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the parser a definition file describes and report the first error
    Check {
        /// JSON definition file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the generated help page
    Help {
        /// JSON definition file
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Terminal width to lay the page out for (default: the current terminal)
        #[arg(short, long, value_name = "COLUMNS")]
        width: Option<usize>,
    },

    /// Parse a command line and print the matches as JSON
    Parse {
        /// JSON definition file
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// The command line to parse, after `--`
        #[arg(value_name = "ARGS", last = true)]
        args: Vec<String>,
    },

    /// Parse one compact spec string and print its fields
    Spec {
        /// The spec string, e.g. "--file -f [Input file], PATH, false, in.txt"
        #[arg(value_name = "SPEC", allow_hyphen_values = true)]
        spec: String,
        /// Parse as a flag spec instead of an argument spec
        #[arg(long)]
        flag: bool,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Check { file } => commands::check_definition(&file),
        Command::Help { file, width } => commands::print_help(&file, width),
        Command::Parse { file, args } => commands::parse_command_line(&file, &args),
        Command::Spec { spec, flag } => commands::show_spec(&spec, flag),
    }
}

// ============================================================================
// Tests
// ============================================================================
