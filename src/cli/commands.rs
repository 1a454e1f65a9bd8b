//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::path::Path;

use miette::{Diagnostic, Report};

use crate::parser::{Outcome, Parser};

use super::definition::Definition;
use super::{CliError, CliResult, ExitCode};

/// Render a diagnostic the way miette reports it (code, message, labelled source and help).
fn render<E>(err: E) -> String
where
    E: Diagnostic + Send + Sync + 'static,
{
    format!("{:?}", Report::new(err))
}

/// Load a definition file and build its parser.
fn load_parser(file_path: &Path, width: Option<usize>) -> CliResult<Parser> {
    let mut definition = Definition::load(file_path)?;
    if let Some(width) = width {
        definition.options.help_layout.terminal_width = Some(width);
    }
    definition.build().map_err(|e| CliError::failure(render(e)))
}

/// Check that a definition file builds.
pub fn check_definition(file_path: &Path) -> CliResult<ExitCode> {
    let parser = load_parser(file_path, None)?;
    println!(
        "✓ {} is valid ({} arguments, {} flags)",
        file_path.display(),
        parser.arguments().len(),
        parser.flags().len()
    );
    Ok(ExitCode::SUCCESS)
}

/// Print the generated help page.
pub fn print_help(file_path: &Path, width: Option<usize>) -> CliResult<ExitCode> {
    let parser = load_parser(file_path, width)?;
    print!("{}", parser.help());
    Ok(ExitCode::SUCCESS)
}

/// Parse a command line against a definition and print the matches as JSON.
pub fn parse_command_line(file_path: &Path, args: &[String]) -> CliResult<ExitCode> {
    let parser = load_parser(file_path, None)?;
    match parser.parse(args.iter().cloned()) {
        Ok(Outcome::Parsed(matches)) => {
            let json = serde_json::to_string_pretty(&matches)
                .map_err(|e| CliError::failure(format!("Error serializing matches: {}", e)))?;
            println!("{json}");
            Ok(ExitCode::SUCCESS)
        }
        Ok(Outcome::Help(help)) => {
            print!("{help}");
            Ok(ExitCode::SUCCESS)
        }
        Err(rejection) => Err(CliError::with_code(rejection.to_string(), rejection.exit_code())),
    }
}

/// Parse a single spec string and print its fields.
pub fn show_spec(spec: &str, flag: bool) -> CliResult<ExitCode> {
    if flag {
        let parsed = cly_syntax::parse_flag_spec(spec).map_err(|e| CliError::failure(render(e)))?;
        println!("{parsed:#?}");
    } else {
        let parsed = cly_syntax::parse_argument_spec(spec).map_err(|e| CliError::failure(render(e)))?;
        println!("{parsed:#?}");
    }
    Ok(ExitCode::SUCCESS)
}
