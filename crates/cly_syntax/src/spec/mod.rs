//! Parse compact argument and flag specs.
//!
//! ## Grammar
//!
//! ```text
//! flag-spec     := long-name [ SP short-name ] SP description
//! argument-spec := long-name [ SP short-name ] SP description
//!                  [ ", " field ] [ ", " field ] [ ", " default ]
//! description   := "[" ( "\[" | "\]" | any char except an unescaped "]" )+ "]"
//! ```
//!
//! The argument trailer is resolved positionally:
//! - a boolean literal (`true`/`false`, any case) in the first field is the `indefinite` switch and means "no
//!   metavar";
//! - otherwise the first field is the metavar and the second (if any) must be the `indefinite` switch;
//! - whatever follows the `indefinite` field is the default, verbatim, commas included.
//!
//! ## Module Structure
//!
//! - `scanner` - byte-offset cursor shared by both spec forms
//! - `error` - `SpecError` miette diagnostics

mod error;
mod scanner;

pub use error::{SpecError, SpecErrorKind};

use scanner::{SpecScanner, is_valid_metavar, parse_bool};

/// The fields an argument spec string describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentSpec {
    pub long_name: String,
    pub short_name: Option<String>,
    pub description: String,
    pub metavar: Option<String>,
    pub indefinite: bool,
    /// `None` means the argument is required.
    pub default: Option<String>,
}

/// The fields a flag spec string describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagSpec {
    pub long_name: String,
    pub short_name: Option<String>,
    pub description: String,
}

/// Parse an argument spec such as `--file -f [Input file], PATH, false, in.txt`.
///
/// ## Errors
/// Returns a [`SpecError`] pointing at the first part of `spec` that does not fit the grammar.
#[tracing::instrument(skip_all, fields(spec_len = spec.len()))]
pub fn parse_argument_spec(spec: &str) -> Result<ArgumentSpec, SpecError> {
    let mut scanner = SpecScanner::new(spec);
    let head = scanner.head()?;

    let mut metavar = None;
    let mut indefinite = false;
    let mut default = None;

    if scanner.field_separator()? {
        let (offset, first) = scanner.field()?;
        match parse_bool(first) {
            Some(value) => indefinite = value,
            None => {
                if !is_valid_metavar(first) {
                    return Err(scanner.error(
                        SpecErrorKind::InvalidMetavar { value: first.to_string() },
                        offset,
                        first.len(),
                    ));
                }
                metavar = Some(first.to_string());

                if scanner.field_separator()? {
                    let (offset, second) = scanner.field()?;
                    indefinite = parse_bool(second).ok_or_else(|| {
                        scanner.error(
                            SpecErrorKind::InvalidIndefinite { value: second.to_string() },
                            offset,
                            second.len(),
                        )
                    })?;
                }
            }
        }

        if scanner.field_separator()? {
            default = Some(scanner.remainder()?.to_string());
        }
    }

    tracing::trace!(long_name = %head.long_name, indefinite, has_default = default.is_some(), "parsed argument spec");
    Ok(ArgumentSpec {
        long_name: head.long_name,
        short_name: head.short_name,
        description: head.description,
        metavar,
        indefinite,
        default,
    })
}

/// Parse a flag spec such as `--verbose -v [Print more]`.
///
/// ## Errors
/// Returns a [`SpecError`] for malformed heads and for any input left after the description.
#[tracing::instrument(skip_all, fields(spec_len = spec.len()))]
pub fn parse_flag_spec(spec: &str) -> Result<FlagSpec, SpecError> {
    let mut scanner = SpecScanner::new(spec);
    let head = scanner.head()?;

    let rest = scanner.rest();
    if !rest.is_empty() {
        return Err(scanner.error(SpecErrorKind::TrailingInput, scanner.pos(), rest.len()));
    }

    Ok(FlagSpec {
        long_name: head.long_name,
        short_name: head.short_name,
        description: head.description,
    })
}
