//! JSON interface definition files
//!
//! A definition file holds the [`ParserOptions`] fields at the top level plus `arguments` and `flags` lists. Each
//! entry is either a compact spec string with a `dest`, or an explicit object:
//!
//! ```json
//! {
//!     "prog": "tsc",
//!     "arguments": [
//!         { "spec": "--project -p [Project file], FILE, false, tsconfig.json", "dest": "project" },
//!         { "long_name": "--lib", "description": "Libraries", "dest": "lib", "indefinite": true }
//!     ],
//!     "flags": [{ "spec": "--watch -w [Watch input files]", "dest": "watch" }]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::parser::{Argument, Flag, Parser, ParserOptions, RegisterError};

use super::{CliError, CliResult};

/// An argument entry: a spec string or an explicit definition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ArgumentEntry {
    Spec { spec: String, dest: String },
    Explicit(Argument),
}

/// A flag entry: a spec string or an explicit definition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FlagEntry {
    Spec { spec: String, dest: String },
    Explicit(Flag),
}

/// A parsed definition file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Definition {
    #[serde(flatten)]
    pub options: ParserOptions,
    #[serde(default)]
    pub arguments: Vec<ArgumentEntry>,
    #[serde(default)]
    pub flags: Vec<FlagEntry>,
}

impl Definition {
    /// Read and deserialize a definition file.
    pub fn load(path: &Path) -> CliResult<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| CliError::failure(format!("Error reading file '{}': {}", path.display(), e)))?;
        Self::from_json(&text)
            .map_err(|e| CliError::failure(format!("Invalid definition file '{}': {}", path.display(), e)))
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Register every entry, arguments first, in file order.
    ///
    /// ## Errors
    /// The first spec or definition error; later entries are not looked at.
    pub fn build(&self) -> Result<Parser, RegisterError> {
        let mut parser = Parser::with_options(self.options.clone())?;
        for entry in &self.arguments {
            match entry {
                ArgumentEntry::Spec { spec, dest } => {
                    parser.add_arg(spec, dest.as_str())?;
                }
                ArgumentEntry::Explicit(argument) => {
                    parser.add_argument(argument.clone())?;
                }
            }
        }
        for entry in &self.flags {
            match entry {
                FlagEntry::Spec { spec, dest } => {
                    parser.flag(spec, dest.as_str())?;
                }
                FlagEntry::Explicit(flag) => {
                    parser.add_flag(flag.clone())?;
                }
            }
        }
        tracing::debug!(
            arguments = parser.arguments().len(),
            flags = parser.flags().len(),
            "built parser from definition"
        );
        Ok(parser)
    }
}
