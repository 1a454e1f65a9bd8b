//! Compact spec-string frontend for `cly`.
//!
//! CLI authors can describe an argument or flag in one line instead of spelling out every field:
//!
//! ```text
//! --output -o [Where to write the result], FILE, false, out.txt
//! --verbose -v [Print more]
//! ```
//!
//! This crate only *parses* those strings into [`spec::ArgumentSpec`] / [`spec::FlagSpec`]. Name style rules and
//! registration live in `cly_core` and the `cly` parser respectively.
//!
//! ## Examples
//! ```rust
//! use cly_syntax::spec;
//!
//! let arg = spec::parse_argument_spec("--file -f [Input file], PATH").unwrap();
//! assert_eq!(arg.long_name, "--file");
//! assert_eq!(arg.metavar.as_deref(), Some("PATH"));
//! assert!(arg.default.is_none());
//! ```

pub mod spec;

pub use spec::{ArgumentSpec, FlagSpec, SpecError, SpecErrorKind, parse_argument_spec, parse_flag_spec};
