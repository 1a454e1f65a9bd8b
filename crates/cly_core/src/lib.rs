//! Provide the shared, pure vocabulary for `cly`: name rules, token classification and definition errors.
//!
//! Both the spec-string frontend (`cly_syntax`) and the parser (`cly`) lean on these helpers so that a name accepted
//! at registration time is classified the same way when it shows up on a command line.
//!
//! ## Notes
//!
//! - **No IO** and no global state. Everything here is deterministic.
//! - Lengths are counted in Unicode scalar values (Rust `char`), never bytes.

pub mod errors;
pub mod names;
pub mod strings;

pub use errors::{DefinitionError, NameRule};
pub use names::{HelpFlag, NameKind, is_cluster_candidate, split_assignment, validate_long_name, validate_short_name};
