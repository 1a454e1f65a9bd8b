//! Parse results.

use std::collections::BTreeMap;

use serde::Serialize;

/// The value stored under an argument's or flag's `dest`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Flag(bool),
    One(String),
    Many(Vec<String>),
}

/// What a successful [`crate::Parser::parse`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The command line was parsed.
    Parsed(Matches),
    /// The help flag was given; holds the help page to print.
    Help(String),
}

impl Outcome {
    /// The matches, if the command line was parsed rather than a help request.
    pub fn matches(self) -> Option<Matches> {
        match self {
            Outcome::Parsed(matches) => Some(matches),
            Outcome::Help(_) => None,
        }
    }
}

/// Parsed values keyed by `dest`.
///
/// Every registered flag has an entry (`false` when absent). Optional arguments that were not supplied hold their
/// default; required arguments are always present in a successful parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Matches {
    values: BTreeMap<String, Value>,
    unknown: Vec<String>,
}

impl Matches {
    pub fn get(&self, dest: &str) -> Option<&Value> {
        self.values.get(dest)
    }

    pub fn contains(&self, dest: &str) -> bool {
        self.values.contains_key(dest)
    }

    /// `true` only when `dest` is a flag that was given.
    pub fn get_flag(&self, dest: &str) -> bool {
        matches!(self.values.get(dest), Some(Value::Flag(true)))
    }

    /// The value of a single-valued argument.
    pub fn get_one(&self, dest: &str) -> Option<&str> {
        match self.values.get(dest) {
            Some(Value::One(value)) => Some(value),
            _ => None,
        }
    }

    /// The values of an indefinite argument.
    pub fn get_many(&self, dest: &str) -> Option<&[String]> {
        match self.values.get(dest) {
            Some(Value::Many(values)) => Some(values),
            _ => None,
        }
    }

    /// Iterate `(dest, value)` pairs in `dest` order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(dest, value)| (dest.as_str(), value))
    }

    /// Tokens skipped because the parser allows unknown arguments.
    pub fn unknown(&self) -> &[String] {
        &self.unknown
    }

    pub(crate) fn insert(&mut self, dest: &str, value: Value) {
        self.values.insert(dest.to_string(), value);
    }

    pub(crate) fn push_unknown(&mut self, token: &str) {
        self.unknown.push(token.to_string());
    }
}
