//! The argv scan.
//!
//! Tokens are read left to right. Each token is tried, in order, as:
//! 1. an exact registered name (argument, flag or help flag);
//! 2. a `name=value` assignment;
//! 3. a cluster of short names (`-abc`), in strict mode only;
//! 4. otherwise, an unknown token.
//!
//! After the scan, required arguments are checked and defaults filled in.

use cly_core::{is_cluster_candidate, split_assignment};

use super::Parser;
use super::matches::{Matches, Outcome, Value};
use super::registry::Entry;
use super::rejection::{RejectReason, Rejection};

/// Whether scanning should keep going after a token.
enum Flow {
    Continue,
    Help,
}

pub(super) struct Scan<'p> {
    parser: &'p Parser,
    args: Vec<String>,
    pos: usize,
    matches: Matches,
    supplied: Vec<bool>,
}

impl<'p> Scan<'p> {
    pub fn new(parser: &'p Parser, args: Vec<String>) -> Self {
        Self {
            parser,
            args,
            pos: 0,
            matches: Matches::default(),
            supplied: vec![false; parser.registry.arguments().len()],
        }
    }

    pub fn run(mut self) -> Result<Outcome, Rejection> {
        while self.pos < self.args.len() {
            let token = self.args[self.pos].clone();
            let flow = if let Some(entry) = self.parser.registry.lookup(&token) {
                self.resolve(entry, &token)?
            } else if let Some((name, value)) = split_assignment(&token) {
                self.assign(&token, name, value)?
            } else if self.parser.options.strict_mode && is_cluster_candidate(&token) {
                self.cluster(&token)?
            } else {
                self.unknown(&token)?
            };

            if let Flow::Help = flow {
                tracing::debug!(token = %token, "help requested");
                return Ok(Outcome::Help(self.parser.help()));
            }
            self.pos += 1;
        }
        self.finish()
    }

    // ========================================================================
    // Token forms
    // ========================================================================

    /// Resolve a registered entry. `shown` is the token as typed, used in messages.
    fn resolve(&mut self, entry: Entry, shown: &str) -> Result<Flow, Rejection> {
        match entry {
            Entry::Help => return Ok(Flow::Help),
            Entry::Flag(idx) => {
                let dest = &self.parser.registry.flag(idx).dest;
                self.matches.insert(dest, Value::Flag(true));
            }
            Entry::Argument(idx) => {
                let value = self.take_values(idx, shown)?;
                self.supply(idx, value);
            }
        }
        Ok(Flow::Continue)
    }

    /// `--name=value`.
    fn assign(&mut self, token: &str, name: &str, value: &str) -> Result<Flow, Rejection> {
        match self.parser.registry.lookup(name) {
            Some(Entry::Argument(idx)) => {
                let value = if self.parser.registry.argument(idx).indefinite {
                    Value::Many(vec![value.to_string()])
                } else {
                    Value::One(value.to_string())
                };
                self.supply(idx, value);
                Ok(Flow::Continue)
            }
            Some(Entry::Flag(_) | Entry::Help) => Err(self.reject(
                RejectReason::FlagWithValue { name: name.to_string() },
                None,
            )),
            None => self.unknown(token),
        }
    }

    /// `-abc`: every character is a short name. Only the last one may be an argument.
    fn cluster(&mut self, token: &str) -> Result<Flow, Rejection> {
        let shorts: Vec<char> = token.chars().skip(1).collect();
        let last = shorts.len() - 1;

        for (i, c) in shorts.iter().enumerate() {
            let name = format!("-{c}");
            match self.parser.registry.lookup(&name) {
                Some(Entry::Argument(_)) if i != last => {
                    return Err(self.reject(
                        RejectReason::ArgumentInsideCluster {
                            cluster: token.to_string(),
                        },
                        None,
                    ));
                }
                Some(entry) => {
                    if let Flow::Help = self.resolve(entry, token)? {
                        return Ok(Flow::Help);
                    }
                }
                None => {
                    self.unknown(&name)?;
                }
            }
        }
        Ok(Flow::Continue)
    }

    fn unknown(&mut self, name: &str) -> Result<Flow, Rejection> {
        if !self.parser.options.allow_unknown_args {
            return Err(self.reject(RejectReason::Unrecognised { name: name.to_string() }, None));
        }
        tracing::debug!(token = %name, "ignoring unknown token");
        self.matches.push_unknown(name);
        Ok(Flow::Continue)
    }

    // ========================================================================
    // Values
    // ========================================================================

    /// Consume the value(s) following the argument at `self.pos`.
    fn take_values(&mut self, idx: usize, shown: &str) -> Result<Value, Rejection> {
        let argument = self.parser.registry.argument(idx);
        let meta = argument.metavar_or_default();
        let prog = &self.parser.options.prog;

        if argument.indefinite {
            let values: Vec<String> = self.args[self.pos + 1..]
                .iter()
                .take_while(|token| !self.parser.registry.is_name(token))
                .cloned()
                .collect();
            if values.is_empty() {
                let usage = format!("{prog} {shown} <{meta}1> <{meta}2> ... <{meta}n>");
                return Err(self.missing_value(shown, &usage, &argument.description));
            }
            self.pos += values.len();
            return Ok(Value::Many(values));
        }

        match self.args.get(self.pos + 1) {
            Some(value) if !value.is_empty() && !value.starts_with('-') => {
                let value = value.clone();
                self.pos += 1;
                Ok(Value::One(value))
            }
            _ => {
                let usage = format!("{prog} {shown} <{meta}>");
                Err(self.missing_value(shown, &usage, &argument.description))
            }
        }
    }

    fn supply(&mut self, idx: usize, value: Value) {
        let dest = &self.parser.registry.argument(idx).dest;
        self.matches.insert(dest, value);
        self.supplied[idx] = true;
    }

    // ========================================================================
    // Completion and errors
    // ========================================================================

    fn finish(mut self) -> Result<Outcome, Rejection> {
        let registry = &self.parser.registry;

        let missing: Vec<String> = registry
            .arguments()
            .iter()
            .zip(&self.supplied)
            .filter(|(argument, supplied)| argument.required() && !**supplied)
            .map(|(argument, _)| argument.long_name.clone())
            .collect();
        if !missing.is_empty() {
            let details = format!("\nUsage:\n\t{}", self.parser.usage());
            return Err(self.reject(RejectReason::MissingRequired { names: missing }, Some(details)));
        }

        for (argument, supplied) in registry.arguments().iter().zip(&self.supplied) {
            if *supplied || self.matches.contains(&argument.dest) {
                continue;
            }
            if let Some(default) = &argument.default {
                let value = if argument.indefinite {
                    Value::Many(vec![default.clone()])
                } else {
                    Value::One(default.clone())
                };
                self.matches.insert(&argument.dest, value);
            }
        }
        for flag in registry.flags() {
            if !self.matches.contains(&flag.dest) {
                self.matches.insert(&flag.dest, Value::Flag(false));
            }
        }

        Ok(Outcome::Parsed(self.matches))
    }

    fn missing_value(&self, shown: &str, usage: &str, description: &str) -> Rejection {
        let details = format!("\nCorrect usage:\n\t{usage}\n\nDescription:\n\t{description}");
        self.reject(RejectReason::MissingValue { name: shown.to_string() }, Some(details))
    }

    fn reject(&self, reason: RejectReason, details: Option<String>) -> Rejection {
        tracing::debug!(%reason, "rejecting command line");
        Rejection {
            prog: self.parser.options.prog.clone(),
            reason,
            details,
            help_long: self.parser.help_flag.long.clone(),
        }
    }
}
