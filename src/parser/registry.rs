//! Name registry shared by arguments, flags and the help flag.
//!
//! Long and short names live in one namespace: `-v` cannot be both a flag's short name and an argument's long name.

use std::collections::HashMap;

use cly_core::{DefinitionError, HelpFlag, NameKind};

use super::definitions::{Argument, Flag};

/// What a registered name resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Entry {
    Argument(usize),
    Flag(usize),
    Help,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Registry {
    names: HashMap<String, Entry>,
    arguments: Vec<Argument>,
    flags: Vec<Flag>,
}

impl Registry {
    /// Create a registry with the help flag's names already reserved.
    pub fn with_help(help: &HelpFlag) -> Self {
        let mut registry = Self::default();
        registry.names.insert(help.short.clone(), Entry::Help);
        registry.names.insert(help.long.clone(), Entry::Help);
        registry
    }

    pub fn lookup(&self, name: &str) -> Option<Entry> {
        self.names.get(name).copied()
    }

    pub fn is_name(&self, token: &str) -> bool {
        self.names.contains_key(token)
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    pub fn flags(&self) -> &[Flag] {
        &self.flags
    }

    pub fn argument(&self, idx: usize) -> &Argument {
        &self.arguments[idx]
    }

    pub fn flag(&self, idx: usize) -> &Flag {
        &self.flags[idx]
    }

    /// Fail with `Redundant` if either name is taken, or if the short name repeats the long one.
    pub fn check_free(&self, long_name: &str, short_name: Option<&str>) -> Result<(), DefinitionError> {
        if self.is_name(long_name) {
            return Err(DefinitionError::Redundant {
                kind: NameKind::Long,
                name: long_name.to_string(),
            });
        }
        match short_name {
            Some(short) if self.is_name(short) || short == long_name => Err(DefinitionError::Redundant {
                kind: NameKind::Short,
                name: short.to_string(),
            }),
            _ => Ok(()),
        }
    }

    pub fn insert_argument(&mut self, argument: Argument) -> usize {
        let idx = self.arguments.len();
        self.bind(&argument.long_name, argument.short_name.as_deref(), Entry::Argument(idx));
        self.arguments.push(argument);
        idx
    }

    pub fn insert_flag(&mut self, flag: Flag) -> usize {
        let idx = self.flags.len();
        self.bind(&flag.long_name, flag.short_name.as_deref(), Entry::Flag(idx));
        self.flags.push(flag);
        idx
    }

    fn bind(&mut self, long_name: &str, short_name: Option<&str>, entry: Entry) {
        self.names.insert(long_name.to_string(), entry);
        if let Some(short) = short_name {
            self.names.insert(short.to_string(), entry);
        }
    }
}
