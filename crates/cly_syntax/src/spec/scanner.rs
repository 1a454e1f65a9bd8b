//! Cursor over a spec string.
//!
//! The scanner reads the shared head (`long [short] [description]`) and leaves the remainder for the argument or
//! flag trailer. Positions are byte offsets into the original spec so errors can carry exact spans.

use cly_core::names::is_word_char;

use super::error::{SpecError, SpecErrorKind};

/// The part every spec starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Head {
    pub long_name: String,
    pub short_name: Option<String>,
    pub description: String,
}

pub(crate) struct SpecScanner<'a> {
    source: &'a str,
    pos: usize,
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

impl<'a> SpecScanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// The unread remainder of the spec.
    pub fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn error(&self, kind: SpecErrorKind, offset: usize, len: usize) -> SpecError {
        SpecError::new(kind, self.source, offset, len)
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            self.bump();
        }
        &self.source[start..self.pos]
    }

    /// Error for a character that cannot continue a name, or for running out of input before the description.
    fn unexpected_here(&self) -> SpecError {
        match self.peek() {
            Some(ch) => self.error(SpecErrorKind::InvalidNameChar { ch }, self.pos, ch.len_utf8()),
            None => self.error(SpecErrorKind::MissingDescription, self.pos, 0),
        }
    }

    /// Consume at least one space.
    fn spaces(&mut self) -> Result<(), SpecError> {
        if self.eat_while(|c| c == ' ').is_empty() {
            return Err(self.unexpected_here());
        }
        Ok(())
    }

    // ========================================================================
    // Head
    // ========================================================================

    pub fn head(&mut self) -> Result<Head, SpecError> {
        let long_name = self.eat_while(is_name_char);
        if long_name.is_empty() {
            let len = self.peek().map_or(0, char::len_utf8);
            return Err(self.error(SpecErrorKind::MissingLongName, self.pos, len));
        }
        self.spaces()?;

        let short_name = if self.peek() == Some('[') {
            None
        } else {
            let short = self.eat_while(is_name_char);
            if short.is_empty() {
                return Err(self.unexpected_here());
            }
            self.spaces()?;
            Some(short.to_string())
        };

        if self.peek() != Some('[') {
            let len = self.rest().split(' ').next().map_or(0, str::len);
            return Err(self.error(SpecErrorKind::MissingDescription, self.pos, len));
        }
        let description = self.description()?;

        Ok(Head {
            long_name: long_name.to_string(),
            short_name,
            description,
        })
    }

    /// Read `[ ... ]`, ending at the first unescaped `]`.
    fn description(&mut self) -> Result<String, SpecError> {
        let open = self.pos;
        self.bump();

        let mut text = String::new();
        loop {
            match self.bump() {
                Some('\\') if matches!(self.peek(), Some('[' | ']')) => {
                    if let Some(bracket) = self.bump() {
                        text.push(bracket);
                    }
                }
                Some(']') => break,
                Some(c) => text.push(c),
                None => {
                    return Err(self.error(
                        SpecErrorKind::UnterminatedDescription,
                        open,
                        self.source.len() - open,
                    ));
                }
            }
        }

        if text.is_empty() {
            return Err(self.error(SpecErrorKind::EmptyDescription, open, self.pos - open));
        }
        Ok(text)
    }

    // ========================================================================
    // Trailer fields
    // ========================================================================

    /// Consume the `", "` that introduces the next field. `Ok(false)` at end of input.
    pub fn field_separator(&mut self) -> Result<bool, SpecError> {
        let rest = self.rest();
        if rest.is_empty() {
            return Ok(false);
        }
        if !rest.starts_with(", ") {
            let len = self.peek().map_or(0, char::len_utf8);
            return Err(self.error(SpecErrorKind::ExpectedSeparator, self.pos, len));
        }
        self.pos += 2;
        Ok(true)
    }

    /// Read a single field up to (not including) the next `", "`.
    ///
    /// ## Returns
    /// - `(offset, text)`: the byte offset the field started at and its text.
    pub fn field(&mut self) -> Result<(usize, &'a str), SpecError> {
        let start = self.pos;
        let rest = self.rest();
        let text = rest.find(", ").map_or(rest, |end| &rest[..end]);
        if text.is_empty() {
            return Err(self.error(SpecErrorKind::EmptyField, start, 0));
        }
        self.pos += text.len();
        Ok((start, text))
    }

    /// Read everything that is left, verbatim.
    pub fn remainder(&mut self) -> Result<&'a str, SpecError> {
        let rest = self.rest();
        if rest.is_empty() {
            return Err(self.error(SpecErrorKind::EmptyField, self.pos, 0));
        }
        self.pos = self.source.len();
        Ok(rest)
    }
}

/// Check whether a metavar is a non-empty run of word characters and `-`.
pub(crate) fn is_valid_metavar(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| is_word_char(c) || c == '-')
}

/// Parse a case-insensitive boolean literal.
pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
