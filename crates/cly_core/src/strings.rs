//! Unicode-scalar string helpers used by help layout.
//!
//! ## Notes
//! - **Width model**: one Rust `char` is one column. Grapheme clusters and East Asian wide characters are not
//!   special-cased.

/// Count the Unicode scalar values in `s`.
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Split `s` after its first `n` Unicode scalar values.
///
/// ## Returns
/// - `(head, tail)`: `head` holds at most `n` scalars; `tail` is the remainder (possibly empty).
///
/// ## Examples
/// ```rust
/// use cly_core::strings::split_at_chars;
///
/// assert_eq!(split_at_chars("héllo", 2), ("hé", "llo"));
/// assert_eq!(split_at_chars("ab", 5), ("ab", ""));
/// ```
pub fn split_at_chars(s: &str, n: usize) -> (&str, &str) {
    match s.char_indices().nth(n) {
        Some((byte_idx, _)) => s.split_at(byte_idx),
        None => (s, ""),
    }
}
