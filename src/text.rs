//! Char-boundary helpers.
//!
//! The reveal cursor counts Unicode scalar values (`char`s), so slicing never splits a
//! multi-byte UTF-8 sequence.

/// Number of `char`s in `s`.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// The first `n` chars of `s`. Returns `s` unchanged when `n >= char_len(s)`.
pub fn prefix_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// Whether `next` extends `prev` by appending only (a plain string-prefix check).
///
/// Every string continues the empty string.
pub fn is_continuation(prev: &str, next: &str) -> bool {
    next.starts_with(prev)
}
