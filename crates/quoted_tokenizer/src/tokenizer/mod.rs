//! Forward-only fragment scanner.
//!
//! The tokenizer walks the source once, left to right. Each call to
//! [`Tokenizer::next_fragment`] consumes characters up to and including the
//! next unescaped delimiter and returns everything before that delimiter.
//!
//! # Escapes
//!
//! The escape character shields exactly one following character from the
//! delimiter test. Both characters stay in the fragment; nothing is ever
//! unescaped here (see [`crate::unquote`] for that). There is no quoted
//! region: the effect never outlasts the next character.
//!
//! # Delimiter runs
//!
//! A run of delimiters at the very start of the text is skipped once, at
//! construction. After that every delimiter terminates a fragment, so two
//! adjacent interior delimiters produce an empty fragment between them. A
//! delimiter that is the last character of the text leaves nothing behind
//! it, so no trailing empty fragment is produced.
//!
//! # Cursor
//!
//! The cursor is a UTF-8 byte offset that always sits on a char boundary
//! and never exceeds `text.len()`. One "character" is one `char`.

use std::iter::FusedIterator;
use std::ops::Range;

use crate::DelimiterSet;

/// Byte needles for the `memchr` fast path.
///
/// Only built when the escape character and every delimiter are ASCII and
/// there are at most three distinct bytes to look for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Jump {
    One(u8),
    Two(u8, u8),
    Three(u8, u8, u8),
    /// Char-by-char scan.
    Scalar,
}

impl Jump {
    fn plan(delimiters: &DelimiterSet, escape: char) -> Self {
        if !escape.is_ascii() || !delimiters.is_ascii_only() {
            return Jump::Scalar;
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "escape is ASCII, checked above"
        )]
        let escape = escape as u8;
        let mut needles: Vec<u8> = delimiters.ascii_members().filter(|&b| b != escape).collect();
        needles.push(escape);
        match *needles.as_slice() {
            [a] => Jump::One(a),
            [a, b] => Jump::Two(a, b),
            [a, b, c] => Jump::Three(a, b, c),
            _ => Jump::Scalar,
        }
    }

    /// Offset of the first needle byte in `haystack`.
    #[inline]
    fn find(self, haystack: &[u8]) -> Option<usize> {
        match self {
            Jump::One(a) => memchr::memchr(a, haystack),
            Jump::Two(a, b) => memchr::memchr2(a, b, haystack),
            Jump::Three(a, b, c) => memchr::memchr3(a, b, c, haystack),
            Jump::Scalar => None,
        }
    }
}

/// Splits a string on unescaped delimiters, keeping escapes verbatim.
///
/// Fragments are sub-slices of the source, so they stay valid and
/// unchanged for as long as the source does, independent of further
/// scanning.
///
/// ```
/// use quoted_tokenizer::Tokenizer;
///
/// let fragments: Vec<&str> = Tokenizer::new(r",a\,b,,c,", ",", '\\').collect();
/// assert_eq!(fragments, [r"a\,b", "", "c"]);
/// ```
#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
    text: &'a str,
    delimiters: DelimiterSet,
    escape: char,
    jump: Jump,
    /// Byte offset of the next unread character.
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer and skip any run of leading delimiters.
    ///
    /// The leading skip tests delimiter membership only. If the escape
    /// character is also a delimiter, a leading occurrence of it is skipped
    /// like any other delimiter; escape precedence applies from the first
    /// fragment onward.
    pub fn new(text: &'a str, delimiters: impl Into<DelimiterSet>, escape: char) -> Self {
        let delimiters = delimiters.into();
        let jump = Jump::plan(&delimiters, escape);
        let pos = text
            .char_indices()
            .find(|&(_, c)| !delimiters.contains(c))
            .map_or(text.len(), |(i, _)| i);
        Self {
            text,
            delimiters,
            escape,
            jump,
            pos,
        }
    }

    /// Returns `true` while unread input remains.
    #[inline]
    pub fn has_more(&self) -> bool {
        self.pos < self.text.len()
    }

    /// Produce the next fragment.
    ///
    /// Past exhaustion this returns `""` and leaves the tokenizer unchanged.
    pub fn next_fragment(&mut self) -> &'a str {
        let text = self.text;
        &text[self.next_fragment_span()]
    }

    /// Like [`next_fragment`](Self::next_fragment), but returns the byte
    /// range of the fragment within the source.
    pub fn next_fragment_span(&mut self) -> Range<usize> {
        let start = self.pos;
        loop {
            let Some((at, c)) = self.find_special(self.pos) else {
                self.pos = self.text.len();
                return start..self.pos;
            };
            if c == self.escape {
                // The companion is taken whole and never tested as a delimiter.
                let after = at + c.len_utf8();
                self.pos = after + self.text[after..].chars().next().map_or(0, char::len_utf8);
            } else {
                self.pos = at + c.len_utf8();
                return start..at;
            }
        }
    }

    /// Current cursor position (byte offset into the source).
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The source text not yet consumed.
    pub fn remainder(&self) -> &'a str {
        &self.text[self.pos..]
    }

    pub fn source(&self) -> &'a str {
        self.text
    }

    pub fn delimiters(&self) -> &DelimiterSet {
        &self.delimiters
    }

    pub fn escape(&self) -> char {
        self.escape
    }

    /// Locate the next escape or delimiter at or after byte `from`.
    fn find_special(&self, from: usize) -> Option<(usize, char)> {
        let rest = &self.text[from..];
        if self.jump == Jump::Scalar {
            return rest
                .char_indices()
                .find(|&(_, c)| c == self.escape || self.delimiters.contains(c))
                .map(|(i, c)| (from + i, c));
        }
        let offset = self.jump.find(rest.as_bytes())?;
        Some((from + offset, char::from(rest.as_bytes()[offset])))
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.has_more() {
            Some(self.next_fragment())
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every fragment consumes at least one byte.
        let remaining = self.text.len() - self.pos;
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl FusedIterator for Tokenizer<'_> {}

/// Shorthand for [`Tokenizer::new`].
pub fn split_quoted(
    text: &str,
    delimiters: impl Into<DelimiterSet>,
    escape: char,
) -> Tokenizer<'_> {
    Tokenizer::new(text, delimiters, escape)
}
