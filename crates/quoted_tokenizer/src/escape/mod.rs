//! Caller-side escape helpers.
//!
//! [`Tokenizer`](crate::Tokenizer) only splits; fragments come back with
//! their escape characters intact. These functions sit on top of it:
//! [`quote`] prepares values so they survive splitting, and [`unquote`]
//! turns a fragment back into the value it stands for.

use crate::DelimiterSet;

/// Remove escape characters, keeping the character each one shields.
///
/// An escaped escape (`\\`) yields a single escape character. A lone
/// escape character at the very end has nothing to shield and is dropped.
///
/// ```
/// use quoted_tokenizer::unquote;
///
/// assert_eq!(unquote(r"a\,b\\c", '\\'), r"a,b\c");
/// ```
pub fn unquote(fragment: &str, escape: char) -> String {
    let mut result = String::with_capacity(fragment.len());
    let mut chars = fragment.chars();

    while let Some(c) = chars.next() {
        if c == escape {
            if let Some(shielded) = chars.next() {
                result.push(shielded);
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Prefix every special character, and every escape character, with
/// `escape`.
///
/// Quoting with the tokenizer's delimiter set makes the output a single
/// fragment that [`unquote`] maps back to `text`.
///
/// ```
/// use quoted_tokenizer::quote;
///
/// assert_eq!(quote("a,b\\c", ",", '\\'), r"a\,b\\c");
/// ```
pub fn quote(text: &str, specials: impl Into<DelimiterSet>, escape: char) -> String {
    let specials = specials.into();
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        if c == escape || specials.contains(c) {
            result.push(escape);
        }
        result.push(c);
    }

    result
}
