//! Delimiter splitting with single-character escapes.
//!
//! [`Tokenizer`] splits a string on a set of delimiter characters. One
//! designated escape character shields the character right after it from
//! being treated as a delimiter. The escape and the shielded character are
//! both kept in the fragment: splitting and unescaping are separate steps,
//! and the second one ([`unquote`]) is up to the caller.
//!
//! ```
//! use quoted_tokenizer::{unquote, Tokenizer};
//!
//! let mut tokenizer = Tokenizer::new(r"red,green\,blue,,", ",", '\\');
//! let mut fields = Vec::new();
//! while tokenizer.has_more() {
//!     fields.push(unquote(tokenizer.next_fragment(), '\\'));
//! }
//! assert_eq!(fields, ["red", "green,blue", ""]);
//! ```
//!
//! This crate has no dependencies on the `qtok` tool. Anything that needs
//! escape-aware splitting (config readers, field parsers) can use it alone.

mod delimiters;
mod escape;
mod tokenizer;

pub use delimiters::DelimiterSet;
pub use escape::{quote, unquote};
pub use tokenizer::{split_quoted, Tokenizer};
