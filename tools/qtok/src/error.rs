//! Errors surfaced by the `qtok` front end.
//!
//! Splitting itself cannot fail; everything here is about reading the
//! command line and the input stream.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("option '{0}' requires a value (use {0}=<value>)")]
    MissingValue(&'static str),

    #[error("escape must be exactly one character, got '{0}'")]
    InvalidEscape(String),

    #[error("unknown backslash sequence '\\{0}' in option value")]
    InvalidSequence(char),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
