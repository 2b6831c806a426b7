//! Command-line option parsing.
//!
//! Options use the `--name=value` form. Values for `--delims`, `--escape`
//! and `--separator` may contain backslash sequences so that tabs and
//! spaces can be passed without shell gymnastics.

use crate::error::CliError;

/// What the user asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Split(Options),
    Help,
}

/// Splitting configuration for one `qtok` run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Delimiter characters (each char is one delimiter).
    pub delimiters: String,
    pub escape: char,
    /// Strip escapes from each fragment before printing.
    pub unquote: bool,
    /// Print empty fragments as `<empty>`.
    pub show_empty: bool,
    /// Join fragments of one input with this instead of newlines.
    pub separator: Option<String>,
    /// Inputs given on the command line. Empty means read stdin.
    pub texts: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            delimiters: ",".to_string(),
            escape: '\\',
            unquote: false,
            show_empty: false,
            separator: None,
            texts: Vec::new(),
        }
    }
}

/// Parse arguments (without the program name).
pub fn parse_args<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut options = Options::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        if arg == "--" {
            options.texts.extend(args.by_ref());
            break;
        } else if arg == "-h" || arg == "--help" {
            return Ok(Command::Help);
        } else if let Some(value) = arg.strip_prefix("--delims=") {
            options.delimiters = resolve_sequences(value)?;
        } else if let Some(value) = arg.strip_prefix("--escape=") {
            options.escape = single_char(&resolve_sequences(value)?)?;
        } else if let Some(value) = arg.strip_prefix("--separator=") {
            options.separator = Some(resolve_sequences(value)?);
        } else if arg == "--unquote" {
            options.unquote = true;
        } else if arg == "--show-empty" {
            options.show_empty = true;
        } else if arg == "--delims" {
            return Err(CliError::MissingValue("--delims"));
        } else if arg == "--escape" {
            return Err(CliError::MissingValue("--escape"));
        } else if arg == "--separator" {
            return Err(CliError::MissingValue("--separator"));
        } else if arg.starts_with('-') && arg.len() > 1 {
            return Err(CliError::UnknownOption(arg));
        } else {
            options.texts.push(arg);
        }
    }

    Ok(Command::Split(options))
}

/// Resolve `\t`, `\n`, `\s` (space) and `\\` in an option value.
fn resolve_sequences(value: &str) -> Result<String, CliError> {
    let mut result = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => result.push('\t'),
            Some('n') => result.push('\n'),
            Some('s') => result.push(' '),
            Some('\\') | None => result.push('\\'),
            Some(other) => return Err(CliError::InvalidSequence(other)),
        }
    }

    Ok(result)
}

fn single_char(value: &str) -> Result<char, CliError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(CliError::InvalidEscape(value.to_string())),
    }
}

pub fn print_usage() {
    println!("qtok - split text on delimiters, honoring an escape character");
    println!();
    println!("Usage: qtok [options] [TEXT...]");
    println!();
    println!("Splits each TEXT (or each stdin line when none is given) and prints");
    println!("one fragment per line. Escapes are kept unless --unquote is set.");
    println!();
    println!("Options:");
    println!("  --delims=<chars>     Delimiter characters (default: ,)");
    println!("  --escape=<char>      Escape character (default: \\)");
    println!("  --unquote            Remove escapes from each fragment");
    println!("  --show-empty         Print empty fragments as <empty>");
    println!("  --separator=<text>   Print fragments on one line, joined by <text>");
    println!("  -h, --help           Show this help");
    println!();
    println!("Option values accept \\t, \\n, \\s (space) and \\\\.");
    println!("Set RUST_LOG=qtok=debug for diagnostics on stderr.");
}
