//! qtok CLI
//!
//! Splits text on delimiters while honoring a single escape character.

mod error;
mod logging;
mod options;
mod render;

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::error::CliError;
use crate::options::{parse_args, print_usage, Command, Options};

fn main() {
    logging::init_tracing();

    if let Err(err) = run(std::env::args().skip(1)) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(args: impl Iterator<Item = String>) -> Result<(), CliError> {
    let options = match parse_args(args)? {
        Command::Help => {
            print_usage();
            return Ok(());
        }
        Command::Split(options) => options,
    };
    debug!(?options, "parsed options");

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    split_all(&mut out, &options, io::stdin().lock())?;
    out.flush()?;
    Ok(())
}

/// Split every command-line text, or every line of `input` when there are
/// none.
fn split_all<W: Write, R: BufRead>(out: &mut W, options: &Options, input: R) -> Result<usize, CliError> {
    let mut total = 0;
    if options.texts.is_empty() {
        for line in input.lines() {
            let line = line?;
            let line = line.strip_suffix('\r').unwrap_or(&line);
            total += render::write_fragments(out, line, options)?;
        }
    } else {
        for text in &options.texts {
            total += render::write_fragments(out, text, options)?;
        }
    }
    debug!(total, "done");
    Ok(total)
}
