//! Writing fragments of one input to the output stream.

use std::io::{self, Write};

use quoted_tokenizer::{unquote, Tokenizer};
use tracing::{debug, trace};

use crate::options::Options;

const EMPTY_MARKER: &str = "<empty>";

/// Split `text` and write its fragments. Returns the fragment count.
pub fn write_fragments<W: Write>(out: &mut W, text: &str, options: &Options) -> io::Result<usize> {
    let mut tokenizer = Tokenizer::new(text, options.delimiters.as_str(), options.escape);
    let mut count = 0;

    while tokenizer.has_more() {
        let span = tokenizer.next_fragment_span();
        let fragment = &text[span.clone()];
        trace!(?span, fragment, "fragment");

        let shown = if options.unquote {
            unquote(fragment, options.escape)
        } else {
            fragment.to_string()
        };
        let shown = if shown.is_empty() && options.show_empty {
            EMPTY_MARKER
        } else {
            shown.as_str()
        };

        match &options.separator {
            Some(separator) if count > 0 => write!(out, "{separator}{shown}")?,
            Some(_) => write!(out, "{shown}")?,
            None => writeln!(out, "{shown}")?,
        }
        count += 1;
    }

    if options.separator.is_some() && count > 0 {
        writeln!(out)?;
    }
    debug!(len = text.len(), count, "split input");
    Ok(count)
}
