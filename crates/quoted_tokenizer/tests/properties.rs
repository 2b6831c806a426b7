//! Property-based tests for the tokenizer.
//!
//! A straightforward char-vector model of the scanning rules serves as the
//! reference; the real tokenizer (both the `memchr` path and the scalar
//! path) must agree with it on arbitrary input.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::disallowed_types,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use quoted_tokenizer::{quote, unquote, Tokenizer};

// -- Reference Model --

/// Char-by-char model of the scanning rules, kept deliberately naive.
fn model(text: &str, delimiters: &[char], escape: char) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut index = 0;
    while index < chars.len() && delimiters.contains(&chars[index]) {
        index += 1;
    }

    let mut fragments = Vec::new();
    while index < chars.len() {
        let mut fragment = String::new();
        while index < chars.len() {
            let c = chars[index];
            if c == escape {
                fragment.push(c);
                index += 1;
                if index < chars.len() {
                    fragment.push(chars[index]);
                    index += 1;
                }
            } else if delimiters.contains(&c) {
                index += 1;
                break;
            } else {
                fragment.push(c);
                index += 1;
            }
        }
        fragments.push(fragment);
    }
    fragments
}

// -- Strategies --

/// Text over a small alphabet so delimiters and escapes collide often.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            4 => Just('a'),
            2 => Just('é'),
            3 => Just(','),
            2 => Just(';'),
            2 => Just('\\'),
            1 => Just('🦀'),
        ],
        0..64,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// Text with no escape character in it.
fn unescaped_text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![3 => Just('a'), 1 => Just('é'), 2 => Just(',')],
        0..64,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn collect(text: &str, delimiters: &str, escape: char) -> Vec<String> {
    Tokenizer::new(text, delimiters, escape)
        .map(|fragment| fragment.to_string())
        .collect()
}

proptest! {
    #[test]
    fn matches_model_on_memchr_path(text in text_strategy()) {
        prop_assert_eq!(collect(&text, ",;", '\\'), model(&text, &[',', ';'], '\\'));
    }

    #[test]
    fn matches_model_on_scalar_path(text in text_strategy()) {
        // `€` never occurs in the text; it only forces the scalar scan.
        prop_assert_eq!(collect(&text, ",;€", '\\'), model(&text, &[',', ';', '€'], '\\'));
    }

    #[test]
    fn matches_model_with_multibyte_delimiter(text in text_strategy()) {
        prop_assert_eq!(collect(&text, "é", '\\'), model(&text, &['é'], '\\'));
    }

    #[test]
    fn matches_model_when_escape_is_a_delimiter(text in text_strategy()) {
        prop_assert_eq!(collect(&text, ",\\", '\\'), model(&text, &[',', '\\'], '\\'));
    }

    #[test]
    fn join_reconstructs_unescaped_text(text in unescaped_text_strategy()) {
        let fragments = collect(&text, ",", '\\');
        let trimmed = text.trim_start_matches(',');
        let expected = trimmed.strip_suffix(',').unwrap_or(trimmed);
        prop_assert_eq!(fragments.join(","), expected);
    }

    #[test]
    fn cursor_is_monotonic_and_bounded(text in text_strategy()) {
        let mut tokenizer = Tokenizer::new(&text, ",;", '\\');
        let mut last = tokenizer.position();
        prop_assert!(last <= text.len());
        while tokenizer.has_more() {
            tokenizer.next_fragment();
            let pos = tokenizer.position();
            prop_assert!(pos > last, "cursor did not advance: {} -> {}", last, pos);
            prop_assert!(pos <= text.len());
            prop_assert!(text.is_char_boundary(pos));
            last = pos;
        }
        prop_assert_eq!(last, text.len());
    }

    #[test]
    fn has_more_is_idempotent(text in text_strategy()) {
        let mut tokenizer = Tokenizer::new(&text, ",;", '\\');
        loop {
            let first = tokenizer.has_more();
            prop_assert_eq!(first, tokenizer.has_more());
            prop_assert_eq!(first, tokenizer.has_more());
            if !first {
                break;
            }
            tokenizer.next_fragment();
        }
    }

    #[test]
    fn escaped_delimiter_never_splits(
        prefix in unescaped_text_strategy(),
        suffix in text_strategy(),
    ) {
        let text = format!("{prefix}\\,{suffix}");
        let at = prefix.len();
        let mut tokenizer = Tokenizer::new(&text, ",", '\\');
        let mut covered = false;
        while tokenizer.has_more() {
            let span = tokenizer.next_fragment_span();
            if span.start <= at && at + 2 <= span.end {
                covered = true;
            }
        }
        prop_assert!(covered, "escape pair at {} split in {:?}", at, text);
    }

    #[test]
    fn unescaped_fragments_hold_no_delimiters(text in unescaped_text_strategy()) {
        let mut tokenizer = Tokenizer::new(&text, ",", '\\');
        while tokenizer.has_more() {
            let span = tokenizer.next_fragment_span();
            prop_assert!(span.end <= tokenizer.position());
            prop_assert!(!text[span].contains(','));
        }
    }

    #[test]
    fn quote_then_unquote_round_trips(
        parts in prop::collection::vec(text_strategy().prop_filter("non-empty", |s| !s.is_empty()), 1..8),
    ) {
        let joined = parts
            .iter()
            .map(|part| quote(part, ",;", '\\'))
            .collect::<Vec<_>>()
            .join(";");
        let recovered: Vec<String> = Tokenizer::new(&joined, ",;", '\\')
            .map(|fragment| unquote(fragment, '\\'))
            .collect();
        prop_assert_eq!(recovered, parts);
    }
}
