//! Diacritic removal over whole strings.
//!
//! Removal works per code point, not per grapheme: a letter followed by a
//! dagesh and a vowel is three independent `char`s, and only the marks that
//! match the predicate are dropped. Everything else, including non-Hebrew
//! text and control characters, is kept in its original order.

use crate::diacritic::is_diacritic_char;

/// Remove every niqqud and ta'am mark from `input`.
pub fn remove_diacritics(input: &str) -> String {
    remove_diacritics_with(input, is_diacritic_char)
}

/// Remove every character of `input` for which `predicate` returns `true`.
///
/// Pass [`is_niqqud_char`](crate::diacritic::is_niqqud_char) to strip vowels
/// and keep cantillation, or [`is_taam_char`](crate::diacritic::is_taam_char)
/// for the reverse.
pub fn remove_diacritics_with<P>(input: &str, predicate: P) -> String
where
    P: Fn(char) -> bool,
{
    let out: String = input.chars().filter(|&c| !predicate(c)).collect();
    tracing::trace!(
        input_bytes = input.len(),
        removed_bytes = input.len() - out.len(),
        "removed diacritics"
    );
    out
}
