//! leetmask masks occurrences of a banned-term lexicon in user-submitted
//! text, even when the author disguises them with character substitution
//! ("leetspeak"), inserted separators, or dropped vowels.
//!
//! Masking replaces each alphanumeric character of a detected span with `'*'`
//! and leaves everything else in place, so word and line boundaries outside
//! matches survive exactly. Sanitizing is a pure function: same input and
//! configuration, same output, and it never fails on input content.
//!
//! ```
//! use leetmask::SanitizeStr;
//!
//! assert_eq!("sh1t happens".sanitize(), "**** happens");
//! assert_eq!("that is fck ridiculous".sanitize(), "that is *** ridiculous");
//! assert_eq!("This product is amazing".sanitize(), "This product is amazing");
//! assert!(!"great value for money".is_banned());
//! ```
//!
//! The lexicon, substitution table, and secondary dictionary are
//! configuration: [`Sanitizer::new`] builds an engine from externally
//! supplied copies, validated with [`ConfigurationError`] at startup. The
//! crate-level [`sanitize`] function and [`SanitizeStr`] trait use a
//! process-wide instance built once from the bundled defaults.

use rustc_hash::FxHashSet;

mod errors;
mod lexicon;
mod matcher;
mod sanitizer;
mod table;
mod wordlist;

pub use crate::errors::ConfigurationError;
pub use crate::lexicon::{BannedTerm, Lexicon};
pub use crate::sanitizer::{sanitize, SanitizeStr, Sanitizer};
pub use crate::table::SubstitutionTable;
pub use crate::wordlist::{BundledWordList, CustomWordList, WordList};

pub(crate) type Set<K> = FxHashSet<K>;

/// Trims whitespace characters from both ends of a string, according to the
/// definition of `crate::is_whitespace`.
pub fn trim_whitespace(s: &str) -> &str {
    s.trim_matches(is_whitespace)
}

/// Returns true iff the character is effectively whitespace. The definition is
/// broader than Unicode's, because it includes control characters and a few
/// additional blank characters.
pub fn is_whitespace(c: char) -> bool {
    // NOTE: The following characters are not detected by standard means but show up as blank.
    // https://www.compart.com/en/unicode/U+2800
    // https://www.compart.com/en/unicode/U+3164
    c.is_whitespace() || c.is_control() || c == '\u{2800}' || c == '\u{3164}'
}

use doc_comment::doctest;
doctest!("../README.md");
