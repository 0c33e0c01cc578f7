use thiserror::Error;

/// Failures surfaced while building a [`Sanitizer`](crate::Sanitizer) from
/// configuration.
///
/// These abort startup; once a `Sanitizer` exists, sanitizing is total and
/// never fails on input text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The lexicon contained an empty term.
    #[error("lexicon contains an empty term")]
    EmptyTerm,
    /// A lexicon term contained something other than a lowercase ASCII letter.
    #[error("lexicon term {term:?} contains invalid character {found:?}")]
    InvalidTerm {
        /// The offending term, verbatim.
        term: String,
        /// The first character that is not a lowercase ASCII letter.
        found: char,
    },
    /// A substitution class was keyed by something other than `a..=z`.
    #[error("substitution class key {0:?} is not a lowercase ASCII letter")]
    InvalidClassKey(char),
    /// A substitution class exceeded the fixed per-letter capacity.
    #[error("substitution class for {letter:?} exceeds {capacity} characters")]
    ClassTooLarge {
        /// The letter whose class overflowed.
        letter: char,
        /// The fixed capacity that was exceeded.
        capacity: usize,
    },
    /// The mask character is alphanumeric or appears in a substitution class,
    /// either of which would let masked output re-match on a later pass.
    #[error("mask character {0:?} is alphanumeric or appears in a substitution class")]
    UnusableMask(char),
}
