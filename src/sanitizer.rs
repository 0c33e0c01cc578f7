use crate::errors::ConfigurationError;
use crate::lexicon::Lexicon;
use crate::matcher::{is_filler, CompiledMatcher, MatcherMode};
use crate::table::SubstitutionTable;
use crate::trim_whitespace;
use crate::wordlist::{BundledWordList, WordList};
use lazy_static::lazy_static;
use log::{debug, trace};
use std::fmt;

lazy_static! {
    static ref DEFAULT: Sanitizer = Sanitizer::new(
        Lexicon::default(),
        SubstitutionTable::default(),
        Box::new(BundledWordList),
    )
    .expect("bundled configuration is valid");
}

/// The moderation engine: per-term compiled matchers plus the exact-word
/// safety net, applied as one pure pipeline.
///
/// Immutable once built; share freely across threads. The crate-level
/// [`sanitize`] function and the [`SanitizeStr`] trait use a process-wide
/// instance built from the bundled configuration.
pub struct Sanitizer {
    matchers: Vec<CompiledMatcher>,
    word_list: Box<dyn WordList>,
    table: SubstitutionTable,
    mask: char,
}

impl fmt::Debug for Sanitizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sanitizer")
            .field("matchers", &self.matchers.len())
            .field("mask", &self.mask)
            .finish_non_exhaustive()
    }
}

impl Sanitizer {
    /// Compiles a sanitizer from configuration.
    ///
    /// Two matchers are compiled per term (obfuscated-strict, then shorthand)
    /// and applied in lexicon order. The word list is the secondary pass and
    /// still applies when the lexicon is empty.
    pub fn new(
        lexicon: Lexicon,
        table: SubstitutionTable,
        word_list: Box<dyn WordList>,
    ) -> Result<Self, ConfigurationError> {
        let mut matchers = Vec::with_capacity(lexicon.len() * 2);
        for term in lexicon.terms() {
            matchers.push(CompiledMatcher::compile(term, &table, MatcherMode::Obfuscated));
            matchers.push(CompiledMatcher::compile(term, &table, MatcherMode::Shorthand));
        }
        debug!(
            "compiled {} matchers from {} lexicon terms",
            matchers.len(),
            lexicon.len()
        );
        Self {
            matchers,
            word_list,
            table,
            mask: '*',
        }
        .with_mask_char('*')
    }

    /// Replaces the default `'*'` mask character.
    ///
    /// Rejects alphanumeric characters and members of any substitution class,
    /// whether or not a lexicon term uses that class: either would let a
    /// masked span be re-interpreted as a banned term.
    pub fn with_mask_char(mut self, mask: char) -> Result<Self, ConfigurationError> {
        if mask.is_alphanumeric() || self.table.any_class_contains(mask) {
            return Err(ConfigurationError::UnusableMask(mask));
        }
        self.mask = mask;
        Ok(self)
    }

    /// Sanitizes `text`: trims surrounding whitespace, masks every tolerated
    /// rendition of a lexicon term, then masks exact word-list tokens.
    ///
    /// Total and deterministic; never fails on input content.
    pub fn sanitize(&self, text: &str) -> String {
        self.sanitize_and_count(text).0
    }

    /// Like [`Self::sanitize`], also reporting how many spans were masked.
    pub fn sanitize_and_count(&self, text: &str) -> (String, usize) {
        let mut buf: Vec<char> = trim_whitespace(text).chars().collect();
        let mut total = 0;
        // Masking can merge what used to be distinct words (the mask character
        // is filler), so the pass sequence repeats until a fixed point. Each
        // productive pass masks at least one alphanumeric character, so this
        // terminates.
        loop {
            let mut masked = 0;
            for matcher in &self.matchers {
                masked += Self::apply_matcher(&mut buf, matcher, self.mask);
            }
            masked += self.apply_word_list(&mut buf);
            total += masked;
            if masked == 0 {
                break;
            }
        }
        (buf.into_iter().collect(), total)
    }

    /// Scans the buffer left to right with one matcher, masking in place.
    /// Returns the number of committed matches.
    fn apply_matcher(buf: &mut [char], matcher: &CompiledMatcher, mask: char) -> usize {
        let mut count = 0;
        let mut i = 0;
        while i < buf.len() {
            if let Some(span) = matcher.try_match_at(buf, i) {
                let separate_before = span.start == 0 || is_filler(buf[span.start - 1]);
                let separate_after = span.end == buf.len() || is_filler(buf[span.end]);
                // A fully non-alphanumeric span (alnum == 0) masks nothing and
                // is not counted, or the fixed-point loop would spin; the
                // cursor falls through to the one-character advance so that
                // candidates starting inside the span are still scanned.
                if separate_before && separate_after && span.alnum > 0 {
                    for c in &mut buf[span.start..span.end] {
                        if c.is_alphanumeric() {
                            *c = mask;
                        }
                    }
                    trace!(
                        "masked {:?} ({:?}) over [{}, {}), {} characters",
                        matcher.term,
                        matcher.mode,
                        span.start,
                        span.end,
                        span.alnum
                    );
                    count += 1;
                    i = span.end;
                    continue;
                }
            }
            i += 1;
        }
        count
    }

    /// The secondary pass: masks whole tokens found in the word list,
    /// case-insensitively, with no obfuscation tolerance.
    fn apply_word_list(&self, buf: &mut [char]) -> usize {
        let mut count = 0;
        let mut i = 0;
        while i < buf.len() {
            if buf[i].is_alphanumeric() {
                let start = i;
                while i < buf.len() && buf[i].is_alphanumeric() {
                    i += 1;
                }
                let token: String = buf[start..i]
                    .iter()
                    .map(|c| c.to_ascii_lowercase())
                    .collect();
                if self.word_list.contains(&token) {
                    for c in &mut buf[start..i] {
                        *c = self.mask;
                    }
                    trace!("masked word-list token over [{start}, {i})");
                    count += 1;
                }
            } else {
                i += 1;
            }
        }
        count
    }
}

/// Sanitizes text with the process-wide sanitizer built from the bundled
/// lexicon, substitution table, and dictionary.
pub fn sanitize(text: &str) -> String {
    DEFAULT.sanitize(text)
}

/// SanitizeStr makes it easy to clean a `String` or `&str` by calling
/// `.sanitize()`, using the process-wide sanitizer.
pub trait SanitizeStr: Sized {
    /// Returns a newly allocated string with banned terms masked.
    fn sanitize(self) -> String;

    /// Returns `true` if at least one span would be masked.
    fn is_banned(self) -> bool;
}

impl SanitizeStr for &str {
    fn sanitize(self) -> String {
        DEFAULT.sanitize(self)
    }

    fn is_banned(self) -> bool {
        DEFAULT.sanitize_and_count(self).1 > 0
    }
}

impl SanitizeStr for String {
    fn sanitize(self) -> String {
        DEFAULT.sanitize(&self)
    }

    fn is_banned(self) -> bool {
        DEFAULT.sanitize_and_count(&self).1 > 0
    }
}
