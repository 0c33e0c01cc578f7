use crate::lexicon::BannedTerm;
use crate::table::{SubstitutionTable, CLASS_CAPACITY};
use arrayvec::ArrayVec;

/// Which obfuscation strategy a compiled matcher tolerates.
///
/// The two modes trade false-positive rate differently, so they are kept as
/// separate instantiations of the same builder rather than one automaton that
/// permits both dropped vowels and free filler at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MatcherMode {
    /// Every letter present, possibly disguised, possibly separated by filler.
    Obfuscated,
    /// Like `Obfuscated`, but vowels may be elided entirely.
    Shorthand,
}

/// One letter position of a compiled matcher.
#[derive(Clone, Debug)]
struct Position {
    /// Characters accepted at this position.
    class: ArrayVec<char, CLASS_CAPACITY>,
    /// Whether the position may be skipped (vowels in shorthand mode).
    optional: bool,
}

/// One banned term compiled against a substitution table for one mode.
///
/// Built once at `Sanitizer` construction and read-only thereafter.
#[derive(Clone, Debug)]
pub(crate) struct CompiledMatcher {
    positions: Vec<Position>,
    pub(crate) term: String,
    pub(crate) mode: MatcherMode,
}

/// A committed match: a half-open char-index range in the buffer, plus how
/// many alphanumeric characters it consumed (the eventual mask size).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct MatchSpan {
    pub start: usize,
    pub end: usize,
    pub alnum: usize,
}

/// Filler may appear between the letters of an obfuscated rendition:
/// anything that is not a letter or digit, underscore included.
pub(crate) fn is_filler(c: char) -> bool {
    !c.is_alphanumeric()
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

impl CompiledMatcher {
    pub fn compile(term: &BannedTerm, table: &SubstitutionTable, mode: MatcherMode) -> Self {
        let positions = term
            .as_str()
            .chars()
            .map(|letter| Position {
                class: table.class_of(letter).iter().copied().collect(),
                optional: mode == MatcherMode::Shorthand && is_vowel(letter),
            })
            .collect();
        Self {
            positions,
            term: term.as_str().to_owned(),
            mode,
        }
    }

    /// Greedy attempt anchored at `start`.
    ///
    /// The first consumed character must sit exactly at `start`; filler is
    /// only skipped between consumed letters. Class membership is checked
    /// before the filler skip, so a symbolic substitute like `(` for `c` or
    /// `$` for `s` is consumed as a letter, never swallowed as filler.
    /// Optional positions that fail consume nothing. A candidate that
    /// consumes no characters at all is not a match.
    ///
    /// Word-boundary anchoring is the caller's responsibility, since it
    /// depends on the surrounding buffer rather than the matcher.
    pub fn try_match_at(&self, buf: &[char], start: usize) -> Option<MatchSpan> {
        let mut at = start;
        let mut alnum = 0usize;
        let mut consumed = 0usize;
        for position in &self.positions {
            let mut probe = at;
            let hit = loop {
                if probe >= buf.len() {
                    break false;
                }
                if position.class.contains(&buf[probe].to_ascii_lowercase()) {
                    break true;
                }
                if consumed > 0 && is_filler(buf[probe]) {
                    probe += 1;
                } else {
                    break false;
                }
            };
            if hit {
                alnum += buf[probe].is_alphanumeric() as usize;
                consumed += 1;
                at = probe + 1;
            } else if !position.optional {
                return None;
            }
        }
        (consumed > 0).then_some(MatchSpan {
            start,
            end: at,
            alnum,
        })
    }
}
