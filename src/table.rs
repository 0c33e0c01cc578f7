use crate::errors::ConfigurationError;
use arrayvec::ArrayVec;
use itertools::Itertools;
use lazy_static::lazy_static;
use std::iter;

/// Maximum size of one substitution class, the letter itself included.
pub(crate) const CLASS_CAPACITY: usize = 12;

lazy_static! {
    static ref DEFAULT_TABLE: SubstitutionTable = SubstitutionTable::from_pairs(
        include_str!("substitutions.csv")
            .lines()
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| {
                let comma = line.find(',').expect("bundled substitutions.csv is well-formed");
                (
                    line[..comma].chars().next().expect("bundled substitutions.csv is well-formed"),
                    line[comma + 1..].chars().filter(|c| *c != ','),
                )
            })
    )
    .expect("bundled substitutions.csv is valid");
}

/// Per-letter classes of characters that authors substitute for that letter,
/// e.g. `a` -> `{a, @, 4}`.
///
/// Every lowercase ASCII letter has a class; letters without configured
/// alternates match only themselves. Built once, immutable thereafter.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubstitutionTable {
    classes: [ArrayVec<char, CLASS_CAPACITY>; 26],
}

impl SubstitutionTable {
    fn index(letter: char) -> Option<usize> {
        letter
            .is_ascii_lowercase()
            .then(|| letter as usize - 'a' as usize)
    }

    /// The identity table: every letter matches only itself.
    fn identity() -> Self {
        let mut letter = b'a';
        Self {
            classes: [(); 26].map(|_| {
                let mut class = ArrayVec::new();
                class.push(letter as char);
                letter += 1;
                class
            }),
        }
    }

    /// Builds a table from `(letter, alternates)` pairs.
    ///
    /// The letter itself is always the first member of its class, whether or
    /// not it was listed among the alternates. Alternates are folded to ASCII
    /// lowercase and deduplicated, preserving first-seen order.
    pub fn from_pairs<I, A>(pairs: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (char, A)>,
        A: IntoIterator<Item = char>,
    {
        let mut table = Self::identity();
        for (letter, alternates) in pairs {
            let idx = Self::index(letter).ok_or(ConfigurationError::InvalidClassKey(letter))?;
            let class = &mut table.classes[idx];
            class.clear();
            for c in iter::once(letter)
                .chain(alternates.into_iter().map(|c| c.to_ascii_lowercase()))
                .unique()
            {
                class
                    .try_push(c)
                    .map_err(|_| ConfigurationError::ClassTooLarge {
                        letter,
                        capacity: CLASS_CAPACITY,
                    })?;
            }
        }
        Ok(table)
    }

    /// The class of characters treated as equivalent to `letter`.
    ///
    /// `letter` is expected to be a lowercase ASCII letter (the only kind a
    /// [`BannedTerm`](crate::BannedTerm) can contain); anything else yields an
    /// empty class.
    pub fn class_of(&self, letter: char) -> &[char] {
        match Self::index(letter) {
            Some(idx) => &self.classes[idx],
            None => &[],
        }
    }

    /// Whether any class contains `c`. Used to reject mask characters that
    /// could be re-matched after masking.
    pub(crate) fn any_class_contains(&self, c: char) -> bool {
        self.classes.iter().any(|class| class.contains(&c))
    }
}

impl Default for SubstitutionTable {
    /// The table compiled into the crate.
    fn default() -> Self {
        DEFAULT_TABLE.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_table_covers_all_letters() {
        let table = SubstitutionTable::default();
        for letter in 'a'..='z' {
            let class = table.class_of(letter);
            assert_eq!(class.first(), Some(&letter), "class of {letter:?}");
        }
    }

    #[test]
    fn bundled_table_has_leet_alternates() {
        let table = SubstitutionTable::default();
        assert!(table.class_of('a').contains(&'@'));
        assert!(table.class_of('i').contains(&'1'));
        assert!(table.class_of('s').contains(&'$'));
        assert!(table.class_of('o').contains(&'0'));
    }

    #[test]
    fn unconfigured_letter_is_singleton() {
        let table = SubstitutionTable::from_pairs([('a', vec!['@'])]).unwrap();
        assert_eq!(table.class_of('q'), &['q']);
        assert_eq!(table.class_of('a'), &['a', '@']);
    }

    #[test]
    fn non_letter_yields_empty_class() {
        let table = SubstitutionTable::default();
        assert!(table.class_of('@').is_empty());
        assert!(table.class_of('A').is_empty());
    }

    #[test]
    fn alternates_are_deduplicated_in_order() {
        let table = SubstitutionTable::from_pairs([('e', vec!['3', 'e', '3', '&'])]).unwrap();
        assert_eq!(table.class_of('e'), &['e', '3', '&']);
    }

    #[test]
    fn invalid_key_is_rejected() {
        let err = SubstitutionTable::from_pairs([('4', vec!['a'])]).unwrap_err();
        assert_eq!(err, ConfigurationError::InvalidClassKey('4'));
        let err = SubstitutionTable::from_pairs([('A', vec!['4'])]).unwrap_err();
        assert_eq!(err, ConfigurationError::InvalidClassKey('A'));
    }

    #[test]
    fn oversized_class_is_rejected() {
        let alternates: Vec<char> = ('\u{2600}'..).take(CLASS_CAPACITY).collect();
        let err = SubstitutionTable::from_pairs([('a', alternates)]).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::ClassTooLarge {
                letter: 'a',
                capacity: CLASS_CAPACITY,
            }
        );
    }
}
