use crate::Set;
use lazy_static::lazy_static;

lazy_static! {
    static ref BUNDLED: Set<&'static str> = include_str!("dictionary.txt")
        .lines()
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();
}

/// Membership test backing the exact-word safety-net pass.
///
/// One implementation is chosen at initialization and never swapped at call
/// time: [`BundledWordList`] when no external dictionary is available, or
/// [`CustomWordList`] wrapping a larger list supplied by the host.
pub trait WordList: Send + Sync {
    /// Whether `word` (a whole token, already folded to lowercase) is banned.
    fn contains(&self, word: &str) -> bool;
}

/// The dictionary compiled into the crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct BundledWordList;

impl WordList for BundledWordList {
    fn contains(&self, word: &str) -> bool {
        BUNDLED.contains(word)
    }
}

/// An externally supplied dictionary, e.g. loaded by the host application at
/// startup. Words are folded to lowercase on construction.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomWordList(Set<String>);

impl CustomWordList {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            words
                .into_iter()
                .map(|word| word.as_ref().to_lowercase())
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl WordList for CustomWordList {
    fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_list_is_lowercase() {
        assert!(BundledWordList.contains("bullshit"));
        assert!(!BundledWordList.contains("BULLSHIT"));
        assert!(!BundledWordList.contains("pleasant"));
    }

    #[test]
    fn custom_list_folds_case_on_construction() {
        let list = CustomWordList::new(["Verboten", "banned"]);
        assert_eq!(list.len(), 2);
        assert!(list.contains("verboten"));
        assert!(list.contains("banned"));
        assert!(!list.contains("Verboten"));
    }
}
