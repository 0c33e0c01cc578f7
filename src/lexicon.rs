use crate::errors::ConfigurationError;
use lazy_static::lazy_static;

lazy_static! {
    static ref DEFAULT_LEXICON: Lexicon = Lexicon::new(
        include_str!("lexicon.txt")
            .lines()
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
    )
    .expect("bundled lexicon.txt is valid");
}

/// One banned root term: lowercase ASCII letters, no separators.
///
/// Identity is the text itself. Obfuscated and abbreviated renditions of the
/// root are derived by the pattern compiler, not listed here.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String"))]
pub struct BannedTerm(String);

impl TryFrom<String> for BannedTerm {
    type Error = ConfigurationError;

    /// Same validation as [`BannedTerm::new`]; deserialized terms go through
    /// this path too.
    fn try_from(term: String) -> Result<Self, Self::Error> {
        Self::new(&term)
    }
}

impl BannedTerm {
    /// Validates and wraps a root term.
    pub fn new(term: &str) -> Result<Self, ConfigurationError> {
        if term.is_empty() {
            return Err(ConfigurationError::EmptyTerm);
        }
        if let Some(found) = term.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(ConfigurationError::InvalidTerm {
                term: term.to_owned(),
                found,
            });
        }
        Ok(Self(term.to_owned()))
    }

    /// The term's text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The ordered set of banned terms.
///
/// Order is the masking order: when one term's rendition overlaps another's,
/// the term listed earlier claims the span. This is deterministic but
/// order-dependent, so lexicons should list longer terms before the roots
/// they contain.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lexicon(Vec<BannedTerm>);

impl Default for Lexicon {
    /// The lexicon compiled into the crate.
    fn default() -> Self {
        DEFAULT_LEXICON.clone()
    }
}

impl Lexicon {
    /// Validates an ordered list of root terms.
    pub fn new<'a, I>(terms: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        terms
            .into_iter()
            .map(BannedTerm::new)
            .collect::<Result<_, _>>()
            .map(Self)
    }

    /// An empty lexicon; only the secondary word-list pass applies.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// The terms, in masking order.
    pub fn terms(&self) -> &[BannedTerm] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_lexicon_is_valid_and_ordered() {
        let lexicon = Lexicon::default();
        assert!(!lexicon.is_empty());
        // Longer terms precede the roots they contain.
        let position = |t: &str| {
            lexicon
                .terms()
                .iter()
                .position(|term| term.as_str() == t)
                .unwrap()
        };
        assert!(position("asshole") < position("ass"));
    }

    #[test]
    fn empty_term_is_rejected() {
        assert_eq!(BannedTerm::new("").unwrap_err(), ConfigurationError::EmptyTerm);
        assert_eq!(
            Lexicon::new(["fine", ""]).unwrap_err(),
            ConfigurationError::EmptyTerm
        );
    }

    #[test]
    fn non_letter_term_is_rejected() {
        let err = BannedTerm::new("sh1t").unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::InvalidTerm {
                term: "sh1t".to_owned(),
                found: '1',
            }
        );
        assert!(BannedTerm::new("Shout").is_err());
        assert!(BannedTerm::new("two words").is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_enforces_term_validation() {
        let term: BannedTerm = serde_json::from_str("\"fuck\"").unwrap();
        assert_eq!(term.as_str(), "fuck");
        assert!(serde_json::from_str::<BannedTerm>("\"\"").is_err());
        assert!(serde_json::from_str::<BannedTerm>("\"Sh1t\"").is_err());
    }
}
