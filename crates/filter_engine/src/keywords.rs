use regex::{RegexSet, RegexSetBuilder};
use thiserror::Error;

/// Production keyword patterns, matched case-insensitively.
pub const DEFAULT_PATTERNS: &[&str] = &[
    "trump",
    r"donald\s+trump",
    r"donald\s+j\.?\s+trump",
    "maga",
];

#[derive(Debug, Error)]
pub enum KeywordError {
    #[error("invalid keyword pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Immutable set of case-insensitive keyword patterns, compiled once.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    patterns: RegexSet,
}

impl KeywordSet {
    pub fn new<I, S>(patterns: I) -> Result<Self, KeywordError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = RegexSetBuilder::new(patterns)
            .case_insensitive(true)
            .build()?;
        Ok(Self { patterns })
    }

    /// The fixed production pattern list.
    pub fn standard() -> Result<Self, KeywordError> {
        Self::new(DEFAULT_PATTERNS)
    }

    /// True if any pattern matches. Empty text never matches.
    pub fn matches(&self, text: &str) -> bool {
        !text.is_empty() && self.patterns.is_match(text)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::KeywordSet;

    #[test]
    fn matching_is_case_insensitive() {
        let keywords = KeywordSet::standard().unwrap();
        assert!(keywords.matches("TRUMP announces rally"));
        assert!(keywords.matches("Donald  J. Trump spoke"));
        assert!(keywords.matches("the maga movement"));
    }

    #[test]
    fn non_matching_text_is_false() {
        let keywords = KeywordSet::standard().unwrap();
        assert!(!keywords.matches("Local weather update"));
    }

    #[test]
    fn empty_text_is_false_not_an_error() {
        let keywords = KeywordSet::standard().unwrap();
        assert!(!keywords.matches(""));
    }

    #[test]
    fn custom_patterns_are_accepted() {
        let keywords = KeywordSet::new(["breaking", r"live\s+blog"]).unwrap();
        assert_eq!(keywords.len(), 2);
        assert!(!keywords.is_empty());
        assert!(keywords.matches("Live  Blog: election night"));
        assert!(!keywords.matches("sports roundup"));
    }

    #[test]
    fn empty_pattern_list_matches_nothing() {
        let keywords = KeywordSet::new(Vec::<&str>::new()).unwrap();
        assert!(keywords.is_empty());
        assert_eq!(keywords.len(), 0);
        assert!(!keywords.matches("any text at all"));
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        assert!(KeywordSet::new(["(unclosed"]).is_err());
    }
}
