//! Admission rule applied to every candidate word before it enters a result.

use crate::error::Result;
use crate::search::pattern::CharacterPattern;
use crate::search::request::SearchRequest;

/// Length and pattern predicate for candidate words.
///
/// * exact length set: the word must have that length (and still agree with
///   the pattern, which validation keeps no longer than the length);
/// * only a pattern set: the word must be at least as long as the pattern
///   and agree with it position by position;
/// * neither set: every word is admitted.
///
/// A pattern made only of wildcards counts as no pattern.
#[derive(Debug, Clone, Default)]
pub struct WordFilter {
    length: Option<usize>,
    pattern: Option<CharacterPattern>,
}

impl WordFilter {
    /// Build a filter. `Some(0)` as length means unset.
    pub fn new(length: Option<usize>, pattern: Option<&str>) -> Result<Self> {
        let pattern = match pattern {
            Some(text) => Some(CharacterPattern::new(text)?),
            None => None,
        }
        .filter(|pattern| !pattern.is_unconstrained());

        Ok(WordFilter {
            length: length.filter(|&length| length > 0),
            pattern,
        })
    }

    /// Build the filter a request asks for.
    pub fn from_request(request: &SearchRequest) -> Result<Self> {
        WordFilter::new(request.length_filter(), request.pattern.as_deref())
    }

    /// A filter that admits everything.
    pub fn unrestricted() -> Self {
        WordFilter::default()
    }

    /// The active exact length, if any.
    pub fn exact_length(&self) -> Option<usize> {
        self.length
    }

    pub fn pattern(&self) -> Option<&CharacterPattern> {
        self.pattern.as_ref()
    }

    /// Decide whether `word` may enter the result set.
    pub fn admits(&self, word: &str) -> bool {
        let word_len = word.chars().count();

        match (self.length, &self.pattern) {
            (Some(length), pattern) => {
                word_len == length && pattern.as_ref().is_none_or(|p| p.matches(word))
            }
            (None, Some(pattern)) => word_len >= pattern.len() && pattern.matches(word),
            (None, None) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrestricted_admits_everything() {
        let filter = WordFilter::unrestricted();
        assert!(filter.admits(""));
        assert!(filter.admits("hammerhead_shark"));
    }

    #[test]
    fn test_exact_length() {
        let filter = WordFilter::new(Some(4), None).unwrap();
        assert!(filter.admits("fish"));
        assert!(!filter.admits("shark"));
        assert!(!filter.admits("eel"));
    }

    #[test]
    fn test_pattern_requires_minimum_length() {
        let filter = WordFilter::new(None, Some("_a_c")).unwrap();
        assert!(filter.admits("talc"));
        assert!(filter.admits("sauce"));
        assert!(!filter.admits("tac"));
        assert!(!filter.admits("tilc"));
    }

    #[test]
    fn test_length_and_pattern_combined() {
        let filter = WordFilter::new(Some(5), Some("s_a")).unwrap();
        assert!(filter.admits("shark"));
        assert!(!filter.admits("stork"));
        assert!(!filter.admits("shard_"));
    }

    #[test]
    fn test_wildcard_only_pattern_is_ignored() {
        let filter = WordFilter::new(None, Some("____")).unwrap();
        assert!(filter.pattern().is_none());
        assert!(filter.admits("eel"));

        let filter = WordFilter::new(Some(0), Some("")).unwrap();
        assert_eq!(filter.exact_length(), None);
        assert!(filter.admits("anything"));
    }
}
