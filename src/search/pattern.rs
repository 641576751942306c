//! Positional character patterns such as `_a_c`.

use std::sync::Arc;

use regex::{Regex, RegexBuilder};

use crate::error::{Result, WordweaveError};

/// Matches any single character.
pub const WILDCARD: char = '_';

/// A positional pattern: position `i` either holds a literal character the
/// word must carry at `i` (case-insensitively) or the `_` wildcard.
///
/// A word matches when it is at least as long as the pattern and agrees with
/// it at every position; characters past the pattern are unconstrained.
#[derive(Debug, Clone)]
pub struct CharacterPattern {
    /// The pattern as given.
    pattern: String,
    /// Pattern length in characters.
    len: usize,
    /// The compiled regex for matching.
    regex: Arc<Regex>,
}

impl CharacterPattern {
    /// Compile a pattern.
    pub fn new<S: Into<String>>(pattern: S) -> Result<Self> {
        let pattern = pattern.into();
        let regex = Self::compile_pattern(&pattern)?;

        Ok(CharacterPattern {
            len: pattern.chars().count(),
            pattern,
            regex: Arc::new(regex),
        })
    }

    /// Get the pattern text.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Pattern length in characters.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True when no position constrains the word.
    pub fn is_unconstrained(&self) -> bool {
        self.pattern.chars().all(|c| c == WILDCARD)
    }

    /// Compile a pattern into an anchored prefix regex, one atom per
    /// position: `_a_c` becomes `^.a.c`.
    fn compile_pattern(pattern: &str) -> Result<Regex> {
        let mut regex_pattern = String::with_capacity(pattern.len() + 1);
        regex_pattern.push('^');

        for c in pattern.chars() {
            if c == WILDCARD {
                regex_pattern.push('.');
            } else {
                regex_pattern.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])));
            }
        }

        RegexBuilder::new(&regex_pattern)
            .case_insensitive(true)
            .dot_matches_new_line(true)
            .build()
            .map_err(|e| WordweaveError::other(format!("Invalid character pattern: {e}")))
    }

    /// Check if a word matches the pattern.
    pub fn matches(&self, word: &str) -> bool {
        self.regex.is_match(word)
    }
}
