//! Related-word search requests and their validation.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordweaveError};

/// Smallest supported recursion depth (root synsets only).
pub const MIN_DEPTH: usize = 1;

/// Largest supported recursion depth.
pub const MAX_DEPTH: usize = 5;

/// A single "which words are related to W" query.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    /// Word to start from, matched case-insensitively.
    pub word: String,

    /// Exact word length to keep. `None` and `Some(0)` both mean unset.
    pub length: Option<usize>,

    /// Recursion depth. If None, the engine default applies.
    pub depth: Option<usize>,

    /// Positional character pattern, `_` matching any character.
    pub pattern: Option<String>,

    /// Keep one entry per sense and path instead of one per word.
    pub verbose: bool,
}

impl SearchRequest {
    /// Create a request for `word` with every option unset.
    pub fn new<S: Into<String>>(word: S) -> Self {
        Self {
            word: word.into(),
            ..Default::default()
        }
    }

    /// Keep only words of exactly this length.
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    /// Set the recursion depth.
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Keep only words matching the positional pattern.
    pub fn with_pattern<S: Into<String>>(mut self, pattern: S) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Ask for verbose entries.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// The exact length filter, if one is active.
    pub fn length_filter(&self) -> Option<usize> {
        self.length.filter(|&length| length > 0)
    }

    /// The recursion depth this request runs with.
    pub fn effective_depth(&self, default_depth: usize) -> usize {
        self.depth.unwrap_or(default_depth)
    }

    /// Reject caller input the engine must not run with.
    pub fn validate(&self, default_depth: usize) -> Result<()> {
        let depth = self.effective_depth(default_depth);
        if !(MIN_DEPTH..=MAX_DEPTH).contains(&depth) {
            return Err(WordweaveError::InvalidRecurseDepth {
                depth,
                min: MIN_DEPTH,
                max: MAX_DEPTH,
            });
        }

        if let (Some(pattern), Some(length)) = (self.pattern.as_deref(), self.length_filter()) {
            let pattern_len = pattern.chars().count();
            if pattern_len > length {
                return Err(WordweaveError::InvalidPatternLength {
                    pattern_len,
                    length,
                });
            }
        }

        Ok(())
    }
}
