//! Ordering and collapsing of traversal output.

use ahash::AHashSet;

use crate::search::result::ResultEntry;

/// Turns the entries of one traversal into the final answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultAssembler {
    exact_length: bool,
    verbose: bool,
}

impl ResultAssembler {
    /// `exact_length` tells whether an exact-length filter was active.
    pub fn new(exact_length: bool, verbose: bool) -> Self {
        ResultAssembler {
            exact_length,
            verbose,
        }
    }

    /// Sort, then collapse to one entry per word unless verbose.
    ///
    /// Unlabelled entries come first. Without an exact-length filter ties
    /// are broken by word length and then alphabetically; with one, the
    /// length tier is skipped. Alphabetical order ignores case, falling back
    /// to ordinal order for words equal up to case. The sort is stable.
    pub fn assemble(&self, mut entries: Vec<ResultEntry>) -> Vec<ResultEntry> {
        let exact_length = self.exact_length;
        entries.sort_by_cached_key(|entry| {
            let length_tier = if exact_length { 0 } else { entry.word_len() };
            (
                entry.has_relation(),
                length_tier,
                entry.word.to_lowercase(),
                entry.word.clone(),
            )
        });

        if self.verbose {
            entries
        } else {
            collapse_words(entries)
        }
    }
}

/// Keep the first entry for each distinct word text.
pub fn collapse_words(entries: Vec<ResultEntry>) -> Vec<ResultEntry> {
    let mut seen = AHashSet::with_capacity(entries.len());
    entries
        .into_iter()
        .filter(|entry| seen.insert(entry.word.clone()))
        .collect()
}

/// The distinct word texts of a result, in result order.
pub fn distinct_words(entries: Vec<ResultEntry>) -> Vec<String> {
    collapse_words(entries)
        .into_iter()
        .map(|entry| entry.word)
        .collect()
}
