//! Mapping from normalized word to the synsets containing it.

use ahash::AHashMap;

use crate::graph::LexicalGraph;

/// Case-insensitive word → synset positions index.
///
/// Positions are kept in graph order and appear at most once per word, even
/// if a synset lists the same word twice in different casing.
#[derive(Debug, Clone, Default)]
pub struct WordIndex {
    entries: AHashMap<String, Vec<usize>>,
}

impl WordIndex {
    /// Build the index with a single pass over the graph.
    pub fn build(graph: &LexicalGraph) -> Self {
        let mut entries: AHashMap<String, Vec<usize>> = AHashMap::new();

        for (position, synset) in graph.synsets().iter().enumerate() {
            for word in &synset.words {
                let positions = entries.entry(normalize(word)).or_default();
                if positions.last() != Some(&position) {
                    positions.push(position);
                }
            }
        }

        WordIndex { entries }
    }

    /// Positions of every synset containing `word`, in graph order.
    pub fn find_synsets_containing(&self, word: &str) -> &[usize] {
        self.entries
            .get(&normalize(word))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(&normalize(word))
    }

    /// Number of distinct normalized words.
    pub fn word_count(&self) -> usize {
        self.entries.len()
    }
}

fn normalize(word: &str) -> String {
    word.to_lowercase()
}
