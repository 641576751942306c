//! Synsets and the typed pointers between them.

use serde::{Deserialize, Serialize};

use crate::graph::vocabulary::{PartOfSpeech, Relation};

/// A typed, directed edge to another synset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pointer {
    /// Relation carried by this edge.
    pub relation: Relation,
    /// Id of the synset pointed to.
    pub target: String,
}

impl Pointer {
    pub fn new<S: Into<String>>(relation: Relation, target: S) -> Self {
        Pointer {
            relation,
            target: target.into(),
        }
    }
}

/// A set of synonymous words sharing one meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synset {
    /// Unique id, stable for the lifetime of the graph.
    pub id: String,
    /// Part of speech of every word in the set.
    pub pos: PartOfSpeech,
    /// Synonymous surface forms, never empty once the graph is sealed.
    pub words: Vec<String>,
    /// Short description of the meaning.
    pub gloss: String,
    /// Outgoing relations, in dataset order.
    pub pointers: Vec<Pointer>,
}

impl Synset {
    /// Create a synset without pointers.
    pub fn new<S, W, G>(id: S, pos: PartOfSpeech, words: W, gloss: G) -> Self
    where
        S: Into<String>,
        W: IntoIterator,
        W::Item: Into<String>,
        G: Into<String>,
    {
        Synset {
            id: id.into(),
            pos,
            words: words.into_iter().map(Into::into).collect(),
            gloss: gloss.into(),
            pointers: Vec::new(),
        }
    }

    /// Add an outgoing pointer.
    pub fn with_pointer<S: Into<String>>(mut self, relation: Relation, target: S) -> Self {
        self.pointers.push(Pointer::new(relation, target));
        self
    }

    /// The word list joined the way relation labels quote it.
    pub fn joined_words(&self) -> String {
        self.words.join(", ")
    }

    /// Case-insensitive exact membership test.
    pub fn contains_word(&self, word: &str) -> bool {
        let needle = word.to_lowercase();
        self.words.iter().any(|w| w.to_lowercase() == needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synset_builder() {
        let synset = Synset::new("n1", PartOfSpeech::Noun, ["praise", "kudos"], "an expression of approval")
            .with_pointer(Relation::Hypernym, "n2");

        assert_eq!(synset.joined_words(), "praise, kudos");
        assert_eq!(synset.pointers, vec![Pointer::new(Relation::Hypernym, "n2")]);
    }

    #[test]
    fn test_contains_word_ignores_case() {
        let synset = Synset::new("n1", PartOfSpeech::Noun, ["Shark"], "a fish");
        assert!(synset.contains_word("SHARK"));
        assert!(synset.contains_word("shark"));
        assert!(!synset.contains_word("sharks"));
    }
}
