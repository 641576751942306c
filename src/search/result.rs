//! Result entries produced by a related-word search.

use serde::{Deserialize, Serialize};

use crate::graph::PartOfSpeech;

/// One word of a search result together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEntry {
    /// The word as spelled in the dataset.
    pub word: String,
    /// Part of speech of the synset the word came from.
    pub word_type: PartOfSpeech,
    /// How the word relates to the synset linking to it. Empty for words
    /// of the synsets that contain the search word itself.
    pub relation: String,
    /// Meaning of the synset the word came from.
    pub gloss: String,
}

impl ResultEntry {
    pub fn has_relation(&self) -> bool {
        !self.relation.is_empty()
    }

    /// Word length in characters.
    pub fn word_len(&self) -> usize {
        self.word.chars().count()
    }

    /// The word with `_` shown as a space.
    pub fn display_word(&self) -> String {
        self.word.replace('_', " ")
    }

    /// Single-line description: word, type, relation in brackets, gloss.
    pub fn to_verbose_string(&self) -> String {
        let relation = if self.relation.is_empty() {
            String::new()
        } else {
            format!("[{}]", self.relation)
        };
        format!(
            "{} - ({}) - {} {}",
            self.display_word(),
            self.word_type,
            relation,
            self.gloss
        )
    }
}
