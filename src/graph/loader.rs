//! Loading a lexical graph from the WordNet JSON export.
//!
//! The export is a single JSON object whose `"synset"` member maps synset ids
//! to records:
//!
//! ```json
//! {
//!   "synset": {
//!     "n01482330": {
//!       "offset": 1482330,
//!       "pos": "n",
//!       "word": ["shark"],
//!       "pointer": [{ "symbol": "@", "synset": "n01480516", "source": 0, "target": 0 }],
//!       "frame": [],
//!       "gloss": "any of numerous elongate mostly marine carnivorous fishes",
//!       "example": []
//!     }
//!   }
//! }
//! ```
//!
//! Fields the engine does not use are accepted and dropped. The order of the
//! `"synset"` map is kept because it decides the order in which root synsets
//! are processed.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::time::Instant;

use log::info;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use crate::error::Result;
use crate::graph::lexical_graph::LexicalGraph;
use crate::graph::synset::{Pointer, Synset};
use crate::graph::vocabulary::{PartOfSpeech, Relation};

#[derive(Debug, Deserialize)]
struct DatasetFile {
    #[serde(deserialize_with = "ordered_entries")]
    synset: Vec<(String, SynsetRecord)>,
}

#[derive(Debug, Deserialize)]
struct SynsetRecord {
    pos: String,
    #[serde(rename = "word", default)]
    words: Vec<String>,
    #[serde(rename = "pointer", default)]
    pointers: Vec<PointerRecord>,
    #[serde(default)]
    gloss: String,
}

#[derive(Debug, Deserialize)]
struct PointerRecord {
    symbol: String,
    synset: String,
}

fn ordered_entries<'de, D>(
    deserializer: D,
) -> std::result::Result<Vec<(String, SynsetRecord)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct EntriesVisitor;

    impl<'de> Visitor<'de> for EntriesVisitor {
        type Value = Vec<(String, SynsetRecord)>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of synset ids to synset records")
        }

        fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry::<String, SynsetRecord>()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor)
}

impl SynsetRecord {
    fn into_synset(self, id: String) -> Result<Synset> {
        let pos: PartOfSpeech = self.pos.parse()?;
        let pointers = self
            .pointers
            .into_iter()
            .map(|pointer| {
                let relation: Relation = pointer.symbol.parse()?;
                Ok(Pointer::new(relation, pointer.synset))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Synset {
            id,
            pos,
            words: self.words,
            gloss: self.gloss,
            pointers,
        })
    }
}

/// Parse the synsets of a dataset without sealing them into a graph.
pub fn parse_synsets<R: Read>(reader: R) -> Result<Vec<Synset>> {
    let dataset: DatasetFile = serde_json::from_reader(reader)?;
    dataset
        .synset
        .into_iter()
        .map(|(id, record)| record.into_synset(id))
        .collect()
}

/// Load and seal a graph from any reader.
pub fn load_from_reader<R: Read>(reader: R) -> Result<LexicalGraph> {
    LexicalGraph::from_synsets(parse_synsets(reader)?)
}

/// Load and seal a graph from a dataset file.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<LexicalGraph> {
    let path = path.as_ref();
    let start_time = Instant::now();

    let file = File::open(path)?;
    let graph = load_from_reader(BufReader::new(file))?;

    info!(
        "Loaded {} synsets from {} in {}ms",
        graph.len(),
        path.display(),
        start_time.elapsed().as_millis()
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WordweaveError;

    const DATASET: &str = r#"{
      "synset": {
        "n2": { "offset": 2, "pos": "n", "word": ["fish"], "pointer": [], "frame": [], "gloss": "a vertebrate", "example": [] },
        "n1": {
          "offset": 1,
          "pos": "n",
          "word": ["shark"],
          "pointer": [
            { "symbol": "@", "synset": "n2", "source": 0, "target": 0 },
            { "symbol": "\\", "synset": "n2", "source": 1, "target": 1 }
          ],
          "gloss": "a predatory fish"
        }
      },
      "index": {}
    }"#;

    #[test]
    fn test_parse_keeps_file_order() {
        let synsets = parse_synsets(DATASET.as_bytes()).unwrap();

        let ids: Vec<&str> = synsets.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["n2", "n1"]);
        assert_eq!(synsets[1].pointers[0], Pointer::new(Relation::Hypernym, "n2"));
        assert_eq!(synsets[1].pointers[1].relation, Relation::Pertainym);
    }

    #[test]
    fn test_load_from_reader_seals_graph() {
        let graph = load_from_reader(DATASET.as_bytes()).unwrap();
        assert_eq!(graph.lookup_synset("n1").unwrap().gloss, "a predatory fish");
    }

    #[test]
    fn test_unknown_symbols_are_rejected() {
        let bad_pos = r#"{ "synset": { "x1": { "pos": "q", "word": ["odd"], "gloss": "" } } }"#;
        assert!(matches!(
            parse_synsets(bad_pos.as_bytes()),
            Err(WordweaveError::Dataset(_))
        ));

        let bad_symbol = r#"{ "synset": { "x1": { "pos": "n", "word": ["odd"],
            "pointer": [{ "symbol": "??", "synset": "x1" }] } } }"#;
        assert!(matches!(
            parse_synsets(bad_symbol.as_bytes()),
            Err(WordweaveError::Dataset(_))
        ));
    }

    #[test]
    fn test_malformed_json_is_a_json_error() {
        assert!(matches!(
            parse_synsets("{ \"synset\": [".as_bytes()),
            Err(WordweaveError::Json(_))
        ));
    }
}
