//! Immutable, arena-style lexical graph.
//!
//! Synsets live in a single vector in dataset order and are addressed by
//! their arena position; an id map resolves dataset ids to positions. A graph
//! can only be obtained through [`LexicalGraph::from_synsets`], which checks
//! the ingestion contract, and it is never mutated afterwards, so it can be
//! shared across threads without locks.

use std::collections::BTreeMap;

use ahash::AHashMap;
use log::info;
use serde::Serialize;

use crate::error::{Result, WordweaveError};
use crate::graph::synset::Synset;
use crate::graph::vocabulary::Relation;

/// A validated, fully linked set of synsets.
#[derive(Debug)]
pub struct LexicalGraph {
    synsets: Vec<Synset>,
    positions: AHashMap<String, usize>,
}

/// Size figures of a graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub synsets: usize,
    pub words: usize,
    pub pointers: usize,
    pub pointers_by_relation: BTreeMap<Relation, usize>,
}

impl LexicalGraph {
    /// Seal a set of synsets into a graph.
    ///
    /// Fails on empty word lists and duplicate ids (`Dataset`), and on any
    /// pointer whose target is not part of the set (`DanglingPointer`).
    pub fn from_synsets(synsets: Vec<Synset>) -> Result<Self> {
        let mut positions = AHashMap::with_capacity(synsets.len());

        for (position, synset) in synsets.iter().enumerate() {
            if synset.words.is_empty() {
                return Err(WordweaveError::dataset(format!(
                    "Synset {} has no words",
                    synset.id
                )));
            }
            if positions.insert(synset.id.clone(), position).is_some() {
                return Err(WordweaveError::dataset(format!(
                    "Duplicate synset id {}",
                    synset.id
                )));
            }
        }

        for synset in &synsets {
            for pointer in &synset.pointers {
                if !positions.contains_key(&pointer.target) {
                    return Err(WordweaveError::DanglingPointer {
                        synset: synset.id.clone(),
                        target: pointer.target.clone(),
                    });
                }
            }
        }

        info!("Lexical graph sealed with {} synsets", synsets.len());
        Ok(LexicalGraph { synsets, positions })
    }

    /// Look up a synset by id.
    pub fn lookup_synset(&self, id: &str) -> Result<&Synset> {
        self.position(id)
            .map(|position| &self.synsets[position])
            .ok_or_else(|| WordweaveError::SynsetNotFound(id.to_string()))
    }

    /// Arena position of a synset id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// Synset at an arena position.
    pub fn get(&self, position: usize) -> Option<&Synset> {
        self.synsets.get(position)
    }

    /// All synsets in dataset order.
    pub fn synsets(&self) -> &[Synset] {
        &self.synsets
    }

    pub fn len(&self) -> usize {
        self.synsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.synsets.is_empty()
    }

    /// Positions of every synset containing `word`, found by linear scan.
    pub fn scan_synsets_containing(&self, word: &str) -> Vec<usize> {
        self.synsets
            .iter()
            .enumerate()
            .filter(|(_, synset)| synset.contains_word(word))
            .map(|(position, _)| position)
            .collect()
    }

    /// Compute size figures.
    pub fn stats(&self) -> GraphStats {
        let mut pointers_by_relation = BTreeMap::new();
        let mut words = 0;
        let mut pointers = 0;

        for synset in &self.synsets {
            words += synset.words.len();
            pointers += synset.pointers.len();
            for pointer in &synset.pointers {
                *pointers_by_relation.entry(pointer.relation).or_insert(0) += 1;
            }
        }

        GraphStats {
            synsets: self.synsets.len(),
            words,
            pointers,
            pointers_by_relation,
        }
    }
}
