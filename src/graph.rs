//! The lexical graph: synsets, their typed pointers, and the fixed
//! part-of-speech and relation vocabularies.
//!
//! Graphs are built once from a dataset (see [`loader`]) and are read-only
//! afterwards.

pub mod lexical_graph;
pub mod loader;
pub mod synset;
pub mod vocabulary;

pub use lexical_graph::{GraphStats, LexicalGraph};
pub use synset::{Pointer, Synset};
pub use vocabulary::{PartOfSpeech, Relation};
