//! Related-word search: request validation, the result filter, the
//! depth-bounded traversal, and result assembly.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use wordweave::graph::{LexicalGraph, PartOfSpeech, Relation, Synset};
//! use wordweave::search::{RelatedWordsEngine, SearchRequest};
//!
//! let graph = LexicalGraph::from_synsets(vec![
//!     Synset::new("s1", PartOfSpeech::Noun, ["shark"], "a predatory fish")
//!         .with_pointer(Relation::Hypernym, "s2"),
//!     Synset::new("s2", PartOfSpeech::Noun, ["fish"], "a cold-blooded vertebrate")
//!         .with_pointer(Relation::Hyponym, "s1"),
//! ])
//! .unwrap();
//!
//! let engine = RelatedWordsEngine::with_default_config(Arc::new(graph)).unwrap();
//! let results = engine.search(&SearchRequest::new("shark")).unwrap();
//!
//! assert_eq!(results[0].word, "shark");
//! assert_eq!(results[1].word, "fish");
//! assert_eq!(results[1].relation, "Hyponym of shark");
//! ```

pub mod assembler;
pub mod config;
pub mod engine;
pub mod filter;
pub mod pattern;
pub mod request;
pub mod result;
pub mod traversal;

pub use assembler::ResultAssembler;
pub use config::{DEFAULT_DEPTH, EngineConfig};
pub use engine::RelatedWordsEngine;
pub use filter::WordFilter;
pub use pattern::CharacterPattern;
pub use request::{MAX_DEPTH, MIN_DEPTH, SearchRequest};
pub use result::ResultEntry;
pub use traversal::{Traversal, TraversalStats};
