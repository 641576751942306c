//! # Wordweave
//!
//! Related-word search over a WordNet-style lexical graph.
//!
//! ## Features
//!
//! - Depth-bounded traversal of typed synset pointers
//! - Exact-length and character-pattern filters
//! - Terse word lists or detailed per-sense entries
//! - Readiness-gated query service with per-outcome metrics
//! - Parallel batch queries

pub mod cli;
pub mod error;
pub mod graph;
pub mod index;
pub mod search;
pub mod service;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
