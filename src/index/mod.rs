//! Derived lookup structures over a sealed lexical graph.

pub mod word_index;

pub use word_index::WordIndex;
