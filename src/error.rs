//! Error types for the Wordweave library.
//!
//! All errors are represented by the [`WordweaveError`] enum. Besides the
//! ambient I/O and JSON failures it carries the query taxonomy: caller input
//! errors detected before a traversal starts, the two "not found" causes, and
//! violations of the ingestion contract.
//!
//! # Examples
//!
//! ```
//! use wordweave::error::{WordweaveError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WordweaveError::dataset("synset has no words"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Wordweave operations.
#[derive(Error, Debug)]
pub enum WordweaveError {
    /// I/O errors (dataset and config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The dataset handed to ingestion is malformed.
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// No synset with the given id exists in the graph.
    #[error("Synset not found: {0}")]
    SynsetNotFound(String),

    /// A pointer targets a synset id that is not part of the graph.
    #[error("Synset {synset} points to missing synset {target}")]
    DanglingPointer { synset: String, target: String },

    /// Requested recursion depth is outside the supported range.
    #[error("The depth of recursion must be between {min} and {max}.")]
    InvalidRecurseDepth { depth: usize, min: usize, max: usize },

    /// The character pattern is longer than the requested word length.
    #[error("Pattern length must be less than length parameter.")]
    InvalidPatternLength { pattern_len: usize, length: usize },

    /// The search word is not part of any synset.
    #[error("Word not found: {0}")]
    RootWordNotFound(String),

    /// The search word exists but every candidate was filtered out.
    #[error("No related words left after filtering: {0}")]
    FilteredToEmpty(String),

    /// A query ran past its configured resource limits.
    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),

    /// The lexical graph has not been installed yet.
    #[error("Lexical graph is not loaded yet")]
    NotReady,

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with WordweaveError.
pub type Result<T> = std::result::Result<T, WordweaveError>;

impl WordweaveError {
    /// Create a new dataset error.
    pub fn dataset<S: Into<String>>(msg: S) -> Self {
        WordweaveError::Dataset(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        WordweaveError::Other(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        WordweaveError::Other(format!("Invalid configuration: {}", msg.into()))
    }

    /// Create a new internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        WordweaveError::Other(format!("Internal error: {}", msg.into()))
    }

    /// Both "not found" causes are observably the same outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            WordweaveError::RootWordNotFound(_) | WordweaveError::FilteredToEmpty(_)
        )
    }

    /// Whether this error was caused by caller input rather than by the engine.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            WordweaveError::InvalidRecurseDepth { .. } | WordweaveError::InvalidPatternLength { .. }
        )
    }
}
