//! Outcomes of a word query.

use serde::Serialize;

use crate::error::{Result, WordweaveError};
use crate::search::ResultEntry;

/// What a caller gets back for one query.
///
/// Serializes to the response body: a JSON array for found results, `null`
/// for not found, and `{"message": ...}` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryResponse {
    /// Terse result: distinct words in result order.
    Words(Vec<String>),
    /// Verbose result: one entry per sense and path.
    Entries(Vec<ResultEntry>),
    /// The word is unknown, or nothing survived filtering.
    NotFound,
    /// The request itself was rejected.
    InvalidInput { message: String },
    /// The service cannot answer right now.
    Unavailable { message: String },
    /// The engine failed.
    Internal { message: String },
}

impl QueryResponse {
    /// Map a terse engine result.
    pub fn from_words(result: Result<Vec<String>>) -> Self {
        match result {
            Ok(words) => QueryResponse::Words(words),
            Err(e) => QueryResponse::from_error(e),
        }
    }

    /// Map a verbose engine result.
    pub fn from_entries(result: Result<Vec<ResultEntry>>) -> Self {
        match result {
            Ok(entries) => QueryResponse::Entries(entries),
            Err(e) => QueryResponse::from_error(e),
        }
    }

    /// Map an error onto its outcome.
    pub fn from_error(error: WordweaveError) -> Self {
        let message = error.to_string();
        match error {
            e if e.is_not_found() => QueryResponse::NotFound,
            e if e.is_invalid_input() => QueryResponse::InvalidInput { message },
            WordweaveError::NotReady | WordweaveError::ResourceExhausted(_) => {
                QueryResponse::Unavailable { message }
            }
            _ => QueryResponse::Internal { message },
        }
    }

    /// HTTP-style status code for this outcome.
    pub fn status_code(&self) -> u16 {
        match self {
            QueryResponse::Words(_) | QueryResponse::Entries(_) => 200,
            QueryResponse::InvalidInput { .. } => 400,
            QueryResponse::NotFound => 404,
            QueryResponse::Internal { .. } => 500,
            QueryResponse::Unavailable { .. } => 503,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, QueryResponse::Words(_) | QueryResponse::Entries(_))
    }

    /// Human-readable message for non-found outcomes.
    pub fn message(&self) -> Option<&str> {
        match self {
            QueryResponse::InvalidInput { message }
            | QueryResponse::Unavailable { message }
            | QueryResponse::Internal { message } => Some(message),
            QueryResponse::NotFound => Some("Not Found"),
            QueryResponse::Words(_) | QueryResponse::Entries(_) => None,
        }
    }
}
