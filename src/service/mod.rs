//! The query-by-word contract, independent of any transport.
//!
//! [`WordsService`] gates queries on a one-time engine installation and maps
//! engine results onto [`QueryResponse`] outcomes with HTTP-style status
//! codes.

pub mod metrics;
pub mod response;
pub mod words_service;

pub use metrics::{QueryMetrics, QueryMetricsSnapshot};
pub use response::QueryResponse;
pub use words_service::WordsService;
