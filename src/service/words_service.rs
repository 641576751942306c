//! Readiness-gated front door to the engine.

use std::sync::Arc;
use std::time::Instant;

use log::info;
use parking_lot::RwLock;

use crate::error::{Result, WordweaveError};
use crate::search::assembler::distinct_words;
use crate::search::{RelatedWordsEngine, SearchRequest};
use crate::service::metrics::QueryMetrics;
use crate::service::response::QueryResponse;

/// Serves word queries once an engine has been installed.
///
/// The engine slot is filled exactly once; until then every query answers
/// [`QueryResponse::Unavailable`]. After installation the engine is shared
/// read-only by all callers.
#[derive(Default)]
pub struct WordsService {
    engine: RwLock<Option<Arc<RelatedWordsEngine>>>,
    metrics: QueryMetrics,
}

impl WordsService {
    /// Create a service that is not ready yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service that is ready immediately.
    pub fn with_engine(engine: RelatedWordsEngine) -> Self {
        WordsService {
            engine: RwLock::new(Some(Arc::new(engine))),
            metrics: QueryMetrics::new(),
        }
    }

    /// Open the readiness gate. Fails if an engine is already installed.
    pub fn install(&self, engine: RelatedWordsEngine) -> Result<()> {
        let mut slot = self.engine.write();
        if slot.is_some() {
            return Err(WordweaveError::InvalidOperation(
                "An engine is already installed".to_string(),
            ));
        }
        info!(
            "Engine installed over {} synsets; accepting queries",
            engine.graph().len()
        );
        *slot = Some(Arc::new(engine));
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        self.engine.read().is_some()
    }

    /// The installed engine.
    pub fn engine(&self) -> Result<Arc<RelatedWordsEngine>> {
        self.engine.read().clone().ok_or(WordweaveError::NotReady)
    }

    pub fn metrics(&self) -> &QueryMetrics {
        &self.metrics
    }

    /// Answer one query: distinct words when terse, entries when verbose.
    pub fn handle(&self, request: &SearchRequest) -> QueryResponse {
        let start_time = Instant::now();

        let response = match self.engine() {
            Ok(engine) if request.verbose => QueryResponse::from_entries(engine.search(request)),
            Ok(engine) => QueryResponse::from_words(engine.search_words(request)),
            Err(e) => QueryResponse::from_error(e),
        };

        self.metrics.record(&response, start_time.elapsed());
        response
    }

    /// Answer many queries in parallel, in request order.
    pub fn handle_many(&self, requests: &[SearchRequest]) -> Vec<QueryResponse> {
        let start_time = Instant::now();

        let engine = match self.engine() {
            Ok(engine) => engine,
            Err(e) => {
                let response = QueryResponse::from_error(e);
                return requests
                    .iter()
                    .map(|_| {
                        self.metrics.record(&response, start_time.elapsed());
                        response.clone()
                    })
                    .collect();
            }
        };

        let results = engine.search_many(requests);
        let elapsed = start_time.elapsed();

        requests
            .iter()
            .zip(results)
            .map(|(request, result)| {
                let response = if request.verbose {
                    QueryResponse::from_entries(result)
                } else {
                    QueryResponse::from_words(result.map(distinct_words))
                };
                self.metrics.record(&response, elapsed);
                response
            })
            .collect()
    }
}
