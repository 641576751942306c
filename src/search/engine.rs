//! The related-words engine: validation, traversal and assembly in one call.

use std::sync::Arc;
use std::time::Instant;

use log::debug;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::{Result, WordweaveError};
use crate::graph::{LexicalGraph, Synset};
use crate::index::WordIndex;
use crate::search::assembler::{ResultAssembler, distinct_words};
use crate::search::config::EngineConfig;
use crate::search::filter::WordFilter;
use crate::search::request::SearchRequest;
use crate::search::result::ResultEntry;
use crate::search::traversal::Traversal;

/// Answers related-word queries against a shared, read-only graph.
///
/// The engine holds no per-query state; any number of queries may run on it
/// concurrently.
pub struct RelatedWordsEngine {
    /// The sealed graph.
    graph: Arc<LexicalGraph>,

    /// Word lookup derived from the graph.
    index: WordIndex,

    /// Configuration for the engine.
    config: EngineConfig,

    /// Thread pool for batch queries.
    thread_pool: Arc<ThreadPool>,
}

impl RelatedWordsEngine {
    /// Create an engine over a sealed graph.
    pub fn new(graph: Arc<LexicalGraph>, config: EngineConfig) -> Result<Self> {
        config.validate()?;

        let thread_pool_size = config.thread_pool_size.unwrap_or_else(num_cpus::get);
        let thread_pool = ThreadPoolBuilder::new()
            .num_threads(thread_pool_size)
            .thread_name(|i| format!("wordweave-search-{i}"))
            .build()
            .map_err(|e| WordweaveError::internal(format!("Failed to create thread pool: {e}")))?;

        let index = WordIndex::build(&graph);
        debug!(
            "Word index built with {} distinct words over {} synsets",
            index.word_count(),
            graph.len()
        );

        Ok(Self {
            graph,
            index,
            config,
            thread_pool: Arc::new(thread_pool),
        })
    }

    /// Create an engine with the default configuration.
    pub fn with_default_config(graph: Arc<LexicalGraph>) -> Result<Self> {
        Self::new(graph, EngineConfig::default())
    }

    pub fn graph(&self) -> &LexicalGraph {
        &self.graph
    }

    pub fn index(&self) -> &WordIndex {
        &self.index
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Every synset containing `word`, compared case-insensitively.
    pub fn find_synsets_containing(&self, word: &str) -> Vec<&Synset> {
        self.index
            .find_synsets_containing(word)
            .iter()
            .filter_map(|&position| self.graph.get(position))
            .collect()
    }

    /// Run one query.
    ///
    /// Invalid input is rejected before any traversal. An unknown word
    /// yields `RootWordNotFound`; a known word whose candidates were all
    /// filtered out yields `FilteredToEmpty`.
    pub fn search(&self, request: &SearchRequest) -> Result<Vec<ResultEntry>> {
        let start_time = Instant::now();

        request.validate(self.config.default_depth)?;
        let max_depth = request.effective_depth(self.config.default_depth);
        let filter = WordFilter::from_request(request)?;

        let roots = self.index.find_synsets_containing(&request.word);
        if roots.is_empty() {
            debug!("No synset contains '{}'", request.word);
            return Err(WordweaveError::RootWordNotFound(request.word.clone()));
        }

        let output = Traversal::new(&self.graph, &filter, max_depth)
            .with_memoize(self.config.memoize)
            .with_visit_budget(self.config.visit_budget)
            .run(roots)?;

        let results = ResultAssembler::new(filter.exact_length().is_some(), request.verbose)
            .assemble(output.entries);

        debug!(
            "Search '{}' depth {}: {} roots, {} visits, {} memo skips, {} results in {}us",
            request.word,
            max_depth,
            roots.len(),
            output.stats.visits,
            output.stats.memo_skips,
            results.len(),
            start_time.elapsed().as_micros()
        );

        if results.is_empty() {
            return Err(WordweaveError::FilteredToEmpty(request.word.clone()));
        }
        Ok(results)
    }

    /// Run one query and return only the distinct words, in result order.
    pub fn search_words(&self, request: &SearchRequest) -> Result<Vec<String>> {
        self.search(request).map(distinct_words)
    }

    /// Run many queries in parallel. Results come back in request order.
    pub fn search_many(&self, requests: &[SearchRequest]) -> Vec<Result<Vec<ResultEntry>>> {
        self.thread_pool
            .install(|| requests.par_iter().map(|request| self.search(request)).collect())
    }
}
