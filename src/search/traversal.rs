//! Depth-bounded walk over the lexical graph.
//!
//! Root synsets sit at level 1 and contribute their words with an empty
//! relation. Every pointer leads one level further; a synset reached at
//! level `L <= max_depth` contributes its words labelled with its own
//! outgoing relation names "of" the words of the synset it was reached from,
//! then continues along its pointers. Labels describe the immediately
//! preceding hop, never the whole path.
//!
//! Entries are unique by `(word, gloss)`: the first insertion wins and keeps
//! its label. There is no visited set, so a synset reachable over several
//! paths is walked once per path. With memoization on, a synset whose
//! subtree was already walked to completion with at least as much remaining
//! depth is skipped; such a walk could not add an entry, so results are the
//! same with or without the memo.

use ahash::{AHashMap, AHashSet};
use log::warn;

use crate::error::{Result, WordweaveError};
use crate::graph::{LexicalGraph, Relation, Synset};
use crate::search::filter::WordFilter;
use crate::search::result::ResultEntry;

/// Level of the synsets containing the search word.
pub const ROOT_LEVEL: usize = 1;

/// Counters collected during one traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalStats {
    /// Synsets whose words were examined.
    pub visits: usize,
    /// Visits skipped because the subtree was already explored.
    pub memo_skips: usize,
}

/// Entries in insertion order plus counters.
#[derive(Debug, Clone)]
pub struct TraversalOutput {
    pub entries: Vec<ResultEntry>,
    pub stats: TraversalStats,
}

/// State of a single query's walk. Created per query and consumed by
/// [`Traversal::run`].
pub struct Traversal<'a> {
    graph: &'a LexicalGraph,
    filter: &'a WordFilter,
    max_depth: usize,
    memoize: bool,
    visit_budget: Option<usize>,
    entries: Vec<ResultEntry>,
    seen: AHashSet<(&'a str, &'a str)>,
    explored: AHashMap<usize, usize>,
    stats: TraversalStats,
}

impl<'a> Traversal<'a> {
    pub fn new(graph: &'a LexicalGraph, filter: &'a WordFilter, max_depth: usize) -> Self {
        Traversal {
            graph,
            filter,
            max_depth,
            memoize: false,
            visit_budget: None,
            entries: Vec::new(),
            seen: AHashSet::new(),
            explored: AHashMap::new(),
            stats: TraversalStats::default(),
        }
    }

    pub fn with_memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }

    pub fn with_visit_budget(mut self, budget: Option<usize>) -> Self {
        self.visit_budget = budget;
        self
    }

    /// Walk outward from the given root synset positions.
    pub fn run(mut self, roots: &[usize]) -> Result<TraversalOutput> {
        let graph = self.graph;
        if self.max_depth < ROOT_LEVEL {
            return Ok(TraversalOutput {
                entries: self.entries,
                stats: self.stats,
            });
        }

        for &position in roots {
            let synset = graph.get(position).ok_or_else(|| {
                WordweaveError::internal(format!("No synset at position {position}"))
            })?;

            self.count_visit()?;
            for word in &synset.words {
                self.try_add(synset, word, "");
            }
            self.expand(synset, ROOT_LEVEL)?;
            self.mark_explored(position, ROOT_LEVEL);
        }

        Ok(TraversalOutput {
            entries: self.entries,
            stats: self.stats,
        })
    }

    /// Follow every pointer of `synset`, which sits at `level`.
    fn expand(&mut self, synset: &'a Synset, level: usize) -> Result<()> {
        let next_level = level + 1;
        if next_level > self.max_depth || synset.pointers.is_empty() {
            return Ok(());
        }

        let source_words = synset.joined_words();
        for pointer in &synset.pointers {
            let position = self.graph.position(&pointer.target).ok_or_else(|| {
                WordweaveError::DanglingPointer {
                    synset: synset.id.clone(),
                    target: pointer.target.clone(),
                }
            })?;
            self.visit(position, &source_words, next_level)?;
        }
        Ok(())
    }

    fn visit(&mut self, position: usize, source_words: &str, level: usize) -> Result<()> {
        let remaining = self.max_depth.saturating_sub(level);
        if self.memoize
            && self
                .explored
                .get(&position)
                .is_some_and(|&done| done >= remaining)
        {
            self.stats.memo_skips += 1;
            return Ok(());
        }

        let graph = self.graph;
        let synset = graph.get(position).ok_or_else(|| {
            WordweaveError::internal(format!("No synset at position {position}"))
        })?;

        self.count_visit()?;
        let relation = hop_label(synset, source_words);
        for word in &synset.words {
            self.try_add(synset, word, &relation);
        }
        self.expand(synset, level)?;
        self.mark_explored(position, level);
        Ok(())
    }

    fn count_visit(&mut self) -> Result<()> {
        self.stats.visits += 1;
        if let Some(budget) = self.visit_budget
            && self.stats.visits > budget
        {
            warn!("Traversal stopped after {budget} synset visits");
            return Err(WordweaveError::ResourceExhausted(format!(
                "query exceeded the budget of {budget} synset visits"
            )));
        }
        Ok(())
    }

    fn mark_explored(&mut self, position: usize, level: usize) {
        if !self.memoize {
            return;
        }
        let remaining = self.max_depth.saturating_sub(level);
        let done = self.explored.entry(position).or_insert(remaining);
        *done = (*done).max(remaining);
    }

    fn try_add(&mut self, synset: &'a Synset, word: &'a str, relation: &str) {
        let key = (word, synset.gloss.as_str());
        if self.seen.contains(&key) || !self.filter.admits(word) {
            return;
        }
        self.seen.insert(key);
        self.entries.push(ResultEntry {
            word: word.to_string(),
            word_type: synset.pos,
            relation: relation.to_string(),
            gloss: synset.gloss.clone(),
        });
    }
}

/// `"<Relation> of <source words>"` for each distinct relation among the
/// synset's own pointers, in order of first occurrence, joined with `", "`.
pub fn hop_label(synset: &Synset, source_words: &str) -> String {
    let mut relations: Vec<Relation> = Vec::new();
    for pointer in &synset.pointers {
        if !relations.contains(&pointer.relation) {
            relations.push(pointer.relation);
        }
    }

    relations
        .iter()
        .map(|relation| format!("{} of {}", relation.name(), source_words))
        .collect::<Vec<_>>()
        .join(", ")
}
