//! Configuration for the related-words engine.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordweaveError};
use crate::search::request::{MAX_DEPTH, MIN_DEPTH};

/// Depth used when a request does not name one.
pub const DEFAULT_DEPTH: usize = 2;

/// Configuration for [`RelatedWordsEngine`](crate::search::RelatedWordsEngine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Recursion depth for requests that leave it unset.
    pub default_depth: usize,

    /// Skip re-walking a synset whose subtree was already fully explored
    /// with at least as much remaining depth. Does not change results.
    pub memoize: bool,

    /// Maximum number of synset visits per query.
    /// If None, queries are bounded only by depth.
    pub visit_budget: Option<usize>,

    /// Thread pool size for batch queries.
    /// If None, uses the number of CPU cores.
    pub thread_pool_size: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_depth: DEFAULT_DEPTH,
            memoize: true,
            visit_budget: None,
            thread_pool_size: None,
        }
    }
}

impl EngineConfig {
    /// Read a configuration from a JSON file. Missing keys take defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let config: EngineConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Set the default recursion depth.
    pub fn with_default_depth(mut self, depth: usize) -> Self {
        self.default_depth = depth;
        self
    }

    /// Enable or disable the explored-subtree memo.
    pub fn with_memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }

    /// Cap the number of synset visits per query.
    pub fn with_visit_budget(mut self, budget: usize) -> Self {
        self.visit_budget = Some(budget);
        self
    }

    /// Set the batch thread pool size.
    pub fn with_thread_pool_size(mut self, size: usize) -> Self {
        self.thread_pool_size = Some(size);
        self
    }

    /// Check the configuration for values the engine cannot honor.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_DEPTH..=MAX_DEPTH).contains(&self.default_depth) {
            return Err(WordweaveError::invalid_config(format!(
                "default_depth must be between {MIN_DEPTH} and {MAX_DEPTH}, got {}",
                self.default_depth
            )));
        }
        if self.visit_budget == Some(0) {
            return Err(WordweaveError::invalid_config("visit_budget must be positive"));
        }
        if self.thread_pool_size == Some(0) {
            return Err(WordweaveError::invalid_config(
                "thread_pool_size must be positive",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.default_depth, 2);
        assert!(config.memoize);
        assert_eq!(config.visit_budget, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = EngineConfig::default()
            .with_default_depth(3)
            .with_memoize(false)
            .with_visit_budget(1000)
            .with_thread_pool_size(2);

        assert_eq!(config.default_depth, 3);
        assert!(!config.memoize);
        assert_eq!(config.visit_budget, Some(1000));
        assert_eq!(config.thread_pool_size, Some(2));
    }

    #[test]
    fn test_validate_rejects_out_of_range_values() {
        assert!(EngineConfig::default().with_default_depth(0).validate().is_err());
        assert!(EngineConfig::default().with_default_depth(6).validate().is_err());
        assert!(EngineConfig::default().with_visit_budget(0).validate().is_err());
    }

    #[test]
    fn test_from_file_fills_missing_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "visit_budget": 500 }}"#).unwrap();

        let config = EngineConfig::from_file(file.path()).unwrap();
        assert_eq!(config.visit_budget, Some(500));
        assert_eq!(config.default_depth, DEFAULT_DEPTH);
        assert!(config.memoize);
    }
}
