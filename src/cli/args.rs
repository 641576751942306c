//! Command line argument parsing for the Wordweave CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::search::SearchRequest;

/// Wordweave - find words related to a word in a WordNet-style graph
#[derive(Parser, Debug, Clone)]
#[command(name = "wordweave")]
#[command(about = "Find semantically related words in a WordNet-style lexical graph")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordweaveArgs {
    /// Increase verbosity (-v verbose, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// WordNet JSON dataset to load
    #[arg(long, env = "WORDWEAVE_DATASET", value_name = "DATASET_FILE")]
    pub dataset: PathBuf,

    /// Engine configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WordweaveArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            // Normal by default, one level up per -v
            self.verbose.saturating_add(1)
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Find words related to a word
    Search(SearchArgs),

    /// Answer one query per line of a file, in parallel
    Batch(BatchArgs),

    /// Show dataset statistics
    Stats,
}

/// Filters shared by every query command
#[derive(Args, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Only return words exactly this many characters long (0 = any length)
    #[arg(short, long, default_value = "0")]
    pub length: usize,

    /// Depth of recursion, 1 to 5 (default 2)
    #[arg(short, long)]
    pub recurse: Option<usize>,

    /// Character pattern, `_` matches any character (e.g. `_a_c`)
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Return one detailed entry per sense instead of distinct words
    #[arg(short, long)]
    pub details: bool,
}

impl QueryArgs {
    /// Build the engine request for `word`.
    pub fn to_request(&self, word: &str) -> SearchRequest {
        SearchRequest {
            word: word.to_string(),
            length: Some(self.length),
            depth: self.recurse,
            pattern: self.pattern.clone(),
            verbose: self.details,
        }
    }
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Word to search for, e.g. `shark`
    #[arg(value_name = "WORD")]
    pub word: String,

    #[command(flatten)]
    pub query: QueryArgs,
}

/// Arguments for batch queries
#[derive(Parser, Debug, Clone)]
pub struct BatchArgs {
    /// File with one search word per line
    #[arg(value_name = "WORDS_FILE")]
    pub words_file: PathBuf,

    #[command(flatten)]
    pub query: QueryArgs,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_search_command() {
        let args = WordweaveArgs::try_parse_from([
            "wordweave",
            "--dataset",
            "wordnet.json",
            "search",
            "shark",
            "--length",
            "4",
            "--recurse",
            "3",
            "--pattern",
            "f___",
        ])
        .unwrap();

        assert_eq!(args.dataset, PathBuf::from("wordnet.json"));
        if let Command::Search(search_args) = args.command {
            assert_eq!(search_args.word, "shark");
            assert_eq!(search_args.query.length, 4);
            assert_eq!(search_args.query.recurse, Some(3));
            assert_eq!(search_args.query.pattern.as_deref(), Some("f___"));
            assert!(!search_args.query.details);
        } else {
            panic!("Expected Search command");
        }
    }

    #[test]
    fn test_query_args_to_request() {
        let query = QueryArgs {
            length: 0,
            recurse: None,
            pattern: None,
            details: true,
        };
        let request = query.to_request("bank");

        assert_eq!(request.word, "bank");
        assert_eq!(request.length_filter(), None);
        assert_eq!(request.depth, None);
        assert!(request.verbose);
    }

    #[test]
    fn test_batch_command() {
        let args = WordweaveArgs::try_parse_from([
            "wordweave",
            "--dataset",
            "wordnet.json",
            "batch",
            "words.txt",
            "--details",
        ])
        .unwrap();

        if let Command::Batch(batch_args) = args.command {
            assert_eq!(batch_args.words_file, PathBuf::from("words.txt"));
            assert!(batch_args.query.details);
        } else {
            panic!("Expected Batch command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = WordweaveArgs::try_parse_from(["wordweave", "--dataset", "d.json", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Verbose flags
        let args =
            WordweaveArgs::try_parse_from(["wordweave", "-v", "--dataset", "d.json", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 2);
        let args =
            WordweaveArgs::try_parse_from(["wordweave", "-vv", "--dataset", "d.json", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 3);

        // Quiet flag
        let args =
            WordweaveArgs::try_parse_from(["wordweave", "--quiet", "--dataset", "d.json", "stats"])
                .unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args = WordweaveArgs::try_parse_from([
            "wordweave",
            "--format",
            "json",
            "--dataset",
            "d.json",
            "stats",
        ])
        .unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
    }
}
