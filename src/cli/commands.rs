//! Command implementations for the Wordweave CLI.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::graph::loader;
use crate::search::{EngineConfig, RelatedWordsEngine};
use crate::service::{QueryResponse, WordsService};

/// Process exit status for a found result.
pub const EXIT_FOUND: i32 = 0;
/// Process exit status for any failure without a dedicated code.
pub const EXIT_FAILURE: i32 = 1;
/// Process exit status when the word is unknown or everything was filtered.
pub const EXIT_NOT_FOUND: i32 = 2;
/// Process exit status for rejected input.
pub const EXIT_INVALID_INPUT: i32 = 3;

/// Execute a CLI command and return the process exit status.
pub fn execute_command(args: WordweaveArgs) -> Result<i32> {
    match &args.command {
        Command::Search(search_args) => search_word(search_args.clone(), &args),
        Command::Batch(batch_args) => batch_search(batch_args.clone(), &args),
        Command::Stats => show_stats(&args),
    }
}

/// Exit status for one query outcome.
pub fn exit_code(response: &QueryResponse) -> i32 {
    match response.status_code() {
        200 => EXIT_FOUND,
        400 => EXIT_INVALID_INPUT,
        404 => EXIT_NOT_FOUND,
        _ => EXIT_FAILURE,
    }
}

/// Load the dataset and configuration named on the command line.
pub fn load_engine(cli_args: &WordweaveArgs) -> Result<RelatedWordsEngine> {
    let config = match &cli_args.config {
        Some(path) => {
            info!("Loading engine configuration from {}", path.display());
            EngineConfig::from_file(path)?
        }
        None => EngineConfig::default(),
    };

    let graph = loader::load_from_file(&cli_args.dataset)?;
    RelatedWordsEngine::new(Arc::new(graph), config)
}

/// Answer a single query.
fn search_word(args: SearchArgs, cli_args: &WordweaveArgs) -> Result<i32> {
    let service = WordsService::with_engine(load_engine(cli_args)?);

    let response = service.handle(&args.query.to_request(&args.word));
    output_response(&response, cli_args)?;

    Ok(exit_code(&response))
}

/// Answer every word of a file, one query per line.
fn batch_search(args: BatchArgs, cli_args: &WordweaveArgs) -> Result<i32> {
    let service = WordsService::with_engine(load_engine(cli_args)?);

    let words = read_words(&args.words_file)?;
    info!(
        "Running {} queries from {}",
        words.len(),
        args.words_file.display()
    );

    let requests: Vec<_> = words
        .iter()
        .map(|word| args.query.to_request(word))
        .collect();

    let start_time = Instant::now();
    let responses = service.handle_many(&requests);
    let duration_ms = start_time.elapsed().as_millis() as u64;

    // Unknown words are an ordinary batch outcome; only hard failures count.
    let code = if responses
        .iter()
        .any(|response| exit_code(response) == EXIT_FAILURE)
    {
        EXIT_FAILURE
    } else {
        EXIT_FOUND
    };

    let results = BatchResults {
        results: words
            .into_iter()
            .zip(responses)
            .map(|(word, response)| BatchLine {
                word,
                status: response.status_code(),
                response,
            })
            .collect(),
        duration_ms,
    };
    output_batch(&results, cli_args)?;

    Ok(code)
}

/// Show dataset statistics.
fn show_stats(cli_args: &WordweaveArgs) -> Result<i32> {
    let engine = load_engine(cli_args)?;
    let stats = DatasetStats::new(engine.graph().stats(), engine.index().word_count());
    output_stats(&stats, cli_args)?;
    Ok(EXIT_FOUND)
}

/// Non-empty, trimmed lines of a words file.
pub fn read_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use clap::Parser;
    use tempfile::NamedTempFile;

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code(&QueryResponse::Words(vec!["a".into()])), EXIT_FOUND);
        assert_eq!(exit_code(&QueryResponse::NotFound), EXIT_NOT_FOUND);
        assert_eq!(
            exit_code(&QueryResponse::InvalidInput {
                message: "bad".into()
            }),
            EXIT_INVALID_INPUT
        );
        assert_eq!(
            exit_code(&QueryResponse::Unavailable {
                message: "busy".into()
            }),
            EXIT_FAILURE
        );
    }

    #[test]
    fn test_read_words_skips_blank_lines() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "shark").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  bank  ").unwrap();

        let words = read_words(file.path()).unwrap();
        assert_eq!(words, vec!["shark", "bank"]);
    }

    #[test]
    fn test_load_engine_with_config_file() {
        let mut dataset = NamedTempFile::new().unwrap();
        write!(
            dataset,
            r#"{{"synset": {{"s1": {{"pos": "n", "word": ["shark"], "pointer": [], "gloss": "a fish"}}}}}}"#
        )
        .unwrap();

        let mut config = NamedTempFile::new().unwrap();
        write!(config, r#"{{"default_depth": 1, "thread_pool_size": 1}}"#).unwrap();

        let args = WordweaveArgs::try_parse_from([
            "wordweave",
            "--dataset",
            dataset.path().to_str().unwrap(),
            "--config",
            config.path().to_str().unwrap(),
            "stats",
        ])
        .unwrap();

        let engine = load_engine(&args).unwrap();
        assert_eq!(engine.config().default_depth, 1);
        assert_eq!(engine.graph().len(), 1);
    }
}
