//! Output formatting for CLI commands.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::cli::args::{OutputFormat, WordweaveArgs};
use crate::error::Result;
use crate::graph::GraphStats;
use crate::service::QueryResponse;

/// One answered line of a batch file.
#[derive(Debug, Serialize)]
pub struct BatchLine {
    pub word: String,
    pub status: u16,
    pub response: QueryResponse,
}

/// Result structure for batch queries.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResults {
    pub results: Vec<BatchLine>,
    pub duration_ms: u64,
}

/// Dataset statistics.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetStats {
    pub synsets: usize,
    pub words: usize,
    pub distinct_words: usize,
    pub pointers: usize,
    pub pointers_by_relation: BTreeMap<String, usize>,
}

impl DatasetStats {
    pub fn new(stats: GraphStats, distinct_words: usize) -> Self {
        DatasetStats {
            synsets: stats.synsets,
            words: stats.words,
            distinct_words,
            pointers: stats.pointers,
            pointers_by_relation: stats
                .pointers_by_relation
                .into_iter()
                .map(|(relation, count)| (relation.name().to_string(), count))
                .collect(),
        }
    }
}

/// Print a value as JSON, honouring `--pretty`.
pub fn output_json<T: Serialize>(result: &T, args: &WordweaveArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

/// Print one query response.
pub fn output_response(response: &QueryResponse, args: &WordweaveArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(response, args),
        OutputFormat::Human => {
            for line in human_lines(response) {
                println!("{line}");
            }
            if let Some(message) = response.message() {
                eprintln!("{message}");
            }
            Ok(())
        }
    }
}

/// Print the answers of a batch run.
pub fn output_batch(results: &BatchResults, args: &WordweaveArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(results, args),
        OutputFormat::Human => {
            for line in &results.results {
                println!("== {} ({}) ==", line.word, line.status);
                for text in human_lines(&line.response) {
                    println!("{text}");
                }
                if let Some(message) = line.response.message() {
                    println!("{message}");
                }
            }
            if args.verbosity() > 1 {
                println!();
                println!(
                    "{} queries in {}ms",
                    results.results.len(),
                    results.duration_ms
                );
            }
            Ok(())
        }
    }
}

/// Print dataset statistics.
pub fn output_stats(stats: &DatasetStats, args: &WordweaveArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(stats, args),
        OutputFormat::Human => {
            println!("Synsets:        {}", stats.synsets);
            println!("Words:          {}", stats.words);
            println!("Distinct words: {}", stats.distinct_words);
            println!("Pointers:       {}", stats.pointers);
            if !stats.pointers_by_relation.is_empty() {
                println!();
                println!("Pointers by relation:");
                for (relation, count) in &stats.pointers_by_relation {
                    println!("  {relation:<28} {count}");
                }
            }
            Ok(())
        }
    }
}

/// Display lines for a found response; empty otherwise.
pub fn human_lines(response: &QueryResponse) -> Vec<String> {
    match response {
        QueryResponse::Words(words) => words.iter().map(|word| word.replace('_', " ")).collect(),
        QueryResponse::Entries(entries) => {
            entries.iter().map(|entry| entry.to_verbose_string()).collect()
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{PartOfSpeech, Relation};
    use crate::search::ResultEntry;

    #[test]
    fn test_human_lines_use_display_forms() {
        let response = QueryResponse::Words(vec!["great_white_shark".to_string()]);
        assert_eq!(human_lines(&response), vec!["great white shark"]);

        let response = QueryResponse::Entries(vec![ResultEntry {
            word: "fish".to_string(),
            word_type: PartOfSpeech::Noun,
            relation: "Hypernym of shark".to_string(),
            gloss: "a cold-blooded vertebrate".to_string(),
        }]);
        assert_eq!(
            human_lines(&response),
            vec!["fish - (Noun) - [Hypernym of shark] a cold-blooded vertebrate"]
        );

        assert!(human_lines(&QueryResponse::NotFound).is_empty());
    }

    #[test]
    fn test_dataset_stats_names_relations() {
        let mut pointers_by_relation = BTreeMap::new();
        pointers_by_relation.insert(Relation::Hypernym, 2);

        let stats = DatasetStats::new(
            GraphStats {
                synsets: 3,
                words: 4,
                pointers: 2,
                pointers_by_relation,
            },
            4,
        );

        assert_eq!(stats.pointers_by_relation.get("Hypernym"), Some(&2));
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["distinctWords"], 4);
    }
}
