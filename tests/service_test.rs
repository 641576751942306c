//! Integration tests for the query-by-word service contract.

use std::sync::Arc;
use std::thread;

use serde_json::json;

use wordweave::graph::{LexicalGraph, PartOfSpeech, Relation, Synset};
use wordweave::search::{EngineConfig, RelatedWordsEngine, SearchRequest};
use wordweave::service::{QueryResponse, WordsService};

fn engine(config: EngineConfig) -> RelatedWordsEngine {
    let graph = LexicalGraph::from_synsets(vec![
        Synset::new("n1", PartOfSpeech::Noun, ["bank"], "sloping land beside water")
            .with_pointer(Relation::Hypernym, "n3"),
        Synset::new("n2", PartOfSpeech::Noun, ["bank", "depository_financial_institution"], "a financial institution")
            .with_pointer(Relation::Hypernym, "n4"),
        Synset::new("n3", PartOfSpeech::Noun, ["slope", "incline"], "an elevated geological formation"),
        Synset::new("n4", PartOfSpeech::Noun, ["institution"], "an organization founded for a purpose")
            .with_pointer(Relation::Hyponym, "n2"),
    ])
    .unwrap();

    RelatedWordsEngine::new(Arc::new(graph), config.with_thread_pool_size(2)).unwrap()
}

fn service() -> WordsService {
    WordsService::with_engine(engine(EngineConfig::default()))
}

#[test]
fn test_terse_response() {
    // slope and incline have no pointers of their own, so they are unlabelled.
    let response = service().handle(&SearchRequest::new("Bank"));

    assert_eq!(response.status_code(), 200);
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!([
            "bank",
            "slope",
            "incline",
            "depository_financial_institution",
            "institution"
        ])
    );
}

#[test]
fn test_verbose_response_keeps_each_sense() {
    let response = service().handle(&SearchRequest::new("bank").with_depth(1).verbose(true));

    assert_eq!(response.status_code(), 200);
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!([
            { "word": "bank", "wordType": "Noun", "relation": "", "gloss": "sloping land beside water" },
            { "word": "bank", "wordType": "Noun", "relation": "", "gloss": "a financial institution" },
            {
                "word": "depository_financial_institution",
                "wordType": "Noun",
                "relation": "",
                "gloss": "a financial institution"
            }
        ])
    );
}

#[test]
fn test_not_found_response() {
    let service = service();

    let unknown = service.handle(&SearchRequest::new("river"));
    let filtered = service.handle(&SearchRequest::new("bank").with_length(2));

    for response in [unknown, filtered] {
        assert_eq!(response, QueryResponse::NotFound);
        assert_eq!(response.status_code(), 404);
        assert_eq!(serde_json::to_value(&response).unwrap(), json!(null));
    }
}

#[test]
fn test_invalid_input_response() {
    let service = service();

    let response = service.handle(&SearchRequest::new("bank").with_depth(6));
    assert_eq!(response.status_code(), 400);
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({ "message": "The depth of recursion must be between 1 and 5." })
    );

    let response = service.handle(
        &SearchRequest::new("bank")
            .with_length(3)
            .with_pattern("abcde"),
    );
    assert_eq!(response.status_code(), 400);
    assert_eq!(
        response.message(),
        Some("Pattern length must be less than length parameter.")
    );
}

#[test]
fn test_unavailable_until_installed() {
    let service = WordsService::new();
    let request = SearchRequest::new("bank");

    assert_eq!(service.handle(&request).status_code(), 503);

    service.install(engine(EngineConfig::default())).unwrap();
    assert_eq!(service.handle(&request).status_code(), 200);
}

#[test]
fn test_exhausted_budget_is_unavailable() {
    let service = WordsService::with_engine(engine(EngineConfig::default().with_visit_budget(1)));

    let response = service.handle(&SearchRequest::new("bank").with_depth(3));
    assert_eq!(response.status_code(), 503);
}

#[test]
fn test_concurrent_queries_share_one_engine() {
    let service = Arc::new(service());
    let expected = service.handle(&SearchRequest::new("bank").with_depth(3));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let service = Arc::clone(&service);
            thread::spawn(move || service.handle(&SearchRequest::new("bank").with_depth(3)))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
    assert_eq!(service.metrics().snapshot().found, 5);
}

#[test]
fn test_batch_and_metrics() {
    let service = service();
    let responses = service.handle_many(&[
        SearchRequest::new("bank"),
        SearchRequest::new("river"),
        SearchRequest::new("bank").with_depth(0),
        SearchRequest::new("slope").verbose(true),
    ]);

    let codes: Vec<u16> = responses.iter().map(QueryResponse::status_code).collect();
    assert_eq!(codes, vec![200, 404, 400, 200]);

    let snapshot = service.metrics().snapshot();
    assert_eq!(snapshot.total, 4);
    assert_eq!(snapshot.found, 2);
    assert_eq!(snapshot.not_found, 1);
    assert_eq!(snapshot.invalid_input, 1);
}

#[test]
fn test_long_pattern_is_not_found() {
    let service = service();
    let pattern = format!("b{}", "_".repeat(1000));

    let response = service.handle(&SearchRequest::new("bank").with_pattern(pattern.clone()));
    assert_eq!(response, QueryResponse::NotFound);

    let response = service.handle(&SearchRequest::new("bank").with_length(1001).with_pattern(pattern));
    assert_eq!(response.status_code(), 404);
}
