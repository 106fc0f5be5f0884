//! Relevance ordering, tie-breaking, and rating arithmetic.

use super::common::{animals_engine, ids};
use docfind::{DocId, DocumentStatus, ExecutionMode, SearchEngine, RELEVANCE_EPSILON};

#[test]
fn results_sort_by_relevance_then_rating() {
    let engine = animals_engine();
    let found = engine.find_top_documents("cat").unwrap();

    // 13 has the highest tf; 10 and 43 tie on relevance and are split by
    // rating (5 vs 1); 24 contains no "cat" at all.
    assert_eq!(ids(&found), vec![13, 10, 43, 0]);
}

#[test]
fn relevance_is_idf_weighted_term_frequency() {
    let engine = animals_engine();
    let found = engine.find_top_documents("cat").unwrap();

    let idf_cat = (5.0f64 / 4.0).ln();
    let expected = [
        idf_cat * 4.0 / 6.0,
        idf_cat * 3.0 / 6.0,
        idf_cat * 3.0 / 6.0,
        idf_cat * 2.0 / 6.0,
    ];
    for (document, expected) in found.iter().zip(expected) {
        assert!(
            (document.relevance - expected).abs() < RELEVANCE_EPSILON,
            "id {} relevance {} != {}",
            document.id,
            document.relevance,
            expected
        );
    }
}

#[test]
fn caller_predicate_filters_results() {
    let engine = animals_engine();
    let found = engine
        .find_top_documents_with(ExecutionMode::Sequential, "cat", |id, _, _| {
            id.get() % 2 == 0
        })
        .unwrap();
    assert_eq!(ids(&found), vec![10, 0]);
}

#[test]
fn rating_is_truncated_mean_near_positive_limit() {
    let mut engine = SearchEngine::from_stop_words_text("").unwrap();
    engine
        .add_document(
            DocId(1),
            "cat in the city. cat is full and happy",
            DocumentStatus::Actual,
            &[i32::MAX - 50, 20, 20, 10],
        )
        .unwrap();

    let found = engine.find_top_documents("cat").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].rating, i32::MAX / 4);
}

#[test]
fn rating_is_truncated_mean_near_negative_limit() {
    let mut engine = SearchEngine::from_stop_words_text("").unwrap();
    engine
        .add_document(
            DocId(1),
            "cat in the city. cat is full and happy",
            DocumentStatus::Actual,
            &[i32::MIN + 5, -2, -3],
        )
        .unwrap();

    let found = engine.find_top_documents("cat").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].rating, i32::MIN / 3);
}

#[test]
fn at_most_five_results_are_returned() {
    let mut engine = SearchEngine::from_stop_words_text("").unwrap();
    for id in 0..20 {
        engine
            .add_document(DocId(id), "cat", DocumentStatus::Actual, &[id])
            .unwrap();
    }

    let found = engine.find_top_documents("cat").unwrap();
    assert_eq!(found.len(), 5);
    // All relevances tie at zero idf, so the five best ratings win.
    assert_eq!(ids(&found), vec![19, 18, 17, 16, 15]);
}
