//! Sequential/parallel equivalence of the heavy operations.

use super::common::{animals_engine, ids, pets_engine, statuses_engine};
use docfind::{DocumentStatus, ExecutionMode, RELEVANCE_EPSILON};

#[test]
fn parallel_find_matches_sequential() {
    let engine = animals_engine();
    for query in ["cat", "cat dog", "happy -city", "dog city -full"] {
        let sequential = engine.find_top_documents(query).unwrap();
        let parallel = engine.find_top_documents_parallel(query).unwrap();

        assert_eq!(ids(&sequential), ids(&parallel), "query {:?}", query);
        for (a, b) in sequential.iter().zip(&parallel) {
            assert_eq!(a.rating, b.rating);
            assert!((a.relevance - b.relevance).abs() < RELEVANCE_EPSILON);
        }
    }
}

#[test]
fn parallel_find_respects_status_filters() {
    let engine = statuses_engine();
    let sequential = engine
        .find_top_documents_with_status(
            ExecutionMode::Sequential,
            "cat dog",
            DocumentStatus::Banned,
        )
        .unwrap();
    let parallel = engine
        .find_top_documents_with_status(ExecutionMode::Parallel, "cat dog", DocumentStatus::Banned)
        .unwrap();
    assert_eq!(ids(&sequential), ids(&parallel));
}

#[test]
fn parallel_match_finds_the_same_word_set() {
    let engine = pets_engine();
    for id in engine.document_ids().collect::<Vec<_>>() {
        let (mut sequential, status_a) = engine
            .match_document("funny nasty rat -unknown", id)
            .unwrap()
            .unwrap();
        let (mut parallel, status_b) = engine
            .match_document_parallel("funny nasty rat -unknown", id)
            .unwrap()
            .unwrap();

        sequential.sort();
        parallel.sort();
        assert_eq!(sequential, parallel);
        assert_eq!(status_a, status_b);
    }
}

#[test]
fn parallel_match_empties_on_minus_hit() {
    let engine = pets_engine();
    let (words, _) = engine
        .match_document_parallel("funny pet -rat", docfind::DocId(1))
        .unwrap()
        .unwrap();
    assert!(words.is_empty());
}

#[test]
fn parallel_removal_keeps_searches_identical() {
    let mut sequential = pets_engine();
    let mut parallel = pets_engine();

    sequential.remove_document(docfind::DocId(3));
    parallel.remove_document_parallel(docfind::DocId(3));

    assert_eq!(sequential.document_count(), parallel.document_count());
    for query in ["nasty rat", "funny pet", "not very"] {
        let a = sequential.find_top_documents(query).unwrap();
        let b = parallel.find_top_documents(query).unwrap();
        assert_eq!(ids(&a), ids(&b), "query {:?}", query);
    }
}
