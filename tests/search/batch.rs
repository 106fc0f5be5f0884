//! Parallel batch execution over the pets corpus.

use super::common::{ids, pets_engine};
use docfind::{process_queries, process_queries_joined};

const QUERIES: [&str; 3] = ["nasty rat -not", "not very funny nasty pet", "curly hair"];

#[test]
fn per_query_result_counts() {
    let engine = pets_engine();
    let results = process_queries(&engine, &QUERIES).unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].len(), 3);
    assert_eq!(results[1].len(), 5);
    assert_eq!(results[2].len(), 2);
}

#[test]
fn joined_results_preserve_query_order() {
    let engine = pets_engine();
    let joined = process_queries_joined(&engine, &QUERIES).unwrap();

    assert_eq!(joined.len(), 10);
    assert_eq!(ids(&joined), vec![1, 5, 4, 3, 1, 2, 5, 4, 2, 5]);
}

#[test]
fn batch_matches_individual_queries() {
    let engine = pets_engine();
    let results = process_queries(&engine, &QUERIES).unwrap();

    for (query, batch_result) in QUERIES.iter().zip(&results) {
        let single = engine.find_top_documents(query).unwrap();
        assert_eq!(&single, batch_result);
    }
}

#[test]
fn a_bad_query_anywhere_fails_the_whole_batch() {
    let engine = pets_engine();
    assert!(process_queries(&engine, &["nasty rat", "cat --dog"]).is_err());
    assert!(process_queries_joined(&engine, &["nasty rat", "-"]).is_err());
}

#[test]
fn empty_batch_yields_empty_results() {
    let engine = pets_engine();
    let no_queries: [&str; 0] = [];
    assert!(process_queries(&engine, &no_queries).unwrap().is_empty());
    assert!(process_queries_joined(&engine, &no_queries).unwrap().is_empty());
}
