//! Word-set deduplication over a corpus with known duplicate classes.

use super::common::duplicates_engine;
use docfind::remove_duplicates;
use std::io;

#[test]
fn duplicate_classes_collapse_to_smallest_id() {
    let mut engine = duplicates_engine();
    assert_eq!(engine.document_count(), 9);

    remove_duplicates(&mut engine, &mut io::sink()).unwrap();

    assert_eq!(engine.document_count(), 5);
    let survivors: Vec<i32> = engine.document_ids().map(|id| id.get()).collect();
    assert_eq!(survivors, vec![1, 2, 6, 8, 9]);
}

#[test]
fn removals_are_reported_in_ascending_id_order() {
    let mut engine = duplicates_engine();
    let mut report = Vec::new();

    remove_duplicates(&mut engine, &mut report).unwrap();

    let report = String::from_utf8(report).unwrap();
    assert_eq!(
        report,
        "Found duplicate document id 3\n\
         Found duplicate document id 4\n\
         Found duplicate document id 5\n\
         Found duplicate document id 7\n"
    );
}

#[test]
fn deduplication_is_idempotent() {
    let mut engine = duplicates_engine();
    remove_duplicates(&mut engine, &mut io::sink()).unwrap();

    let mut report = Vec::new();
    remove_duplicates(&mut engine, &mut report).unwrap();

    assert_eq!(engine.document_count(), 5);
    assert!(report.is_empty());
}

#[test]
fn surviving_documents_still_rank() {
    let mut engine = duplicates_engine();
    remove_duplicates(&mut engine, &mut io::sink()).unwrap();

    let found = engine.find_top_documents("curly hair").unwrap();
    let ids: Vec<i32> = found.iter().map(|document| document.id.get()).collect();
    assert_eq!(ids, vec![2, 9]);
}
