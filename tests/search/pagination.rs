//! Paginating ranked results.

use super::common::animals_engine;
use docfind::paginate;

#[test]
fn result_pages_have_fixed_size() {
    let engine = animals_engine();
    let found = engine.find_top_documents("dog cat").unwrap();
    assert_eq!(found.len(), 5);

    assert_eq!(paginate(&found, 2).len(), 3);
    assert_eq!(paginate(&found, 3).len(), 2);
    assert_eq!(paginate(&found, 5).len(), 1);
}

#[test]
fn pages_concatenate_back_to_the_input() {
    let engine = animals_engine();
    let found = engine.find_top_documents("dog cat").unwrap();

    let rejoined: Vec<_> = paginate(&found, 2).into_iter().flatten().copied().collect();
    assert_eq!(rejoined, found);
}
