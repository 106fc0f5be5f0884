//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical corpora so every suite ranks against the same
//! documents.

#![doc(hidden)]

use crate::index::SearchEngine;
use crate::types::{DocId, DocumentStatus};

/// Engine with the given stop words and documents, all `Actual`.
///
/// # Panics
///
/// Panics on invalid fixtures; fixtures are compile-time constants in
/// practice.
pub fn engine_with_documents(stop_words: &str, docs: &[(i32, &str, &[i32])]) -> SearchEngine {
    let mut engine =
        SearchEngine::from_stop_words_text(stop_words).expect("fixture stop words are valid");
    for &(id, text, ratings) in docs {
        engine
            .add_document(DocId(id), text, DocumentStatus::Actual, ratings)
            .expect("fixture documents are valid");
    }
    engine
}

/// Five cat-and-dog documents with scattered ids; the canonical ranking
/// corpus.
pub fn animals_engine() -> SearchEngine {
    engine_with_documents(
        "",
        &[
            (0, "dog in the cat cat happy", &[1]),
            (10, "cat and cat and happy cat", &[5]),
            (24, "dog the city dog is full happy", &[1]),
            (13, "cat and cat and cat cat", &[1]),
            (43, "cat in cat and happy cat", &[1]),
        ],
    )
}

/// The same five texts under ids 4..0 with one document per status.
pub fn statuses_engine() -> SearchEngine {
    let mut engine = SearchEngine::from_stop_words_text("").expect("no stop words");
    let docs = [
        (4, "dog in the cat cat happy", DocumentStatus::Actual, 1),
        (3, "cat and cat and happy cat", DocumentStatus::Irrelevant, 5),
        (2, "dog the city dog is full happy", DocumentStatus::Banned, 1),
        (1, "cat and cat and cat cat", DocumentStatus::Actual, 1),
        (0, "cat in cat and happy cat", DocumentStatus::Removed, 1),
    ];
    for (id, text, status, rating) in docs {
        engine
            .add_document(DocId(id), text, status, &[rating])
            .expect("fixture documents are valid");
    }
    engine
}

/// Five pet documents (stop words `and with`); the canonical batch-query
/// corpus.
pub fn pets_engine() -> SearchEngine {
    engine_with_documents(
        "and with",
        &[
            (1, "funny pet and nasty rat", &[1, 2]),
            (2, "funny pet with curly hair", &[1, 2]),
            (3, "funny pet and not very nasty rat", &[1, 2]),
            (4, "pet with rat and rat and rat", &[1, 2]),
            (5, "nasty rat with curly hair", &[1, 2]),
        ],
    )
}

/// Nine pet documents (stop words `and with`) containing four duplicates;
/// ids 1, 2, 6, 8, and 9 are the class survivors.
pub fn duplicates_engine() -> SearchEngine {
    engine_with_documents(
        "and with",
        &[
            (1, "funny pet and nasty rat", &[7, 2, 7]),
            (2, "funny pet with curly hair", &[1, 2]),
            // Literal duplicate of id 2.
            (3, "funny pet with curly hair", &[1, 2]),
            // Differs from id 2 only in stop words.
            (4, "funny pet and curly hair", &[1, 2]),
            // Same word set as id 1, multiplicities differ.
            (5, "funny funny pet and nasty nasty rat", &[1, 2]),
            (6, "funny pet and not very nasty rat", &[1, 2]),
            // Same word set as id 6 in another order.
            (7, "very nasty rat and not very funny pet", &[1, 2]),
            (8, "pet with rat and rat and rat", &[1, 2]),
            (9, "nasty rat with curly hair", &[1, 2]),
        ],
    )
}
