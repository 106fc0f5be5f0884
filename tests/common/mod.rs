//! Shared test utilities and fixtures.

#![allow(dead_code)]

use docfind::Document;

// Re-export canonical corpora from docfind::testing.
pub use docfind::testing::{
    animals_engine, duplicates_engine, engine_with_documents, pets_engine, statuses_engine,
};

/// Project a result list onto raw document ids.
pub fn ids(documents: &[Document]) -> Vec<i32> {
    documents.iter().map(|document| document.id.get()).collect()
}
