//! Ranked retrieval and document matching.
//!
//! The ranker scores documents with TF-IDF: each plus-word contributes
//! `tf * ln(N / postings)` to every document it appears in, subject to the
//! caller's predicate; minus-words then prune whole documents. Results are
//! sorted by `(relevance desc, rating desc)` and truncated to
//! [`MAX_TOP_DOCUMENTS`].
//!
//! Contributions from distinct `(word, document)` pairs combine
//! associatively, so the parallel mode equals the sequential sum up to
//! floating-point reassociation, far below the comparison epsilon.

use crate::accumulator::ShardedAccumulator;
use crate::error::SearchError;
use crate::index::SearchEngine;
use crate::query::Query;
use crate::types::{
    DocId, Document, DocumentStatus, ExecutionMode, MAX_TOP_DOCUMENTS, RELEVANCE_EPSILON,
};
use rayon::prelude::*;
use std::cmp::Ordering;

/// Bucket count of the per-query relevance accumulator. Non-semantic; any
/// positive value produces the same drained map.
const RELEVANCE_BUCKETS: usize = 6;

impl SearchEngine {
    // =========================================================================
    // RANKED RETRIEVAL
    // =========================================================================

    /// Top documents for `raw_query` with status `Actual`, sequentially.
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>, SearchError> {
        self.find_top_documents_with_status(
            ExecutionMode::Sequential,
            raw_query,
            DocumentStatus::Actual,
        )
    }

    /// Parallel twin of [`find_top_documents`](Self::find_top_documents).
    pub fn find_top_documents_parallel(
        &self,
        raw_query: &str,
    ) -> Result<Vec<Document>, SearchError> {
        self.find_top_documents_with_status(
            ExecutionMode::Parallel,
            raw_query,
            DocumentStatus::Actual,
        )
    }

    /// Top documents restricted to one status.
    pub fn find_top_documents_with_status(
        &self,
        mode: ExecutionMode,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>, SearchError> {
        self.find_top_documents_with(mode, raw_query, move |_, document_status, _| {
            document_status == status
        })
    }

    /// The root query form: rank every document accepted by `predicate`.
    ///
    /// The predicate sees `(id, status, rating)` and runs once per matching
    /// posting, possibly from multiple rayon workers at once.
    pub fn find_top_documents_with<P>(
        &self,
        mode: ExecutionMode,
        raw_query: &str,
        predicate: P,
    ) -> Result<Vec<Document>, SearchError>
    where
        P: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
    {
        let query = self.parse_query(raw_query)?;
        let mut matched = self.find_all_documents(mode, &query, &predicate);

        matched.sort_by(|a, b| {
            if (a.relevance - b.relevance).abs() < RELEVANCE_EPSILON {
                b.rating.cmp(&a.rating)
            } else {
                b.relevance
                    .partial_cmp(&a.relevance)
                    .unwrap_or(Ordering::Equal)
            }
        });
        matched.truncate(MAX_TOP_DOCUMENTS);
        Ok(matched)
    }

    /// Score every document matching the query, unsorted.
    fn find_all_documents<P>(
        &self,
        mode: ExecutionMode,
        query: &Query,
        predicate: &P,
    ) -> Vec<Document>
    where
        P: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
    {
        let relevance = ShardedAccumulator::new(RELEVANCE_BUCKETS);

        for word in &query.plus_words {
            let Some(postings) = self.postings(word) else {
                continue;
            };
            let idf = self.inverse_document_freq(postings.len());
            let score_posting = |(&doc_id, &tf): (&DocId, &f64)| {
                let Some(data) = self.document_data(doc_id) else {
                    return;
                };
                if predicate(doc_id, data.status, data.rating) {
                    *relevance.at(doc_id) += tf * idf;
                }
            };
            match mode {
                ExecutionMode::Sequential => postings.iter().for_each(score_posting),
                ExecutionMode::Parallel => postings.par_iter().for_each(score_posting),
            }
        }

        let mut by_document = relevance.drain();
        for word in &query.minus_words {
            let Some(postings) = self.postings(word) else {
                continue;
            };
            for doc_id in postings.keys() {
                by_document.remove(doc_id);
            }
        }

        by_document
            .into_iter()
            .filter_map(|(id, relevance)| {
                self.document_data(id).map(|data| Document {
                    id,
                    relevance,
                    rating: data.rating,
                })
            })
            .collect()
    }

    /// `ln(N / postings)` for a word with `posting_count` postings.
    ///
    /// Only meaningful for words that are in the index; the ranker never
    /// calls this for a word without postings.
    fn inverse_document_freq(&self, posting_count: usize) -> f64 {
        (self.document_count() as f64 / posting_count as f64).ln()
    }

    // =========================================================================
    // MATCHING
    // =========================================================================

    /// Which plus-words of `raw_query` occur in document `id`.
    ///
    /// Any minus-word present in the document empties the result. Returns
    /// `Ok(None)` for an id the index does not hold; ids obtained from
    /// [`document_ids`](Self::document_ids) always match.
    pub fn match_document(
        &self,
        raw_query: &str,
        id: DocId,
    ) -> Result<Option<(Vec<String>, DocumentStatus)>, SearchError> {
        let query = self.parse_query(raw_query)?;
        let Some(data) = self.document_data(id) else {
            return Ok(None);
        };

        for word in &query.minus_words {
            if self.word_in_document(word, id) {
                return Ok(Some((Vec::new(), data.status)));
            }
        }
        let matched = query
            .plus_words
            .iter()
            .filter(|word| self.word_in_document(word.as_str(), id))
            .cloned()
            .collect();
        Ok(Some((matched, data.status)))
    }

    /// Parallel twin of [`match_document`](Self::match_document); the
    /// matched set is identical, the order of words is unspecified.
    pub fn match_document_parallel(
        &self,
        raw_query: &str,
        id: DocId,
    ) -> Result<Option<(Vec<String>, DocumentStatus)>, SearchError> {
        let query = self.parse_query(raw_query)?;
        let Some(data) = self.document_data(id) else {
            return Ok(None);
        };

        if query
            .minus_words
            .par_iter()
            .any(|word| self.word_in_document(word, id))
        {
            return Ok(Some((Vec::new(), data.status)));
        }
        let matched = query
            .plus_words
            .par_iter()
            .filter(|word| self.word_in_document(word.as_str(), id))
            .cloned()
            .collect();
        Ok(Some((matched, data.status)))
    }
}
