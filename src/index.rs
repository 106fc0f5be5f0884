//! Engine storage: the inverted index and its mutation paths.
//!
//! [`SearchEngine`] owns two cross-linked mappings plus per-document
//! metadata:
//!
//! ```text
//! word_to_docs: word  -> { doc -> tf }     (postings, drives ranking)
//! doc_to_words: doc   -> { word -> tf }    (transpose, drives removal)
//! documents:    doc   -> { rating, status }
//! document_ids: sorted set of live ids
//! ```
//!
//! Words are interned once in the [`Vocabulary`](crate::vocab::Vocabulary)
//! and referenced everywhere else by [`WordId`] handle.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - Every posting `(w, d)` has its mirror `(d, w)` with the same tf value.
//! - Every id in `document_ids` has metadata and a `doc_to_words` entry.
//! - Per-document tf values sum to 1.0 up to rounding.
//! - After removal, no entry referencing the id remains in either mapping.
//!   Parallel removal may leave *empty* posting maps behind; every read
//!   path treats those as absent.
//!
//! Use [`SearchEngine::check_well_formed`] in tests rather than trusting
//! yourself to preserve these by hand.

use crate::error::SearchError;
use crate::query::Query;
use crate::text::{is_valid_word, split_into_words};
use crate::types::{DocId, DocumentStatus};
use crate::vocab::{Vocabulary, WordId};
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

/// Per-document metadata recorded at insertion.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DocumentData {
    pub rating: i32,
    pub status: DocumentStatus,
}

/// In-memory full-text index over short documents.
///
/// Single-writer, multi-reader: concurrent read-only queries are safe;
/// mixing `add_document`/`remove_document` with concurrent queries is the
/// caller's race to lose.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    vocab: Vocabulary,
    stop_words: BTreeSet<String>,
    word_to_docs: BTreeMap<WordId, BTreeMap<DocId, f64>>,
    doc_to_words: BTreeMap<DocId, BTreeMap<WordId, f64>>,
    documents: BTreeMap<DocId, DocumentData>,
    document_ids: BTreeSet<DocId>,
}

impl SearchEngine {
    /// Create an engine with the given stop words.
    ///
    /// Empty strings are dropped; any stop word containing a control
    /// character fails with [`SearchError::InvalidWord`].
    pub fn new<I>(stop_words: I) -> Result<Self, SearchError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut unique = BTreeSet::new();
        for word in stop_words {
            let word = word.as_ref();
            if !is_valid_word(word) {
                return Err(SearchError::InvalidWord {
                    word: word.to_string(),
                });
            }
            if !word.is_empty() {
                unique.insert(word.to_string());
            }
        }
        Ok(Self {
            stop_words: unique,
            ..Self::default()
        })
    }

    /// Shortcut: tokenize `stop_words_text` on spaces and build from the
    /// resulting words.
    pub fn from_stop_words_text(stop_words_text: &str) -> Result<Self, SearchError> {
        Self::new(split_into_words(stop_words_text))
    }

    // =========================================================================
    // MUTATION
    // =========================================================================

    /// Index a document under `id`.
    ///
    /// The rating stored for the document is the truncated mean of
    /// `ratings` (0 when empty). Fails with [`SearchError::InvalidDocId`]
    /// for a negative or already-present id and
    /// [`SearchError::InvalidWord`] for a token carrying a control
    /// character; on failure nothing is mutated, not even the vocabulary.
    pub fn add_document(
        &mut self,
        id: DocId,
        text: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<(), SearchError> {
        if !id.is_valid() || self.documents.contains_key(&id) {
            return Err(SearchError::InvalidDocId { id });
        }
        let words = self.split_into_words_no_stop(text)?;

        let word_freqs = self.doc_to_words.entry(id).or_default();
        if !words.is_empty() {
            let inv_word_count = 1.0 / words.len() as f64;
            for word in words {
                let word_id = self.vocab.intern(word);
                *word_freqs.entry(word_id).or_insert(0.0) += inv_word_count;
            }
            for (&word_id, &tf) in word_freqs.iter() {
                self.word_to_docs.entry(word_id).or_default().insert(id, tf);
            }
        }

        self.document_ids.insert(id);
        self.documents.insert(
            id,
            DocumentData {
                rating: compute_average_rating(ratings),
                status,
            },
        );
        Ok(())
    }

    /// Remove a document and every posting that references it.
    ///
    /// Words whose last posting this was are dropped from the word table.
    /// A missing `id` is a no-op.
    pub fn remove_document(&mut self, id: DocId) {
        let Some(words) = self.doc_to_words.remove(&id) else {
            return;
        };
        for &word_id in words.keys() {
            let now_empty = match self.word_to_docs.get_mut(&word_id) {
                Some(postings) => {
                    postings.remove(&id);
                    postings.is_empty()
                }
                None => false,
            };
            if now_empty {
                self.word_to_docs.remove(&word_id);
            }
        }
        self.document_ids.remove(&id);
        self.documents.remove(&id);
    }

    /// Parallel variant of [`remove_document`](Self::remove_document).
    ///
    /// Erases this document's posting from each of its words across rayon
    /// workers. Posting maps that become empty are left in the word table;
    /// the read paths skip them, so the observable state is identical to
    /// the sequential version.
    pub fn remove_document_parallel(&mut self, id: DocId) {
        let Some(words) = self.doc_to_words.remove(&id) else {
            return;
        };
        // Distinct entries of a BTreeMap cannot be mutated from multiple
        // threads in place, so the document's own entries are detached,
        // updated in parallel, and reattached.
        let mut detached: Vec<(WordId, BTreeMap<DocId, f64>)> = words
            .keys()
            .filter_map(|&word_id| {
                self.word_to_docs
                    .remove(&word_id)
                    .map(|postings| (word_id, postings))
            })
            .collect();
        detached.par_iter_mut().for_each(|(_, postings)| {
            postings.remove(&id);
        });
        self.word_to_docs.extend(detached);
        self.document_ids.remove(&id);
        self.documents.remove(&id);
    }

    // =========================================================================
    // READ ACCESSORS
    // =========================================================================

    /// Number of indexed documents.
    #[inline]
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Iterate over document ids in ascending order.
    pub fn document_ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.document_ids.iter().copied()
    }

    /// Term frequencies of one document, ordered by word.
    ///
    /// An absent id yields an empty map.
    pub fn get_word_frequencies(&self, id: DocId) -> BTreeMap<&str, f64> {
        match self.doc_to_words.get(&id) {
            Some(words) => words
                .iter()
                .map(|(&word_id, &tf)| (self.vocab.resolve(word_id), tf))
                .collect(),
            None => BTreeMap::new(),
        }
    }

    pub(crate) fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Postings for a word, with empty maps (parallel-removal leftovers)
    /// reported as absent.
    pub(crate) fn postings(&self, word: &str) -> Option<&BTreeMap<DocId, f64>> {
        let word_id = self.vocab.lookup(word)?;
        self.word_to_docs
            .get(&word_id)
            .filter(|postings| !postings.is_empty())
    }

    pub(crate) fn word_in_document(&self, word: &str, id: DocId) -> bool {
        self.postings(word)
            .map_or(false, |postings| postings.contains_key(&id))
    }

    pub(crate) fn document_data(&self, id: DocId) -> Option<&DocumentData> {
        self.documents.get(&id)
    }

    /// The document's word set (frequencies and order discarded).
    pub(crate) fn word_set(&self, id: DocId) -> BTreeSet<WordId> {
        match self.doc_to_words.get(&id) {
            Some(words) => words.keys().copied().collect(),
            None => BTreeSet::new(),
        }
    }

    pub(crate) fn parse_query(&self, raw_query: &str) -> Result<Query, SearchError> {
        Query::parse(raw_query, |word| self.is_stop_word(word))
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    /// Tokenize a document, validating every token and dropping stop words.
    ///
    /// Runs to completion before the caller mutates anything, which is what
    /// keeps failed adds atomic.
    fn split_into_words_no_stop<'t>(&self, text: &'t str) -> Result<Vec<&'t str>, SearchError> {
        let mut words = Vec::new();
        for word in split_into_words(text) {
            if !is_valid_word(word) {
                return Err(SearchError::InvalidWord {
                    word: word.to_string(),
                });
            }
            if !self.is_stop_word(word) {
                words.push(word);
            }
        }
        Ok(words)
    }

    /// Verify the cross-linking invariants hold (debug/test builds only).
    #[cfg(any(debug_assertions, test))]
    pub fn check_well_formed(&self) -> bool {
        // document_ids, documents, and doc_to_words must agree exactly.
        if !self
            .document_ids
            .iter()
            .eq(self.documents.keys())
            || !self.document_ids.iter().eq(self.doc_to_words.keys())
        {
            return false;
        }

        // Posting symmetry: (w, d, tf) <-> (d, w, tf). Empty posting maps
        // are legal leftovers of parallel removal.
        for (&word_id, postings) in &self.word_to_docs {
            if word_id.as_usize() >= self.vocab.len() {
                return false;
            }
            for (doc_id, tf) in postings {
                match self.doc_to_words.get(doc_id) {
                    Some(words) if words.get(&word_id) == Some(tf) => {}
                    _ => return false,
                }
            }
        }
        for (doc_id, words) in &self.doc_to_words {
            for (word_id, tf) in words {
                match self.word_to_docs.get(word_id) {
                    Some(postings) if postings.get(doc_id) == Some(tf) => {}
                    _ => return false,
                }
            }
            // Term frequencies of a non-empty document sum to one.
            if !words.is_empty() {
                let mass: f64 = words.values().sum();
                if (mass - 1.0).abs() > 1e-9 {
                    return false;
                }
            }
        }
        true
    }
}

/// Truncated arithmetic mean of the ratings; empty input yields 0.
///
/// The sum wraps on overflow. Callers feeding ratings near `i32::MAX` get
/// the wrapped sum divided by the count, which is the documented behavior
/// for extreme inputs rather than a panic.
fn compute_average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum = ratings
        .iter()
        .fold(0i32, |total, &rating| total.wrapping_add(rating));
    sum / ratings.len() as i32
}
