//! Error type for index mutation and query parsing.

use crate::types::DocId;
use std::fmt;

/// Everything that can go wrong when feeding text into the engine.
///
/// All failures are synchronous and fail-fast: an operation that returns an
/// error has not mutated the index at all (validation runs to completion
/// before the first write).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A document or stop word contains a control character (byte < 0x20).
    InvalidWord { word: String },
    /// `add_document` was called with a negative id, or an id that is
    /// already present in the index.
    InvalidDocId { id: DocId },
    /// A query token is just `-`, starts with `--`, or contains a control
    /// character.
    InvalidQueryWord { word: String },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InvalidWord { word } => {
                write!(f, "word {:?} contains a control character", word)
            }
            SearchError::InvalidDocId { id } => {
                write!(f, "document id {} is negative or already present", id)
            }
            SearchError::InvalidQueryWord { word } => {
                write!(f, "query word {:?} is malformed", word)
            }
        }
    }
}

impl std::error::Error for SearchError {}
