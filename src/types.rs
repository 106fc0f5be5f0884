// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The value types of the search engine.
//!
//! These types cross the public API boundary: callers supply document ids,
//! statuses, and ratings on insertion, and get [`Document`] values back from
//! ranked queries.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **DocId**: ids accepted by the index are non-negative. Negative ids are
//!   representable (callers can construct them) but rejected at insertion.
//! - **Document**: `relevance` is a finite TF-IDF sum; `rating` is the
//!   truncated arithmetic mean of the ratings supplied at insertion.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of documents a ranked query returns.
pub const MAX_TOP_DOCUMENTS: usize = 5;

/// Relevance values closer than this are considered equal when sorting;
/// ties fall through to the rating comparison.
pub const RELEVANCE_EPSILON: f64 = 1e-6;

// =============================================================================
// NEWTYPES
// =============================================================================

/// Type-safe document identifier.
///
/// Prevents accidentally passing a rating or a bucket index where a document
/// id is expected. Ids are caller-supplied; the index only accepts values
/// `>= 0` that are not already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct DocId(pub i32);

impl DocId {
    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> i32 {
        self.0
    }

    /// Whether this id is in the range the index accepts.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.0 >= 0
    }
}

impl From<i32> for DocId {
    fn from(id: i32) -> Self {
        DocId(id)
    }
}

impl From<DocId> for i32 {
    fn from(id: DocId) -> Self {
        id.0
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// DOCUMENT TYPES
// =============================================================================

/// Lifecycle tag attached to every indexed document.
///
/// Default searches return only `Actual` documents; the other statuses are
/// reachable through the status and predicate query forms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentStatus {
    /// Live document, returned by default searches.
    #[default]
    Actual,
    /// Indexed but deprioritized; only returned when asked for explicitly.
    Irrelevant,
    /// Blocked from default results.
    Banned,
    /// Marked deleted but still present in the index.
    Removed,
}

/// What callers get back from a ranked query.
///
/// Results are ordered by `(relevance desc, rating desc)`, with relevance
/// values within [`RELEVANCE_EPSILON`] of each other treated as equal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub relevance: f64,
    pub rating: i32,
}

// =============================================================================
// SCHEDULING
// =============================================================================

/// Scheduling mode for the heavy operations.
///
/// `Parallel` fans work out over rayon's work-stealing pool; `Sequential`
/// runs on the calling thread. Both produce the same results (relevance may
/// differ by floating-point reassociation, bounded well below
/// [`RELEVANCE_EPSILON`] in practice).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecutionMode {
    #[default]
    Sequential,
    Parallel,
}
