//! In-memory TF-IDF text search over short documents.
//!
//! This crate indexes caller-supplied documents, answers ranked full-text
//! queries with required and excluded terms, and executes the heavy
//! operations either sequentially or across rayon's work-stealing pool.
//! There is no network surface and no persistence; the engine lives and
//! dies with the process.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────┐    ┌────────────┐    ┌─────────────────┐
//! │  text.rs  │───▶│  vocab.rs  │───▶│    index.rs     │
//! │ (tokenize,│    │ (interned  │    │ (SearchEngine,  │
//! │  validate)│    │   words)   │    │  add/remove)    │
//! └───────────┘    └────────────┘    └─────────────────┘
//!       │                                     │
//!       ▼                                     ▼
//! ┌───────────┐    ┌────────────────┐   ┌───────────────┐
//! │ query.rs  │───▶│   search.rs    │◀──│accumulator.rs │
//! │ (plus and │    │ (TF-IDF ranker,│   │ (sharded sums)│
//! │minus sets)│    │    matcher)    │   └───────────────┘
//! └───────────┘    └────────────────┘
//! ```
//!
//! On top of the core sit [`remove_duplicates`] (word-set deduplication),
//! [`process_queries`]/[`process_queries_joined`] (parallel batch
//! execution), [`RequestQueue`] (sliding-window request stats), and
//! [`paginate`].
//!
//! # Concurrency contract
//!
//! Single-writer, multi-reader. Any number of threads may run read-only
//! queries against a `&SearchEngine` concurrently; mutation requires
//! `&mut SearchEngine` and therefore exclusivity. Inside one parallel
//! query, per-document relevance sums are combined through the sharded
//! accumulator, so results equal the sequential ones up to floating-point
//! reassociation.
//!
//! # Usage
//!
//! ```
//! use docfind::{DocId, DocumentStatus, SearchEngine};
//!
//! let mut engine = SearchEngine::from_stop_words_text("in the")?;
//! engine.add_document(
//!     DocId(1),
//!     "cat in the city",
//!     DocumentStatus::Actual,
//!     &[7, 2, 7],
//! )?;
//!
//! let found = engine.find_top_documents("cat -dog")?;
//! assert_eq!(found[0].id, DocId(1));
//! # Ok::<(), docfind::SearchError>(())
//! ```

mod accumulator;
mod batch;
mod dedup;
mod error;
mod index;
mod pagination;
mod query;
mod request_queue;
mod search;
mod text;
pub mod testing;
mod types;
mod vocab;

pub use accumulator::{Access, ShardedAccumulator};
pub use batch::{process_queries, process_queries_joined};
pub use dedup::remove_duplicates;
pub use error::SearchError;
pub use index::SearchEngine;
pub use pagination::paginate;
pub use request_queue::{RequestQueue, REQUEST_WINDOW};
pub use text::{is_valid_word, split_into_words};
pub use types::{
    DocId, Document, DocumentStatus, ExecutionMode, MAX_TOP_DOCUMENTS, RELEVANCE_EPSILON,
};
pub use vocab::{Vocabulary, WordId};
