//! Batch query execution.
//!
//! Runs many independent queries against one engine at once. The
//! parallelism is across queries (each single query runs its sequential
//! path), and output order always mirrors input order.

use crate::error::SearchError;
use crate::index::SearchEngine;
use crate::types::Document;
use rayon::prelude::*;

/// Run every query in parallel; `result[i]` answers `queries[i]`.
///
/// Fails with the error of a malformed query if any query fails to parse.
pub fn process_queries<Q>(
    engine: &SearchEngine,
    queries: &[Q],
) -> Result<Vec<Vec<Document>>, SearchError>
where
    Q: AsRef<str> + Sync,
{
    queries
        .par_iter()
        .map(|query| engine.find_top_documents(query.as_ref()))
        .collect()
}

/// [`process_queries`] with the per-query result lists concatenated,
/// preserving query order.
pub fn process_queries_joined<Q>(
    engine: &SearchEngine,
    queries: &[Q],
) -> Result<Vec<Document>, SearchError>
where
    Q: AsRef<str> + Sync,
{
    Ok(process_queries(engine, queries)?
        .into_iter()
        .flatten()
        .collect())
}
