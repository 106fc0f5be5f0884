//! Sliding-window statistics over recent search requests.
//!
//! Wraps an engine reference and counts, over the last
//! [`REQUEST_WINDOW`] requests, how many returned no results. The classic
//! use is surfacing "dead" queries over the last day of minute-resolution
//! traffic.

use crate::error::SearchError;
use crate::index::SearchEngine;
use crate::types::{DocId, Document, DocumentStatus, ExecutionMode};
use std::collections::VecDeque;

/// How many requests the window holds: minutes in a day.
pub const REQUEST_WINDOW: usize = 1440;

/// Tracks empty-result counts over a sliding window of requests.
#[derive(Debug)]
pub struct RequestQueue<'a> {
    engine: &'a SearchEngine,
    /// One flag per request inside the window; `true` means no results.
    requests: VecDeque<bool>,
    no_results: usize,
}

impl<'a> RequestQueue<'a> {
    pub fn new(engine: &'a SearchEngine) -> Self {
        Self {
            engine,
            requests: VecDeque::with_capacity(REQUEST_WINDOW),
            no_results: 0,
        }
    }

    /// Run a default (status `Actual`) search and record its outcome.
    ///
    /// A malformed query propagates its error and is not recorded.
    pub fn add_find_request(&mut self, raw_query: &str) -> Result<Vec<Document>, SearchError> {
        let results = self.engine.find_top_documents(raw_query)?;
        Ok(self.record(results))
    }

    /// Status-filtered variant of [`add_find_request`](Self::add_find_request).
    pub fn add_find_request_with_status(
        &mut self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>, SearchError> {
        let results = self.engine.find_top_documents_with_status(
            ExecutionMode::Sequential,
            raw_query,
            status,
        )?;
        Ok(self.record(results))
    }

    /// Predicate-filtered variant of [`add_find_request`](Self::add_find_request).
    pub fn add_find_request_with<P>(
        &mut self,
        raw_query: &str,
        predicate: P,
    ) -> Result<Vec<Document>, SearchError>
    where
        P: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
    {
        let results =
            self.engine
                .find_top_documents_with(ExecutionMode::Sequential, raw_query, predicate)?;
        Ok(self.record(results))
    }

    /// How many requests inside the window returned no results.
    pub fn no_result_requests(&self) -> usize {
        self.no_results
    }

    fn record(&mut self, results: Vec<Document>) -> Vec<Document> {
        if self.requests.len() == REQUEST_WINDOW {
            if self.requests.pop_front() == Some(true) {
                self.no_results -= 1;
            }
        }
        let empty = results.is_empty();
        self.requests.push_back(empty);
        if empty {
            self.no_results += 1;
        }
        results
    }
}
