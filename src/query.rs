//! Query parsing.
//!
//! A raw query is a space-separated list of terms. A leading `-` marks a
//! term the results must not contain. Stop words are dropped after the `-`
//! handling, so `-the` with `the` as a stop word is silently ignored rather
//! than rejected.

use crate::error::SearchError;
use crate::text::{is_valid_word, split_into_words};
use std::collections::BTreeSet;

/// A parsed query: deduplicated plus- and minus-word sets, iterable in
/// lexicographic order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Query {
    pub plus_words: BTreeSet<String>,
    pub minus_words: BTreeSet<String>,
}

/// One token of a raw query, classified.
struct QueryWord<'a> {
    data: &'a str,
    is_minus: bool,
}

fn parse_query_word(token: &str) -> Result<QueryWord<'_>, SearchError> {
    let (data, is_minus) = match token.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (token, false),
    };
    if data.is_empty() || data.starts_with('-') || !is_valid_word(data) {
        return Err(SearchError::InvalidQueryWord {
            word: token.to_string(),
        });
    }
    Ok(QueryWord { data, is_minus })
}

impl Query {
    /// Parse a raw query, dropping stop words.
    ///
    /// Fails on the first malformed token; a query that parses has only
    /// valid, non-stop words in its two sets.
    pub fn parse(
        raw_query: &str,
        is_stop_word: impl Fn(&str) -> bool,
    ) -> Result<Self, SearchError> {
        let mut query = Query::default();
        for token in split_into_words(raw_query) {
            let word = parse_query_word(token)?;
            if is_stop_word(word.data) {
                continue;
            }
            let target = if word.is_minus {
                &mut query.minus_words
            } else {
                &mut query.plus_words
            };
            target.insert(word.data.to_string());
        }
        Ok(query)
    }
}
