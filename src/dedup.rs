//! Duplicate document removal.
//!
//! Two documents are duplicates iff their word *sets* are equal, with
//! frequencies and order discarded (stop words never enter the index, so
//! documents differing only in stop words collapse too). Within each
//! equivalence class the smallest id survives.

use crate::index::SearchEngine;
use crate::vocab::WordId;
use std::collections::{BTreeSet, HashSet};
use std::io::{self, Write};

/// Remove every document whose word set matches an earlier document.
///
/// Ids are scanned in ascending order; each removal is reported to `report`
/// as a `"Found duplicate document id <id>"` line. Pass [`io::sink()`] to
/// discard the report.
pub fn remove_duplicates<W: Write>(engine: &mut SearchEngine, report: &mut W) -> io::Result<()> {
    let ids: Vec<_> = engine.document_ids().collect();
    let mut seen: HashSet<BTreeSet<WordId>> = HashSet::new();

    for id in ids {
        let words = engine.word_set(id);
        if seen.contains(&words) {
            writeln!(report, "Found duplicate document id {}", id)?;
            engine.remove_document(id);
        } else {
            seen.insert(words);
        }
    }
    Ok(())
}
