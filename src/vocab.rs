//! String interner backing the index.
//!
//! Every distinct word that ever enters the index is stored here exactly
//! once and addressed by a stable [`WordId`] handle. Handles index an
//! append-only table, so they stay valid for the lifetime of the engine;
//! words are never removed, even when their last document is (this trades a
//! little memory for handle stability).

use std::collections::HashMap;
use std::sync::Arc;

/// Stable handle to an interned word.
///
/// An index into the vocabulary's append-only table. Cheap to copy, ordered
/// by insertion (not lexicographically), valid as long as the vocabulary
/// lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct WordId(pub u32);

impl WordId {
    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Convert to usize for table indexing.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// Append-only set of owned words.
///
/// The lookup map and the id table share each word's single backing
/// allocation (`Arc<str>`), so equivalent words are stored once no matter
/// how many documents contain them.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    ids: HashMap<Arc<str>, WordId>,
    words: Vec<Arc<str>>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert-if-absent and return the handle of the canonical copy.
    pub fn intern(&mut self, word: &str) -> WordId {
        if let Some(&id) = self.ids.get(word) {
            return id;
        }
        let stored: Arc<str> = Arc::from(word);
        let id = WordId(self.words.len() as u32);
        self.words.push(Arc::clone(&stored));
        self.ids.insert(stored, id);
        id
    }

    /// Handle of an already-interned word, if any.
    #[inline]
    pub fn lookup(&self, word: &str) -> Option<WordId> {
        self.ids.get(word).copied()
    }

    /// The canonical stored copy behind a handle.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this vocabulary.
    #[inline]
    pub fn resolve(&self, id: WordId) -> &str {
        &self.words[id.as_usize()]
    }

    /// Number of distinct words ever interned.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
