//! Sharded accumulator for parallel relevance summation.
//!
//! A map from document id to a running `f64`, partitioned into a fixed
//! number of buckets by `id mod bucket_count`. Each bucket has its own lock,
//! so workers updating different buckets never contend, and updates to the
//! same key are serialized without a whole-map lock.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - An [`Access`] handle holds its bucket's lock for its whole lifetime.
//!   Keep handles short-lived: never hold one across an unrelated blocking
//!   call, or every worker hashing into that bucket stalls.
//! - `drain` assumes no outstanding handles; it locks buckets one at a time,
//!   so concurrent `at` calls would race with the drain order.

use crate::types::DocId;
use parking_lot::{Mutex, MutexGuard};
use std::collections::{BTreeMap, HashMap};
use std::ops::{Deref, DerefMut};

/// Fixed-bucket concurrent map from [`DocId`] to `f64`.
#[derive(Debug)]
pub struct ShardedAccumulator {
    buckets: Vec<Mutex<HashMap<DocId, f64>>>,
}

/// Scoped handle granting exclusive mutable access to one entry.
///
/// Created by [`ShardedAccumulator::at`]; the bucket lock is released when
/// the handle drops. Dereferences to the accumulated value.
pub struct Access<'a> {
    guard: MutexGuard<'a, HashMap<DocId, f64>>,
    key: DocId,
}

impl Deref for Access<'_> {
    type Target = f64;

    fn deref(&self) -> &f64 {
        &self.guard[&self.key]
    }
}

impl DerefMut for Access<'_> {
    fn deref_mut(&mut self) -> &mut f64 {
        self.guard
            .get_mut(&self.key)
            .expect("entry is created when the bucket lock is taken")
    }
}

impl ShardedAccumulator {
    /// Create an accumulator with `bucket_count` independently locked
    /// buckets.
    ///
    /// # Panics
    ///
    /// Panics if `bucket_count` is zero.
    pub fn new(bucket_count: usize) -> Self {
        assert!(bucket_count > 0, "bucket_count must be positive");
        Self {
            buckets: (0..bucket_count).map(|_| Mutex::default()).collect(),
        }
    }

    /// Lock the bucket owning `key`, creating the entry at `0.0` if absent,
    /// and return a handle to the value.
    pub fn at(&self, key: DocId) -> Access<'_> {
        let bucket = &self.buckets[key.get() as usize % self.buckets.len()];
        let mut guard = bucket.lock();
        guard.entry(key).or_insert(0.0);
        Access { guard, key }
    }

    /// Move every entry into a single ordered map, emptying all buckets.
    ///
    /// Buckets are locked one at a time; callers must ensure no `Access`
    /// handles are outstanding.
    pub fn drain(&self) -> BTreeMap<DocId, f64> {
        let mut merged = BTreeMap::new();
        for bucket in &self.buckets {
            merged.extend(bucket.lock().drain());
        }
        merged
    }
}
