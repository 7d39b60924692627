//! Identifier generation for ledger entities.
//!
//! Identifiers are `"<prefix>_<n>"` strings backed by a single monotonic
//! counter shared across all entity kinds. Uniqueness is the only contract;
//! gaps (a counter value consumed by a rejected entry) are irrelevant.

use std::sync::atomic::{AtomicU64, Ordering};

/// Issues unique, monotonically increasing string identifiers.
///
/// One generator belongs to each [`super::Books`] instance, so isolated
/// states (one per test, for example) number their entities independently.
#[derive(Debug)]
pub struct IdGenerator {
    counter: AtomicU64,
}

impl IdGenerator {
    /// Creates a generator whose counter starts at 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(1),
        }
    }

    /// Returns the next identifier for the given entity prefix.
    ///
    /// The counter is shared across prefixes: `next("acc")` followed by
    /// `next("je")` yields `acc_1`, `je_2`.
    pub fn next(&self, prefix: &str) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{prefix}_{n}")
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
