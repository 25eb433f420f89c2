//! Progress tracking for rewrite runs.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe file counter shared by parallel workers.
#[derive(Debug, Default)]
pub struct ProgressTracker {
    files_total: AtomicU64,
    files_done: AtomicU64,
}

impl ProgressTracker {
    /// Create a tracker for `total` files.
    #[must_use]
    pub fn new(total: u64) -> Self {
        Self {
            files_total: AtomicU64::new(total),
            files_done: AtomicU64::new(0),
        }
    }

    /// Mark one file as processed and return the new count.
    pub fn increment(&self) -> u64 {
        self.files_done.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Total number of files.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.files_total.load(Ordering::SeqCst)
    }

    /// Files processed so far.
    #[must_use]
    pub fn done(&self) -> u64 {
        self.files_done.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;

    #[test]
    fn test_parallel_increments() {
        let tracker = ProgressTracker::new(100);

        (0..100).into_par_iter().for_each(|_| {
            tracker.increment();
        });

        assert_eq!(tracker.done(), 100);
        assert_eq!(tracker.total(), 100);
    }
}
