// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared lifecycle counters for [`Tracked`] elements.
///
/// Clones of a `Tally` observe the same counters, so a test keeps one copy
/// and hands the other to its elements.
#[derive(Clone)]
pub struct Tally {
    created: Arc<AtomicUsize>,
    clones: Arc<AtomicUsize>,
    drops: Arc<AtomicUsize>,
    clone_budget: Arc<AtomicUsize>,
}

impl Tally {
    /// A tally with an unlimited clone budget.
    pub fn new() -> Self {
        Self::with_clone_budget(usize::MAX)
    }

    /// A tally whose elements clone successfully `budget` times; the next
    /// clone after that panics.
    pub fn with_clone_budget(budget: usize) -> Self {
        Self {
            created: Arc::new(AtomicUsize::new(0)),
            clones: Arc::new(AtomicUsize::new(0)),
            drops: Arc::new(AtomicUsize::new(0)),
            clone_budget: Arc::new(AtomicUsize::new(budget)),
        }
    }

    /// Number of clones performed so far.
    pub fn clones(&self) -> usize {
        self.clones.load(Ordering::SeqCst)
    }

    /// Number of elements dropped so far.
    pub fn drops(&self) -> usize {
        self.drops.load(Ordering::SeqCst)
    }

    /// Elements currently alive: constructions plus clones, minus drops.
    pub fn live(&self) -> usize {
        self.created.load(Ordering::SeqCst) + self.clones() - self.drops()
    }

    fn on_create(&self) {
        self.created.fetch_add(1, Ordering::SeqCst);
    }

    fn on_clone(&self) {
        let spent = self
            .clone_budget
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |remaining| {
                remaining.checked_sub(1)
            });

        if spent.is_err() {
            panic!("clone budget exhausted");
        }

        self.clones.fetch_add(1, Ordering::SeqCst);
    }

    fn on_drop(&self) {
        self.drops.fetch_add(1, Ordering::SeqCst);
    }
}

impl Default for Tally {
    fn default() -> Self {
        Self::new()
    }
}

/// An element that reports its clones and drops to a shared [`Tally`].
#[derive(Debug)]
pub struct Tracked {
    /// Payload used by tests to check element identity and ordering.
    pub value: i64,
    tally: Tally,
}

impl Tracked {
    /// A new element reporting to `tally`.
    pub fn new(value: i64, tally: &Tally) -> Self {
        tally.on_create();

        Self {
            value,
            tally: tally.clone(),
        }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        // Counts against the budget first: a spent budget panics here,
        // before any new element exists.
        self.tally.on_clone();

        Self {
            value: self.value,
            tally: self.tally.clone(),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.tally.on_drop();
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Tracked {}

impl core::fmt::Debug for Tally {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tally")
            .field("clones", &self.clones())
            .field("drops", &self.drops())
            .field("live", &self.live())
            .finish()
    }
}
