// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{Tally, Tracked};

// =============================================================================
// Tally accounting
// =============================================================================

#[test]
fn test_counts_clones_and_drops() {
    let tally = Tally::new();

    {
        let a = Tracked::new(1, &tally);
        let _b = a.clone();
        let _c = a.clone();

        assert_eq!(tally.clones(), 2);
        assert_eq!(tally.live(), 3);
    }

    assert_eq!(tally.drops(), 3);
    assert_eq!(tally.live(), 0);
}

// =============================================================================
// Clone budget
// =============================================================================

#[test]
fn test_clone_budget_allows_exactly_budget_clones() {
    let tally = Tally::with_clone_budget(2);
    let a = Tracked::new(1, &tally);

    let _b = a.clone();
    let _c = a.clone();

    assert_eq!(tally.clones(), 2);
}

#[test]
#[should_panic(expected = "clone budget exhausted")]
fn test_clone_budget_panics_when_spent() {
    let tally = Tally::with_clone_budget(1);
    let a = Tracked::new(1, &tally);

    let _b = a.clone();
    let _c = a.clone();
}

#[test]
fn test_spent_budget_creates_no_element() {
    let tally = Tally::with_clone_budget(0);
    let a = Tracked::new(1, &tally);

    let result = std::panic::catch_unwind(|| a.clone());

    assert!(result.is_err());
    assert_eq!(tally.clones(), 0);
    assert_eq!(tally.live(), 1);
}
