// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{BlockError, DEFAULT_CAPACITY, max_capacity, plan_capacity};

// =============================================================================
// max_capacity()
// =============================================================================

#[test]
fn test_max_capacity_sized() {
    assert_eq!(max_capacity::<u8>(), isize::MAX as usize);
    assert_eq!(max_capacity::<u64>(), isize::MAX as usize / 8);
}

#[test]
fn test_max_capacity_zero_sized() {
    assert_eq!(max_capacity::<()>(), usize::MAX);
}

// =============================================================================
// plan_capacity()
// =============================================================================

#[test]
fn test_plan_from_empty_applies_floor() {
    let planned = plan_capacity(0, 1, max_capacity::<u64>()).unwrap();

    assert_eq!(planned, DEFAULT_CAPACITY);
}

#[test]
fn test_plan_from_empty_bulk_beats_floor() {
    let planned = plan_capacity(0, 100, max_capacity::<u64>()).unwrap();

    assert_eq!(planned, 100);
}

#[test]
fn test_plan_grows_by_half() {
    // The capacity ladder a sequence of single pushes climbs.
    let max = max_capacity::<u64>();

    assert_eq!(plan_capacity(16, 1, max).unwrap(), 24);
    assert_eq!(plan_capacity(24, 1, max).unwrap(), 36);
    assert_eq!(plan_capacity(36, 1, max).unwrap(), 54);
    assert_eq!(plan_capacity(54, 1, max).unwrap(), 81);
}

#[test]
fn test_plan_bulk_request_satisfied_in_one_step() {
    // additional beyond the 1.5x step wins, so a large insert never loops.
    let planned = plan_capacity(16, 100, max_capacity::<u64>()).unwrap();

    assert_eq!(planned, 116);
}

#[test]
fn test_plan_saturates_at_max() {
    let max = 100;
    let planned = plan_capacity(90, 5, max).unwrap();

    // 90 + 45 overflows the ceiling; 90 + 5 still fits.
    assert_eq!(planned, max);
}

#[test]
fn test_plan_unsatisfiable_request_errors() {
    let max = 100;
    let result = plan_capacity(90, 20, max);

    assert_eq!(
        result,
        Err(BlockError::CapacityOverflow {
            requested: 110,
            max: 100,
        })
    );
}

#[test]
fn test_plan_additional_above_max_errors() {
    let result = plan_capacity(0, usize::MAX, 100);

    assert!(matches!(result, Err(BlockError::CapacityOverflow { .. })));
}

#[test]
fn test_plan_checks_before_allocating() {
    // Exactly at the ceiling is still satisfiable.
    let max = 100;

    assert_eq!(plan_capacity(95, 5, max).unwrap(), max);
}
