// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Capacity planning for growable contiguous storage.

use crate::error::BlockError;

/// Floor capacity applied on the first growth from an unallocated state.
pub const DEFAULT_CAPACITY: usize = 16;

/// Largest slot count any block of `T` may have.
///
/// Allocations are limited to `isize::MAX` bytes; zero-sized element types
/// never allocate and report `usize::MAX`.
pub const fn max_capacity<T>() -> usize {
    if size_of::<T>() == 0 {
        usize::MAX
    } else {
        isize::MAX as usize / size_of::<T>()
    }
}

/// Plans the capacity of the block that replaces one of `old_capacity`
/// slots and must take `additional` more elements.
///
/// The policy is 1.5x geometric growth (`old_capacity + old_capacity / 2`),
/// which keeps the amortized cost of one append constant while wasting
/// less peak memory than doubling. The `additional` term wins when it is
/// larger, so a bulk request is satisfied in a single reallocation. Growth
/// from an unallocated state is floored at [`DEFAULT_CAPACITY`], and the
/// result saturates at `max_capacity`.
///
/// # Errors
///
/// [`BlockError::CapacityOverflow`] when `old_capacity + additional` cannot
/// fit below `max_capacity`. Nothing is allocated on this path.
pub fn plan_capacity(
    old_capacity: usize,
    additional: usize,
    max_capacity: usize,
) -> Result<usize, BlockError> {
    let overflow = || BlockError::CapacityOverflow {
        requested: old_capacity.saturating_add(additional),
        max: max_capacity,
    };

    let headroom = max_capacity.checked_sub(additional).ok_or_else(overflow)?;
    if old_capacity > headroom {
        return Err(overflow());
    }

    if old_capacity == 0 {
        return Ok(additional.max(DEFAULT_CAPACITY).min(max_capacity));
    }

    let grown = old_capacity.saturating_add(old_capacity / 2);
    let needed = old_capacity + additional;
    Ok(grown.max(needed).min(max_capacity))
}
