// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Per-element lifecycle helpers for uninitialized storage.
//!
//! Construction is `core::ptr::write` at the call site; destruction goes
//! through [`drop_range`], which skips the loop entirely for element types
//! without drop glue.

use core::mem::needs_drop;
use core::ptr;

/// Destroys `len` live elements starting at `ptr`.
///
/// No-op for element types whose destruction has no observable effect.
///
/// # Safety
///
/// `ptr..ptr + len` must hold live, constructed elements, and the caller
/// must not treat them as live afterwards.
pub unsafe fn drop_range<T>(ptr: *mut T, len: usize) {
    if !needs_drop::<T>() {
        return;
    }

    // SAFETY: the caller guarantees the range holds live elements
    unsafe {
        ptr::drop_in_place(ptr::slice_from_raw_parts_mut(ptr, len));
    }
}
