// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for contig-block.

use thiserror::Error;

/// Errors from storage acquisition and capacity planning.
///
/// Both variants are reported before any state is mutated: a failed request
/// leaves the requesting container exactly as it was.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum BlockError {
    /// A requested capacity exceeds the addressable ceiling for the
    /// element type.
    #[error("requested capacity {requested} exceeds maximum {max}")]
    CapacityOverflow {
        /// The capacity that was asked for.
        requested: usize,
        /// The ceiling it collided with.
        max: usize,
    },

    /// The allocator could not provide a block of the requested size.
    #[error("allocation of {bytes} bytes failed")]
    OutOfMemory {
        /// Size of the failed request in bytes.
        bytes: usize,
    },
}
