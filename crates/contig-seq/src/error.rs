// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for contig-seq.

use contig_block::BlockError;
use thiserror::Error;

/// Errors from the byte-string surface of [`ContigStr`](crate::ContigStr).
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum StrError {
    /// Storage acquisition or capacity planning failed.
    #[error(transparent)]
    Block(#[from] BlockError),

    /// The contents hold a NUL byte, so no C string can be formed.
    #[error("interior NUL at index {at}")]
    InteriorNul {
        /// Index of the offending byte.
        at: usize,
    },
}
