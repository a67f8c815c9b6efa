// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable, contiguously stored sequence containers with fallible
//! allocation.
//!
//! This crate is the facade over the `contig` workspace:
//!
//! - [`ContigVec`] - a dynamically resizable array of `T` backed by a
//!   single owned block.
//! - [`ContigStr`] - a byte-string specialization of the same engine with
//!   bulk byte primitives and on-demand C-string interop.
//! - [`BlockError`] / [`StrError`] - the failure surface: capacity
//!   overflow and allocator exhaustion are errors, not aborts.
//! - [`RawBlock`], [`plan_capacity`], [`DEFAULT_CAPACITY`] - the storage
//!   engine, re-exported for callers building their own containers on it.
//!
//! # Growth policy
//!
//! Capacity grows by 1.5x with a floor of [`DEFAULT_CAPACITY`] slots, so a
//! run of appends from empty visits capacities 16, 24, 36, 54, ... and the
//! amortized cost of one append stays constant. Bulk requests are
//! satisfied in a single reallocation.
//!
//! # Failure guarantees
//!
//! Reallocating operations uphold the strong guarantee: the old block is
//! never released before the new block is fully populated, so capacity
//! overflow, allocator exhaustion, or a panicking element clone all leave
//! the container exactly as it was.
//!
//! # Example
//!
//! ```rust
//! use contig::{BlockError, ContigStr, ContigVec};
//!
//! fn example() -> Result<(), BlockError> {
//!     let mut vec = ContigVec::new();
//!     for i in 0..17 {
//!         vec.push(i)?;
//!     }
//!     assert_eq!(vec.len(), 17);
//!     assert_eq!(vec.capacity(), 24);
//!
//!     let mut s = ContigStr::from_str("hello")?;
//!     s.append(b", world")?;
//!     assert_eq!(s.find(b"world", 0), Some(7));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub use contig_block::{BlockError, DEFAULT_CAPACITY, RawBlock, max_capacity, plan_capacity};
pub use contig_seq::{ContigStr, ContigVec, StrError, bytes};
