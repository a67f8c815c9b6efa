// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Raw storage blocks and capacity planning for contiguous containers.
//!
//! This crate is the storage engine shared by the `contig-seq` containers.
//! It deals exclusively in uninitialized memory: a [`RawBlock`] owns one
//! contiguous allocation sized for a fixed number of element slots and never
//! constructs, reads, or drops an element. Element lifetime is the caller's
//! responsibility, assisted by the [`lifecycle`] helpers.
//!
//! # Components
//!
//! - [`RawBlock`] - an owned, uninitialized block for `capacity` elements;
//!   allocation failure is a first-class [`BlockError`], not an abort.
//! - [`plan_capacity`] - the pure growth policy: 1.5x amortized growth with
//!   a [`DEFAULT_CAPACITY`] floor, saturated at the addressable ceiling.
//! - [`lifecycle::drop_range`] - bulk element destruction with a no-op fast
//!   path for types without drop glue.
//!
//! # Example
//!
//! ```rust
//! use contig_block::{BlockError, RawBlock, plan_capacity, max_capacity};
//!
//! fn example() -> Result<(), BlockError> {
//!     let block = RawBlock::<u64>::allocate(16)?;
//!     assert_eq!(block.capacity(), 16);
//!
//!     // A full block plans its successor through the growth policy.
//!     let next = plan_capacity(block.capacity(), 1, max_capacity::<u64>())?;
//!     assert_eq!(next, 24);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod error;
mod growth;
mod raw_block;

pub mod lifecycle;

#[cfg(test)]
mod tests;

pub use error::BlockError;
pub use growth::{DEFAULT_CAPACITY, max_capacity, plan_capacity};
pub use raw_block::RawBlock;
