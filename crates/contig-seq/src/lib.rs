// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable contiguous sequence containers.
//!
//! Two containers share one storage discipline (a [`contig_block::RawBlock`]
//! plus the [`contig_block::plan_capacity`] growth policy):
//!
//! - [`ContigVec`] - a resizable array of `T`, generic over any element
//!   type; clone-based operations additionally require `T: Clone`.
//! - [`ContigStr`] - a byte string with bulk byte primitives in place of
//!   per-element construction, and on-demand C-string interop.
//!
//! All operations that may allocate are fallible and return
//! [`BlockError`] on capacity overflow or allocator exhaustion; index
//! preconditions are asserted. Reallocating operations uphold the strong
//! guarantee: the old block is never released before the new block is fully
//! populated, and a failure partway leaves the container untouched.
//!
//! # Example
//!
//! ```rust
//! use contig_seq::{BlockError, ContigStr, ContigVec};
//!
//! fn example() -> Result<(), BlockError> {
//!     let mut vec = ContigVec::new();
//!     vec.push(1u32)?;
//!     vec.insert(0, 0)?;
//!     assert_eq!(vec.as_slice(), &[0, 1]);
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
#![warn(unsafe_op_in_unsafe_fn)]

pub mod bytes;

mod contig_str;
mod contig_vec;
mod error;

#[cfg(test)]
mod tests;

pub use contig_block::BlockError;
pub use contig_str::ContigStr;
pub use contig_vec::ContigVec;
pub use error::StrError;
