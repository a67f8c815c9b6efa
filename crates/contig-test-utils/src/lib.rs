// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for contig crates.
//!
//! [`Tracked`] is an instrumented element that reports every clone and drop
//! to a shared [`Tally`]. A tally can carry a clone budget, turning a
//! `Tracked` into a fault injector: once the budget is spent, the next
//! clone panics - the container equivalent of an element constructor
//! failing partway through an operation.

#![warn(missing_docs)]

mod tracked;

#[cfg(test)]
mod tests;

pub use tracked::{Tally, Tracked};
