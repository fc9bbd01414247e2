//! Diagnostics for comparing sequences of numeric arrays.
//!
//! This crate provides a single diagnostic helper that takes two
//! equal-length sequences of arrays, computes the element-wise difference
//! of each pair, and reports the maximum absolute difference per pair.
//! It is intended to be called from a larger comparison workflow, e.g.
//! to check arrays that were written out and read back against the
//! originals.

mod compare;
pub use crate::compare::{compare_array_differences, write_array_differences};

pub(crate) mod util;
