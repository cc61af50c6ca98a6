#![deny(missing_docs)]
//! This crate builds knight's tours on square boards using Warnsdorf's rule.

/// The `tour` module builds the knight graph of a board and walks greedy tours over it.
pub mod tour;
