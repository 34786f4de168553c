//! Solver error types.

use derive_more::{Display, Error};

/// Signals that some cell's candidate set became empty.
///
/// A contradiction is never fatal: the search abandons the offending
/// branch and tries the next candidate digit in the parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("a cell's candidate set became empty")]
pub struct Contradiction;
