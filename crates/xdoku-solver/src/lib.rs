//! Constraint-propagation and backtracking solver for xdoku.
//!
//! Solving proceeds in two layers:
//!
//! 1. **Propagation** — the [`strategy`] module holds four independent
//!    reduction rules (peer elimination, only-choice, naked tuples, and
//!    subgroup exclusion), and [`Reducer`] iterates them to a fixed point.
//! 2. **Search** — when propagation stalls, [`Solver`] branches on the
//!    unsolved cell with the fewest candidates and recurses on an
//!    independent copy of the grid per candidate digit.
//!
//! The result of a solve is an [`Outcome`]: either a fully solved grid or
//! a definitive `Unsolvable`, never a partially reduced state.
//!
//! # Examples
//!
//! ```
//! use xdoku_core::{DiscardLog, Topology};
//! use xdoku_solver::{Outcome, Solver};
//!
//! let topology = Topology::diagonal();
//! let solver = Solver::new(&topology);
//!
//! let line = "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3";
//! let outcome = solver.solve_line(line, &mut DiscardLog)?;
//! assert!(outcome.is_solved());
//! # Ok::<(), xdoku_core::ParseError>(())
//! ```

pub use self::{
    error::Contradiction,
    reduce::Reducer,
    search::{Outcome, Solver},
};

mod error;
mod reduce;
mod search;
pub mod strategy;
pub mod testing;
