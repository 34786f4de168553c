//! Test utilities for strategy implementations.
//!
//! This module provides [`StrategyTester`], a fluent harness for checking
//! that a propagation strategy produces exactly the expected candidate
//! changes. It tracks the initial and current grid, applies strategies,
//! and panics with a precise message (via `#[track_caller]`) when an
//! assertion fails.
//!
//! # Example
//!
//! ```
//! use xdoku_core::{Cell, Digit};
//! use xdoku_solver::{strategy::Eliminate, testing::StrategyTester};
//!
//! StrategyTester::from_line(
//!     "5................................................................................",
//! )
//! .apply_once(&Eliminate::new())
//! .assert_removed_includes(Cell::new(0, 8), [Digit::D5]);
//! ```

use xdoku_core::{Cell, Digit, DigitSet, DiscardLog, Grid, Topology};

use crate::strategy::Strategy;

/// A fluent harness for verifying strategy behavior.
///
/// All methods return `self`, so applications and assertions chain.
#[derive(Debug)]
pub struct StrategyTester {
    topology: Topology,
    initial: Grid,
    current: Grid,
}

impl StrategyTester {
    /// Creates a tester over an explicit topology and initial grid.
    #[must_use]
    pub fn new(topology: Topology, grid: Grid) -> Self {
        let current = grid.clone();
        Self {
            topology,
            initial: grid,
            current,
        }
    }

    /// Creates a tester over the standard topology from a puzzle line.
    ///
    /// Whitespace in `line` is ignored, so grids can be written out one
    /// row per source line.
    ///
    /// # Panics
    ///
    /// Panics if the line cannot be parsed as a grid.
    #[track_caller]
    pub fn from_line(line: &str) -> Self {
        Self::from_line_with_topology(Topology::standard(), line)
    }

    /// Creates a tester over `topology` from a puzzle line.
    ///
    /// # Panics
    ///
    /// Panics if the line cannot be parsed as a grid.
    #[track_caller]
    pub fn from_line_with_topology(topology: Topology, line: &str) -> Self {
        let compact: String = line.split_whitespace().collect();
        let grid = compact.parse().unwrap();
        Self::new(topology, grid)
    }

    /// Applies the strategy once.
    ///
    /// # Panics
    ///
    /// Panics if the strategy reports a contradiction.
    #[track_caller]
    pub fn apply_once<S>(mut self, strategy: &S) -> Self
    where
        S: Strategy,
    {
        strategy
            .apply(&self.topology, &mut self.current, &mut DiscardLog)
            .unwrap();
        self
    }

    /// Applies the strategy repeatedly until it makes no more progress.
    ///
    /// # Panics
    ///
    /// Panics if the strategy reports a contradiction.
    #[track_caller]
    pub fn apply_until_stuck<S>(mut self, strategy: &S) -> Self
    where
        S: Strategy,
    {
        while strategy
            .apply(&self.topology, &mut self.current, &mut DiscardLog)
            .unwrap()
        {}
        self
    }

    /// Asserts that applying the strategy reports a contradiction.
    ///
    /// # Panics
    ///
    /// Panics if the strategy succeeds instead.
    #[track_caller]
    pub fn assert_apply_contradicts<S>(mut self, strategy: &S)
    where
        S: Strategy,
    {
        let result = strategy.apply(&self.topology, &mut self.current, &mut DiscardLog);
        assert!(
            result.is_err(),
            "Expected {} to contradict, but it returned {result:?}",
            strategy.name()
        );
    }

    /// Returns `true` if the cell's candidates differ from the initial state.
    #[must_use]
    pub fn changed(&self, cell: Cell) -> bool {
        self.initial.candidates(cell) != self.current.candidates(cell)
    }

    /// Asserts that a previously open cell is now fixed to `digit`.
    ///
    /// # Panics
    ///
    /// Panics if the cell was already solved initially, or is not now
    /// solved with the expected digit.
    #[track_caller]
    pub fn assert_assigned(self, cell: Cell, digit: Digit) -> Self {
        let initial = self.initial.candidates(cell);
        let current = self.current.candidates(cell);

        assert!(
            initial.len() > 1,
            "Expected {cell} to start undecided, but its candidates were {initial}"
        );
        assert_eq!(
            current.as_single(),
            Some(digit),
            "Expected {cell} to be fixed to {digit}, but its candidates are {current}"
        );
        self
    }

    /// Asserts that all of `digits` were removed from the cell.
    ///
    /// Other candidates may have been removed as well; only the given
    /// ones are checked.
    ///
    /// # Panics
    ///
    /// Panics if a digit was not initially present or is still present.
    #[track_caller]
    pub fn assert_removed_includes<D>(self, cell: Cell, digits: D) -> Self
    where
        D: IntoIterator<Item = Digit>,
    {
        let digits = DigitSet::from_iter(digits);
        let initial = self.initial.candidates(cell);
        let current = self.current.candidates(cell);

        assert_eq!(
            initial & digits,
            digits,
            "Expected {cell} to start with candidates {digits}, but it had {initial}"
        );
        assert!(
            (current & digits).is_empty(),
            "Expected {digits} to be removed from {cell}, but {current} remains"
        );
        self
    }

    /// Asserts that the cell's candidates did not change.
    ///
    /// # Panics
    ///
    /// Panics if the candidates differ from the initial state.
    #[track_caller]
    pub fn assert_no_change(self, cell: Cell) -> Self {
        let initial = self.initial.candidates(cell);
        let current = self.current.candidates(cell);
        assert_eq!(
            initial, current,
            "Expected no change at {cell}, but candidates went from {initial} to {current}"
        );
        self
    }
}
