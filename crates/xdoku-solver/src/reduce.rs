//! Fixed-point reduction loop over the propagation strategies.

use xdoku_core::{AssignmentSink, Grid, Topology};

use crate::{
    Contradiction,
    strategy::{self, BoxedStrategy},
};

/// Applies a strategy sequence to a grid until it reaches a fixed point.
///
/// One pass runs every strategy once, in order. The loop stops when the
/// grid is fully solved, or when a whole pass fails to solve any new cell
/// — at that point propagation alone cannot make progress and the caller
/// must branch.
///
/// # Examples
///
/// ```
/// use xdoku_core::{DiscardLog, Grid, Topology};
/// use xdoku_solver::Reducer;
///
/// let topology = Topology::standard();
/// let reducer = Reducer::with_all_strategies();
///
/// let line = "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
/// let mut grid: Grid = line.parse()?;
/// reducer.reduce(&topology, &mut grid, &mut DiscardLog).expect("consistent puzzle");
/// assert!(grid.is_solved());
/// # Ok::<(), xdoku_core::ParseError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Reducer {
    strategies: Vec<BoxedStrategy>,
}

impl Default for Reducer {
    fn default() -> Self {
        Self::with_all_strategies()
    }
}

impl Reducer {
    /// Creates a reducer over the given strategy sequence.
    ///
    /// Strategies are applied in the order they appear, once per pass.
    #[must_use]
    pub fn new(strategies: Vec<BoxedStrategy>) -> Self {
        Self { strategies }
    }

    /// Creates a reducer over the full strategy sequence: elimination,
    /// only-choice, naked tuples of any arity, and subgroup exclusion.
    #[must_use]
    pub fn with_all_strategies() -> Self {
        Self::new(strategy::all_strategies())
    }

    /// Returns the configured strategies in application order.
    #[must_use]
    pub fn strategies(&self) -> &[BoxedStrategy] {
        &self.strategies
    }

    /// Reduces `grid` in place until it is solved or propagation stalls.
    ///
    /// On `Ok(())` the grid is a consistent, possibly partial state; the
    /// caller distinguishes "solved" from "stalled" via
    /// [`Grid::is_solved`].
    ///
    /// # Errors
    ///
    /// Returns [`Contradiction`] as soon as any cell's candidate set
    /// becomes empty; the grid must then be discarded.
    pub fn reduce(
        &self,
        topology: &Topology,
        grid: &mut Grid,
        log: &mut dyn AssignmentSink,
    ) -> Result<(), Contradiction> {
        loop {
            let before = grid.solved_count();
            for strategy in &self.strategies {
                strategy.apply(topology, grid, log)?;
            }
            let after = grid.solved_count();
            log::trace!("reduction pass: {before} -> {after} solved cells");

            if grid.is_solved() || after == before {
                return Ok(());
            }
        }
    }
}
