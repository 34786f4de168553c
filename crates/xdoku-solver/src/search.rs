//! Depth-first backtracking search over the candidate grid.

use derive_more::IsVariant;
use xdoku_core::{AssignmentSink, Cell, Grid, ParseError, Topology};

use crate::Reducer;

/// The definitive result of a solve.
///
/// `Solved` carries a grid in which every cell is a singleton and every
/// unit of the topology holds the digits 1-9 exactly once. `Unsolvable`
/// means every branch of the search was exhausted; it is a normal outcome
/// of a well-formed but over-constrained puzzle, not an error.
#[derive(Debug, Clone, PartialEq, Eq, IsVariant)]
pub enum Outcome {
    /// The puzzle has a solution, and here it is.
    Solved(Grid),
    /// No assignment of the remaining candidates satisfies every unit.
    Unsolvable,
}

impl Outcome {
    /// Returns the solved grid, if there is one.
    #[must_use]
    pub fn solution(self) -> Option<Grid> {
        match self {
            Self::Solved(grid) => Some(grid),
            Self::Unsolvable => None,
        }
    }
}

/// Backtracking solver over a fixed topology.
///
/// The solver first reduces the grid with its [`Reducer`]. When
/// propagation stalls, it branches on the unsolved cell with the fewest
/// remaining candidates (ties broken by the fixed cell enumeration order)
/// and recurses on an independent copy of the grid per candidate digit,
/// in ascending digit order. Each recursive call strictly reduces the
/// number of open candidate slots, so the search always terminates.
///
/// # Examples
///
/// ```
/// use xdoku_core::{DiscardLog, Topology};
/// use xdoku_solver::{Outcome, Solver};
///
/// let topology = Topology::standard();
/// let solver = Solver::new(&topology);
///
/// let line = "4.....8.5.3..........7......2.....6.....8.4......1.......6.3.7.5..2.....1.4......";
/// match solver.solve_line(line, &mut DiscardLog)? {
///     Outcome::Solved(grid) => assert!(topology.is_valid_solution(&grid)),
///     Outcome::Unsolvable => unreachable!("this puzzle has a solution"),
/// }
/// # Ok::<(), xdoku_core::ParseError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solver<'t> {
    topology: &'t Topology,
    reducer: Reducer,
}

impl<'t> Solver<'t> {
    /// Creates a solver over `topology` with the full strategy sequence.
    #[must_use]
    pub fn new(topology: &'t Topology) -> Self {
        Self::with_reducer(topology, Reducer::with_all_strategies())
    }

    /// Creates a solver over `topology` with a custom reducer.
    #[must_use]
    pub const fn with_reducer(topology: &'t Topology, reducer: Reducer) -> Self {
        Self { topology, reducer }
    }

    /// Returns the topology this solver searches over.
    #[must_use]
    pub const fn topology(&self) -> &'t Topology {
        self.topology
    }

    /// Parses an 81-character puzzle line and solves it.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the line is malformed; solving itself
    /// cannot fail, only come up [`Outcome::Unsolvable`].
    pub fn solve_line(
        &self,
        line: &str,
        log: &mut dyn AssignmentSink,
    ) -> Result<Outcome, ParseError> {
        let grid = Grid::parse(line, log)?;
        Ok(self.solve(grid, log))
    }

    /// Solves from an existing grid state.
    #[must_use]
    pub fn solve(&self, grid: Grid, log: &mut dyn AssignmentSink) -> Outcome {
        self.search(grid, log, 0)
    }

    fn search(&self, mut grid: Grid, log: &mut dyn AssignmentSink, depth: usize) -> Outcome {
        if self
            .reducer
            .reduce(self.topology, &mut grid, log)
            .is_err()
        {
            log::debug!("contradiction at depth {depth}");
            return Outcome::Unsolvable;
        }
        if grid.is_solved() {
            return Outcome::Solved(grid);
        }

        let Some(cell) = Self::branch_cell(&grid) else {
            return Outcome::Unsolvable;
        };
        let candidates = grid.candidates(cell);
        log::debug!(
            "branching on {cell} over {} candidates at depth {depth}",
            candidates.len()
        );

        for digit in candidates {
            let mut branch = grid.clone();
            branch.assign(cell, digit, log);
            if let Outcome::Solved(solution) = self.search(branch, log, depth + 1) {
                return Outcome::Solved(solution);
            }
        }
        Outcome::Unsolvable
    }

    /// Picks the unsolved cell with the fewest remaining candidates,
    /// breaking ties in favor of the first cell in enumeration order.
    fn branch_cell(grid: &Grid) -> Option<Cell> {
        let mut best: Option<(usize, Cell)> = None;
        for cell in Cell::ALL {
            let len = grid.candidates(cell).len();
            if len > 1 && best.is_none_or(|(fewest, _)| len < fewest) {
                best = Some((len, cell));
            }
        }
        best.map(|(_, cell)| cell)
    }
}
