use xdoku_core::{AssignmentSink, Cell, Grid, Topology};

use super::{BoxedStrategy, Strategy};
use crate::Contradiction;

const NAME: &str = "Elimination";

/// Removes every solved cell's digit from the candidates of its peers.
///
/// Only cells that were already solved when the pass started are
/// propagated; singletons created by the removals themselves wait for the
/// next pass of the reduction loop.
///
/// # Examples
///
/// ```
/// use xdoku_core::{Cell, Digit, DiscardLog, Grid, Topology};
/// use xdoku_solver::strategy::{Eliminate, Strategy};
///
/// let topology = Topology::standard();
/// let mut grid = Grid::unconstrained();
/// grid.assign(Cell::new(0, 0), Digit::D5, &mut DiscardLog);
///
/// let changed = Eliminate::new().apply(&topology, &mut grid, &mut DiscardLog)?;
/// assert!(changed);
/// assert!(!grid.candidates(Cell::new(0, 8)).contains(Digit::D5));
/// # Ok::<(), xdoku_solver::Contradiction>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Eliminate {}

impl Eliminate {
    /// Creates a new `Eliminate` strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Strategy for Eliminate {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedStrategy {
        Box::new(*self)
    }

    fn apply(
        &self,
        topology: &Topology,
        grid: &mut Grid,
        log: &mut dyn AssignmentSink,
    ) -> Result<bool, Contradiction> {
        let solved: Vec<_> = Cell::ALL
            .into_iter()
            .filter_map(|cell| grid.candidates(cell).as_single().map(|digit| (cell, digit)))
            .collect();

        let mut changed = false;
        for (cell, digit) in solved {
            for &peer in topology.peers(cell) {
                if grid.remove_candidate(peer, digit, log) {
                    changed = true;
                    if grid.candidates(peer).is_empty() {
                        return Err(Contradiction);
                    }
                }
            }
        }
        Ok(changed)
    }
}
