use xdoku_core::{AssignmentSink, Digit, Grid, Topology};

use super::{BoxedStrategy, Strategy};
use crate::Contradiction;

const NAME: &str = "Only Choice";

/// Assigns a digit to the sole cell of a unit that can still hold it.
///
/// The target cell does not need to be close to solved: if it is the only
/// carrier of a digit somewhere in one of its units, the digit is fixed
/// there immediately, however many other candidates the cell had.
///
/// # Examples
///
/// ```
/// use xdoku_core::{Cell, Digit, DiscardLog, Grid, Topology};
/// use xdoku_solver::strategy::{OnlyChoice, Strategy};
///
/// let topology = Topology::standard();
/// let mut grid = Grid::unconstrained();
/// // Make A1 the only cell of row A that can hold a 7.
/// for column in 1..9 {
///     grid.remove_candidate(Cell::new(0, column), Digit::D7, &mut DiscardLog);
/// }
///
/// OnlyChoice::new().apply(&topology, &mut grid, &mut DiscardLog)?;
/// assert_eq!(grid.candidates(Cell::new(0, 0)).as_single(), Some(Digit::D7));
/// # Ok::<(), xdoku_solver::Contradiction>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct OnlyChoice {}

impl OnlyChoice {
    /// Creates a new `OnlyChoice` strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Strategy for OnlyChoice {
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
        let mut changed = false;
        for unit in topology.units() {
            for digit in Digit::ALL {
                let mut carriers = unit
                    .cells()
                    .iter()
                    .filter(|&&cell| grid.candidates(cell).contains(digit));
                if let (Some(&sole), None) = (carriers.next(), carriers.next()) {
                    changed |= grid.assign(sole, digit, log);
                }
            }
        }
        Ok(changed)
    }
}
