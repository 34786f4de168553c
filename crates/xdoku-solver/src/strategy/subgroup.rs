use xdoku_core::{AssignmentSink, Cell, Digit, Grid, Topology};

use super::{BoxedStrategy, Strategy};
use crate::Contradiction;

const NAME: &str = "Subgroup Exclusion";

/// Excludes a digit from a unit when another unit has already claimed it.
///
/// For a unit U and digit d, consider the cells of U where d is still a
/// candidate. If there are at least two of them and every one also lies in
/// some other unit V, then d must occur among those shared cells — so d is
/// removed from every cell of V outside the subgroup.
///
/// This covers classic box/line reductions (pointing pairs and triples) in
/// both directions, and in the diagonal variant it works just as well
/// between a diagonal and any row, column, or box it crosses.
///
/// # Examples
///
/// ```
/// use xdoku_core::{Cell, Digit, DiscardLog, Grid, Topology};
/// use xdoku_solver::strategy::{Strategy, SubgroupExclusion};
///
/// let topology = Topology::standard();
/// let mut grid = Grid::unconstrained();
/// // Confine column 1's 1-candidates to the three cells it shares with
/// // the top-left box.
/// for row in 3..9 {
///     grid.remove_candidate(Cell::new(row, 0), Digit::D1, &mut DiscardLog);
/// }
///
/// SubgroupExclusion::new().apply(&topology, &mut grid, &mut DiscardLog)?;
/// assert!(!grid.candidates(Cell::new(0, 1)).contains(Digit::D1));
/// # Ok::<(), xdoku_solver::Contradiction>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct SubgroupExclusion {}

impl SubgroupExclusion {
    /// Creates a new `SubgroupExclusion` strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Strategy for SubgroupExclusion {
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
        let mut possibles = Vec::with_capacity(9);

        for (id, unit) in topology.units().iter().enumerate() {
            for digit in Digit::ALL {
                possibles.clear();
                possibles.extend(
                    unit.cells()
                        .iter()
                        .copied()
                        .filter(|&cell| grid.candidates(cell).contains(digit)),
                );
                let Some((&first, rest)) = possibles.split_first() else {
                    continue;
                };
                if rest.is_empty() {
                    continue;
                }

                // Every unit containing the whole subgroup also contains
                // its first cell, so only that cell's units need checking.
                for &other_id in topology.units_of(first) {
                    if other_id.index() == id {
                        continue;
                    }
                    let other = topology.unit(other_id);
                    if !rest.iter().all(|&cell| other.contains(cell)) {
                        continue;
                    }
                    for &cell in other.cells() {
                        if possibles.contains(&cell) {
                            continue;
                        }
                        if grid.remove_candidate(cell, digit, log) {
                            changed = true;
                            if grid.candidates(cell).is_empty() {
                                return Err(Contradiction);
                            }
                        }
                    }
                }
            }
        }
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use xdoku_core::{Cell, Digit, DiscardLog, Grid, Topology};

    use super::*;
    use crate::testing::StrategyTester;

    fn confined_column_grid() -> Grid {
        let mut grid = Grid::unconstrained();
        for row in 3..9 {
            grid.remove_candidate(Cell::new(row, 0), Digit::D1, &mut DiscardLog);
        }
        grid
    }

    #[test]
    fn test_confined_digit_excluded_from_sharing_unit() {
        // Column 1's 1-possibles are A1, B1, C1 — all inside box 1, so
        // the rest of the box loses digit 1.
        StrategyTester::new(Topology::standard(), confined_column_grid())
            .apply_once(&SubgroupExclusion::new())
            .assert_removed_includes(Cell::new(0, 1), [Digit::D1])
            .assert_removed_includes(Cell::new(0, 2), [Digit::D1])
            .assert_removed_includes(Cell::new(1, 1), [Digit::D1])
            .assert_removed_includes(Cell::new(1, 2), [Digit::D1])
            .assert_removed_includes(Cell::new(2, 1), [Digit::D1])
            .assert_removed_includes(Cell::new(2, 2), [Digit::D1]);
    }

    #[test]
    fn test_cells_outside_the_sharing_unit_are_untouched() {
        let tester = StrategyTester::new(Topology::standard(), confined_column_grid())
            .apply_once(&SubgroupExclusion::new());

        // Exactly the six non-subgroup box cells changed; every other
        // cell on the board kept its candidates.
        let changed: Vec<_> = Cell::ALL
            .into_iter()
            .filter(|&cell| tester.changed(cell))
            .collect();
        let expected: Vec<_> = [(0, 1), (0, 2), (1, 1), (1, 2), (2, 1), (2, 2)]
            .into_iter()
            .map(|(row, column)| Cell::new(row, column))
            .collect();
        assert_eq!(changed, expected);
    }

    #[test]
    fn test_singleton_subgroup_is_ignored() {
        let mut grid = Grid::unconstrained();
        for row in 1..9 {
            grid.remove_candidate(Cell::new(row, 0), Digit::D1, &mut DiscardLog);
        }
        StrategyTester::new(Topology::standard(), grid)
            .apply_once(&SubgroupExclusion::new())
            .assert_no_change(Cell::new(0, 1))
            .assert_no_change(Cell::new(1, 1));
    }

    #[test]
    fn test_diagonal_subgroup_excludes_from_box() {
        // Confine the main diagonal's 9-candidates to its three cells
        // inside the center box.
        let mut grid = Grid::unconstrained();
        for i in [0, 1, 2, 6, 7, 8] {
            grid.remove_candidate(Cell::new(i, i), Digit::D9, &mut DiscardLog);
        }

        StrategyTester::new(Topology::diagonal(), grid)
            .apply_once(&SubgroupExclusion::new())
            .assert_removed_includes(Cell::new(3, 4), [Digit::D9])
            .assert_removed_includes(Cell::new(5, 3), [Digit::D9])
            .assert_no_change(Cell::new(0, 4));
    }

    #[test]
    fn test_unconstrained_grid_is_stable() {
        StrategyTester::from_line(
            ".................................................................................",
        )
        .apply_once(&SubgroupExclusion::new())
        .assert_no_change(Cell::new(4, 4));
    }
}
