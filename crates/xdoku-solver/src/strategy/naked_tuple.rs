use xdoku_core::{AssignmentSink, Cell, DigitSet, Grid, Topology};

use super::{BoxedStrategy, Strategy};
use crate::Contradiction;

const NAME: &str = "Naked Tuple";

/// Eliminates the digits claimed by a naked k-tuple from the rest of its
/// unit.
///
/// A naked k-tuple is a group of k cells in one unit whose candidate sets
/// are pairwise identical and of size exactly k: those k cells must
/// consume exactly those k digits between them, so the digits can be
/// removed from every other cell of the unit.
///
/// A group of one cell is never a tuple, and a group whose size differs
/// from its shared candidate count (say, two cells sharing three
/// candidates) is skipped. Disjoint tuples in the same unit are all
/// exploited in the same pass.
///
/// The arity can be pinned ([`NakedTuple::of_arity`]) or left open
/// ([`NakedTuple::any`]); pinning it to 2 reproduces the classic "naked
/// twins" rule exactly.
///
/// # Examples
///
/// ```
/// use xdoku_core::{Cell, Digit, DiscardLog, Grid, Topology};
/// use xdoku_solver::strategy::{NakedTuple, Strategy};
///
/// let topology = Topology::standard();
/// let mut grid = Grid::unconstrained();
/// for digit in Digit::ALL {
///     if digit != Digit::D2 && digit != Digit::D3 {
///         grid.remove_candidate(Cell::new(0, 0), digit, &mut DiscardLog);
///         grid.remove_candidate(Cell::new(0, 1), digit, &mut DiscardLog);
///     }
/// }
///
/// NakedTuple::twins().apply(&topology, &mut grid, &mut DiscardLog)?;
/// assert!(!grid.candidates(Cell::new(0, 8)).contains(Digit::D2));
/// assert!(!grid.candidates(Cell::new(0, 8)).contains(Digit::D3));
/// # Ok::<(), xdoku_solver::Contradiction>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NakedTuple {
    arity: Option<usize>,
}

impl NakedTuple {
    /// Matches tuples of every arity in one pass.
    #[must_use]
    pub const fn any() -> Self {
        Self { arity: None }
    }

    /// Matches only tuples of exactly `arity` cells.
    ///
    /// # Panics
    ///
    /// Panics if `arity` is not in the range 2-9.
    #[must_use]
    pub fn of_arity(arity: usize) -> Self {
        assert!(
            (2..=9).contains(&arity),
            "naked tuple arity must be in 2..=9, got {arity}"
        );
        Self { arity: Some(arity) }
    }

    /// The classic naked-twins rule: tuples of exactly two cells.
    #[must_use]
    pub const fn twins() -> Self {
        Self { arity: Some(2) }
    }
}

impl Strategy for NakedTuple {
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
            // Collect the unit's tuples before scrubbing, so eliminations
            // cannot disturb groups found in the same unit.
            let mut tuples: Vec<(DigitSet, Vec<Cell>)> = Vec::new();
            for &cell in unit.cells() {
                let set = grid.candidates(cell);
                if set.len() < 2 || tuples.iter().any(|(found, _)| *found == set) {
                    continue;
                }
                let group: Vec<_> = unit
                    .cells()
                    .iter()
                    .copied()
                    .filter(|&other| grid.candidates(other) == set)
                    .collect();
                if group.len() < 2 || group.len() != set.len() {
                    continue;
                }
                if let Some(arity) = self.arity
                    && group.len() != arity
                {
                    continue;
                }
                tuples.push((set, group));
            }

            for (set, group) in tuples {
                for &cell in unit.cells() {
                    if group.contains(&cell) {
                        continue;
                    }
                    for digit in set {
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
    use xdoku_core::{Cell, Digit, DigitSet, DiscardLog, Grid, Topology};

    use super::*;
    use crate::testing::StrategyTester;

    fn restrict(grid: &mut Grid, cell: Cell, digits: DigitSet) {
        for digit in Digit::ALL {
            if !digits.contains(digit) {
                grid.remove_candidate(cell, digit, &mut DiscardLog);
            }
        }
    }

    #[test]
    fn test_twins_eliminate_from_the_rest_of_the_row() {
        let pair = DigitSet::from_iter([Digit::D2, Digit::D3]);
        let mut grid = Grid::unconstrained();
        restrict(&mut grid, Cell::new(0, 0), pair);
        restrict(&mut grid, Cell::new(0, 4), pair);

        StrategyTester::new(Topology::standard(), grid)
            .apply_once(&NakedTuple::twins())
            .assert_removed_includes(Cell::new(0, 8), [Digit::D2, Digit::D3])
            .assert_no_change(Cell::new(1, 8));
    }

    #[test]
    fn test_single_cell_group_is_not_a_tuple() {
        let mut grid = Grid::unconstrained();
        restrict(
            &mut grid,
            Cell::new(0, 0),
            DigitSet::from_iter([Digit::D2, Digit::D3]),
        );

        StrategyTester::new(Topology::standard(), grid)
            .apply_once(&NakedTuple::any())
            .assert_no_change(Cell::new(0, 8));
    }

    #[test]
    fn test_size_mismatch_is_not_a_tuple() {
        // Two cells sharing three candidates do not claim anything.
        let triple = DigitSet::from_iter([Digit::D2, Digit::D3, Digit::D4]);
        let mut grid = Grid::unconstrained();
        restrict(&mut grid, Cell::new(0, 0), triple);
        restrict(&mut grid, Cell::new(0, 4), triple);

        StrategyTester::new(Topology::standard(), grid)
            .apply_once(&NakedTuple::any())
            .assert_no_change(Cell::new(0, 8));
    }

    #[test]
    fn test_triple_found_with_open_arity() {
        let triple = DigitSet::from_iter([Digit::D5, Digit::D6, Digit::D7]);
        let mut grid = Grid::unconstrained();
        for column in [0, 3, 6] {
            restrict(&mut grid, Cell::new(4, column), triple);
        }

        StrategyTester::new(Topology::standard(), grid)
            .apply_once(&NakedTuple::any())
            .assert_removed_includes(Cell::new(4, 8), [Digit::D5, Digit::D6, Digit::D7]);
    }

    #[test]
    fn test_disjoint_tuples_exploited_in_one_pass() {
        let pair_a = DigitSet::from_iter([Digit::D1, Digit::D2]);
        let pair_b = DigitSet::from_iter([Digit::D3, Digit::D4]);
        let mut grid = Grid::unconstrained();
        restrict(&mut grid, Cell::new(0, 0), pair_a);
        restrict(&mut grid, Cell::new(0, 4), pair_a);
        restrict(&mut grid, Cell::new(0, 5), pair_b);
        restrict(&mut grid, Cell::new(0, 7), pair_b);

        StrategyTester::new(Topology::standard(), grid)
            .apply_once(&NakedTuple::any())
            .assert_removed_includes(Cell::new(0, 8), [Digit::D1, Digit::D2, Digit::D3, Digit::D4]);
    }

    #[test]
    fn test_pinned_arity_ignores_other_sizes() {
        let triple = DigitSet::from_iter([Digit::D5, Digit::D6, Digit::D7]);
        let mut grid = Grid::unconstrained();
        for column in [0, 3, 6] {
            restrict(&mut grid, Cell::new(4, column), triple);
        }

        StrategyTester::new(Topology::standard(), grid)
            .apply_once(&NakedTuple::twins())
            .assert_no_change(Cell::new(4, 8));
    }

    #[test]
    fn test_any_arity_reproduces_naked_twins() {
        let pair = DigitSet::from_iter([Digit::D2, Digit::D3]);
        let mut grid = Grid::unconstrained();
        restrict(&mut grid, Cell::new(0, 0), pair);
        restrict(&mut grid, Cell::new(0, 1), pair);

        let topology = Topology::standard();
        let mut via_twins = grid.clone();
        let mut via_any = grid;
        NakedTuple::twins()
            .apply(&topology, &mut via_twins, &mut DiscardLog)
            .unwrap();
        NakedTuple::any()
            .apply(&topology, &mut via_any, &mut DiscardLog)
            .unwrap();

        assert_eq!(via_twins, via_any);
        assert!(!via_any.candidates(Cell::new(0, 8)).contains(Digit::D2));
    }

    #[test]
    #[should_panic(expected = "naked tuple arity must be in 2..=9")]
    fn test_rejects_arity_one() {
        let _ = NakedTuple::of_arity(1);
    }
}
