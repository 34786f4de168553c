//! Candidate-grid state, parsing, and rendering.

use std::{
    fmt::{self, Debug, Display},
    str::FromStr,
};

use derive_more::{Display, Error};

use crate::{AssignmentSink, Cell, Digit, DigitSet, replay::DiscardLog};

/// Error parsing an 81-character puzzle line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseError {
    /// The line did not contain exactly 81 characters.
    #[display("puzzle line must be 81 characters, got {len}")]
    BadLength {
        /// Number of characters found.
        len: usize,
    },
    /// The line contained a character other than `1`-`9` or `.`.
    #[display("invalid character {found:?} at index {index}")]
    BadCharacter {
        /// Offset of the offending character.
        index: usize,
        /// The offending character.
        found: char,
    },
}

/// The candidate state of the full board.
///
/// A grid maps every [`Cell`] to the [`DigitSet`] of digits it could still
/// hold. A cell is *solved* when its set is a singleton; an *empty* set
/// marks a contradicted state that callers must discard.
///
/// Grids have value semantics: the search clones the grid at every branch
/// point so sibling branches never share mutable state.
///
/// Mutations that newly reduce a cell to a single candidate notify the
/// [`AssignmentSink`] passed to them, so an external collaborator can
/// replay the solve. The grid itself never reads those snapshots back.
///
/// # Examples
///
/// ```
/// use xdoku_core::{Cell, Digit, DiscardLog, Grid};
///
/// let line = "4.....8.5.3..........7......2.....6.....8.4......1.......6.3.7.5..2.....1.4......";
/// let grid = Grid::parse(line, &mut DiscardLog)?;
///
/// assert_eq!(grid.candidates(Cell::new(0, 0)).as_single(), Some(Digit::D4));
/// assert_eq!(grid.candidates(Cell::new(0, 1)).len(), 9);
/// assert!(!grid.is_solved());
/// # Ok::<(), xdoku_core::ParseError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [DigitSet; Cell::COUNT],
}

impl Grid {
    /// Creates a grid with every candidate open in every cell.
    #[must_use]
    pub const fn unconstrained() -> Self {
        Self {
            cells: [DigitSet::FULL; Cell::COUNT],
        }
    }

    /// Parses an 81-character puzzle line in row-major order.
    ///
    /// Digits `1`-`9` are givens; `.` leaves the cell unconstrained. Each
    /// given is recorded through `log` as an assignment, in reading order.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the line is not exactly 81 characters or
    /// contains a character outside `1`-`9` and `.`.
    pub fn parse(line: &str, log: &mut dyn AssignmentSink) -> Result<Self, ParseError> {
        let len = line.chars().count();
        if len != Cell::COUNT {
            return Err(ParseError::BadLength { len });
        }

        let mut grid = Self::unconstrained();
        for (index, c) in line.chars().enumerate() {
            if c == '.' {
                continue;
            }
            let digit =
                Digit::from_char(c).ok_or(ParseError::BadCharacter { index, found: c })?;
            grid.assign(Cell::from_index(index), digit, log);
        }
        Ok(grid)
    }

    /// Returns the candidate set of `cell`.
    #[must_use]
    pub const fn candidates(&self, cell: Cell) -> DigitSet {
        self.cells[cell.index()]
    }

    /// Fixes `cell` to `digit`, replacing its candidate set with the
    /// singleton. Returns `true` if the cell changed; a change is recorded
    /// through `log`.
    pub fn assign(&mut self, cell: Cell, digit: Digit, log: &mut dyn AssignmentSink) -> bool {
        let single = DigitSet::from_elem(digit);
        if self.cells[cell.index()] == single {
            return false;
        }
        self.cells[cell.index()] = single;
        log.record(self);
        true
    }

    /// Removes `digit` from the candidates of `cell`. Returns `true` if
    /// the set changed; a removal that leaves a singleton is recorded
    /// through `log` as an assignment.
    pub fn remove_candidate(
        &mut self,
        cell: Cell,
        digit: Digit,
        log: &mut dyn AssignmentSink,
    ) -> bool {
        if !self.cells[cell.index()].remove(digit) {
            return false;
        }
        if self.cells[cell.index()].len() == 1 {
            log.record(self);
        }
        true
    }

    /// Returns the number of solved cells (singleton candidate sets).
    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.cells.iter().filter(|set| set.len() == 1).count()
    }

    /// Returns `true` if every cell is solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved_count() == Cell::COUNT
    }

    /// Returns the first cell whose candidate set is empty, if any.
    #[must_use]
    pub fn first_empty(&self) -> Option<Cell> {
        Cell::ALL
            .into_iter()
            .find(|&cell| self.candidates(cell).is_empty())
    }

    /// Renders the grid as a compact 81-character line: the digit for
    /// solved cells, `.` otherwise.
    #[must_use]
    pub fn to_line(&self) -> String {
        self.cells
            .iter()
            .map(|set| set.as_single().map_or('.', Digit::to_char))
            .collect()
    }
}

impl FromStr for Grid {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, &mut DiscardLog)
    }
}

impl Display for Grid {
    /// Renders the candidate table: one column per cell wide enough for
    /// the largest candidate set, with box boundaries every 3 rows and
    /// columns.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = 1 + self
            .cells
            .iter()
            .map(|set| set.len())
            .max()
            .unwrap_or_default();
        let band = "-".repeat(width * 3);
        let separator = format!("{band}+{band}+{band}");

        for row in 0..9 {
            for column in 0..9 {
                let set = self.candidates(Cell::new(row, column));
                write!(f, "{:^width$}", set.to_string())?;
                if column == 2 || column == 5 {
                    write!(f, "|")?;
                }
            }
            writeln!(f)?;
            if row == 2 || row == 5 {
                writeln!(f, "{separator}")?;
            }
        }
        Ok(())
    }
}

impl Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid({})", self.to_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReplayLog;

    const EMPTY_LINE: &str = ".................................................................................";

    #[test]
    fn test_parse_round_trips() {
        let line = "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
        let grid: Grid = line.parse().unwrap();
        assert_eq!(grid.to_line(), line);
        assert_eq!(grid.solved_count(), 32);
    }

    #[test]
    fn test_parse_dot_is_unconstrained() {
        let grid: Grid = EMPTY_LINE.parse().unwrap();
        for cell in Cell::ALL {
            assert_eq!(grid.candidates(cell), DigitSet::FULL);
        }
        assert_eq!(grid, Grid::unconstrained());
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(
            "123".parse::<Grid>(),
            Err(ParseError::BadLength { len: 3 })
        );
        let long = ".".repeat(82);
        assert_eq!(
            long.parse::<Grid>(),
            Err(ParseError::BadLength { len: 82 })
        );
    }

    #[test]
    fn test_parse_rejects_bad_character() {
        let mut line = EMPTY_LINE.to_string();
        line.replace_range(40..41, "0");
        assert_eq!(
            line.parse::<Grid>(),
            Err(ParseError::BadCharacter {
                index: 40,
                found: '0'
            })
        );
    }

    #[test]
    fn test_parse_records_givens_in_reading_order() {
        let mut line = EMPTY_LINE.to_string();
        line.replace_range(0..1, "7");
        line.replace_range(10..11, "3");

        let mut log = ReplayLog::new();
        let grid = Grid::parse(&line, &mut log).unwrap();
        assert_eq!(log.len(), 2);

        let snapshots = log.snapshots();
        assert_eq!(
            snapshots[0].candidates(Cell::from_index(0)).as_single(),
            Some(Digit::D7)
        );
        // The first snapshot predates the second given.
        assert_eq!(snapshots[0].candidates(Cell::from_index(10)).len(), 9);
        assert_eq!(snapshots[1], grid);
    }

    #[test]
    fn test_assign_reports_change() {
        let mut grid = Grid::unconstrained();
        let cell = Cell::new(3, 3);
        assert!(grid.assign(cell, Digit::D6, &mut DiscardLog));
        assert!(!grid.assign(cell, Digit::D6, &mut DiscardLog));
        assert_eq!(grid.candidates(cell).as_single(), Some(Digit::D6));
    }

    #[test]
    fn test_remove_candidate_logs_only_new_singletons() {
        let mut grid = Grid::unconstrained();
        let cell = Cell::new(0, 0);
        let mut log = ReplayLog::new();

        for digit in [
            Digit::D2,
            Digit::D3,
            Digit::D4,
            Digit::D5,
            Digit::D6,
            Digit::D7,
            Digit::D8,
        ] {
            assert!(grid.remove_candidate(cell, digit, &mut log));
        }
        assert!(log.is_empty());

        // The eighth removal leaves a singleton and is recorded.
        assert!(grid.remove_candidate(cell, Digit::D9, &mut log));
        assert_eq!(log.len(), 1);
        assert_eq!(grid.candidates(cell).as_single(), Some(Digit::D1));

        // Removing an absent digit is a no-op.
        assert!(!grid.remove_candidate(cell, Digit::D9, &mut log));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_remove_candidate_can_empty_a_cell() {
        let mut grid = Grid::unconstrained();
        let cell = Cell::new(8, 8);
        for digit in Digit::ALL {
            grid.remove_candidate(cell, digit, &mut DiscardLog);
        }
        assert_eq!(grid.first_empty(), Some(cell));
    }

    #[test]
    fn test_first_empty_none_on_valid_state() {
        assert_eq!(Grid::unconstrained().first_empty(), None);
    }

    #[test]
    fn test_display_marks_box_boundaries() {
        let grid: Grid = EMPTY_LINE.parse().unwrap();
        let rendered = grid.to_string();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 11);
        assert!(lines[3].contains('+'));
        assert!(lines[7].contains('+'));
        assert_eq!(lines[0].matches('|').count(), 2);
    }
}
