//! Core data structures for the xdoku solver.
//!
//! This crate provides the board model shared by the solving and
//! command-line components:
//!
//! 1. **Digits and candidate sets** — [`digit`]: the type-safe [`Digit`]
//!    and the [`DigitSet`] of candidates a cell could still hold.
//! 2. **Cells** — [`cell`]: the opaque [`Cell`] key for one of the 81
//!    board positions, with a fixed enumeration order.
//! 3. **Topology** — [`topology`]: the immutable [`Topology`] object
//!    holding the unit list (rows, columns, boxes, and optionally the two
//!    diagonals) plus the derived per-cell units and peers tables.
//! 4. **Grid state** — [`grid`]: the value-semantics [`Grid`] mapping each
//!    cell to its candidate set, with parsing and tabular rendering.
//! 5. **Replay** — [`replay`]: the [`AssignmentSink`] audit hook and the
//!    [`ReplayLog`] snapshot collector for visualization collaborators.
//!
//! # Examples
//!
//! ```
//! use xdoku_core::{DiscardLog, Grid, Topology};
//!
//! let topology = Topology::standard();
//! let line = "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
//! let grid = Grid::parse(line, &mut DiscardLog)?;
//!
//! assert_eq!(topology.units().len(), 27);
//! assert_eq!(
//!     grid.solved_count(),
//!     line.chars().filter(char::is_ascii_digit).count()
//! );
//! # Ok::<(), xdoku_core::ParseError>(())
//! ```

pub mod cell;
pub mod digit;
pub mod grid;
pub mod replay;
pub mod topology;

pub use self::{
    cell::Cell,
    digit::{Digit, DigitSet},
    grid::{Grid, ParseError},
    replay::{AssignmentSink, DiscardLog, ReplayLog},
    topology::{Topology, Unit, UnitId, UnitKind, Variant},
};
