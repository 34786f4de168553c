//! Unit and peer topology for the two supported puzzle families.
//!
//! A [`Topology`] is built once from a [`Variant`] and is immutable from
//! then on. It owns the unit list (27 units for standard Sudoku, 29 when
//! the two corner-to-corner diagonals are added) and the tables derived
//! from it: which units contain each cell, and each cell's peer set (the
//! union of its units minus the cell itself).
//!
//! Everything downstream — the propagation strategies and the search —
//! borrows the topology; nothing mutates it after construction.

use tinyvec::ArrayVec;

use crate::{Cell, DigitSet, Grid};

/// Which unit families the board carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Rows, columns, and boxes only.
    #[default]
    Standard,
    /// Rows, columns, boxes, plus both corner-to-corner diagonals.
    Diagonal,
}

/// The family a unit belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    /// A horizontal row.
    Row,
    /// A vertical column.
    Column,
    /// A 3×3 box.
    Box,
    /// A corner-to-corner diagonal (diagonal variant only).
    Diagonal,
}

/// Identifier of a unit within a topology's unit list.
///
/// Unit ids are only meaningful for the topology that produced them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct UnitId(u8);

impl UnitId {
    /// Returns the position of the unit in [`Topology::units`].
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A group of 9 cells that must hold each digit 1-9 exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    kind: UnitKind,
    index: u8,
    cells: [Cell; 9],
}

impl Unit {
    fn new(kind: UnitKind, index: u8, cells: [Cell; 9]) -> Self {
        Self { kind, index, cells }
    }

    /// Returns the family this unit belongs to.
    #[must_use]
    pub const fn kind(&self) -> UnitKind {
        self.kind
    }

    /// Returns the cells of this unit in construction order.
    #[must_use]
    pub const fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns `true` if `cell` belongs to this unit.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            UnitKind::Row => write!(f, "row {}", (b'A' + self.index) as char),
            UnitKind::Column => write!(f, "column {}", self.index + 1),
            UnitKind::Box => write!(f, "box {}", self.index + 1),
            UnitKind::Diagonal => write!(f, "diagonal {}", self.index + 1),
        }
    }
}

/// Units containing one cell: 3 in standard Sudoku, up to 5 for the
/// center cell in the diagonal variant.
type UnitIds = ArrayVec<[UnitId; 5]>;

/// Peers of one cell: 20 in standard Sudoku, up to 32 for the center
/// cell in the diagonal variant.
type PeerList = ArrayVec<[Cell; 32]>;

/// The immutable unit/peer structure of a puzzle family.
///
/// # Examples
///
/// ```
/// use xdoku_core::{Cell, Topology};
///
/// let topology = Topology::standard();
/// assert_eq!(topology.units().len(), 27);
/// assert_eq!(topology.peers(Cell::new(0, 0)).len(), 20);
///
/// let diagonal = Topology::diagonal();
/// assert_eq!(diagonal.units().len(), 29);
/// // The corner sits on the main diagonal and gains peers from it.
/// assert_eq!(diagonal.peers(Cell::new(0, 0)).len(), 26);
/// ```
#[derive(Debug, Clone)]
pub struct Topology {
    variant: Variant,
    units: Vec<Unit>,
    units_of: Vec<UnitIds>,
    peers: Vec<PeerList>,
}

impl Topology {
    /// Builds the topology for `variant`.
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        let units = Self::build_units(variant);

        let mut units_of = vec![UnitIds::new(); Cell::COUNT];
        for (id, unit) in units.iter().enumerate() {
            #[expect(clippy::cast_possible_truncation)]
            let id = UnitId(id as u8);
            for cell in unit.cells() {
                units_of[cell.index()].push(id);
            }
        }

        let mut peers = Vec::with_capacity(Cell::COUNT);
        for cell in Cell::ALL {
            let mut member = [false; Cell::COUNT];
            for id in units_of[cell.index()].iter() {
                for other in units[id.index()].cells() {
                    member[other.index()] = true;
                }
            }
            member[cell.index()] = false;
            peers.push(
                Cell::ALL
                    .into_iter()
                    .filter(|c| member[c.index()])
                    .collect::<PeerList>(),
            );
        }

        Self {
            variant,
            units,
            units_of,
            peers,
        }
    }

    /// Builds the standard 27-unit topology.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(Variant::Standard)
    }

    /// Builds the 29-unit diagonal-variant topology.
    #[must_use]
    pub fn diagonal() -> Self {
        Self::new(Variant::Diagonal)
    }

    fn build_units(variant: Variant) -> Vec<Unit> {
        let mut units = Vec::with_capacity(29);

        for row in 0..9 {
            let mut cells = [Cell::default(); 9];
            for (i, cell) in cells.iter_mut().enumerate() {
                #[expect(clippy::cast_possible_truncation)]
                let column = i as u8;
                *cell = Cell::new(row, column);
            }
            units.push(Unit::new(UnitKind::Row, row, cells));
        }

        for column in 0..9 {
            let mut cells = [Cell::default(); 9];
            for (i, cell) in cells.iter_mut().enumerate() {
                #[expect(clippy::cast_possible_truncation)]
                let row = i as u8;
                *cell = Cell::new(row, column);
            }
            units.push(Unit::new(UnitKind::Column, column, cells));
        }

        for index in 0..9 {
            let (top, left) = (index / 3 * 3, index % 3 * 3);
            let mut cells = [Cell::default(); 9];
            for (i, cell) in cells.iter_mut().enumerate() {
                #[expect(clippy::cast_possible_truncation)]
                let i = i as u8;
                *cell = Cell::new(top + i / 3, left + i % 3);
            }
            units.push(Unit::new(UnitKind::Box, index, cells));
        }

        if variant == Variant::Diagonal {
            let mut main = [Cell::default(); 9];
            let mut anti = [Cell::default(); 9];
            for (i, (m, a)) in main.iter_mut().zip(anti.iter_mut()).enumerate() {
                #[expect(clippy::cast_possible_truncation)]
                let i = i as u8;
                *m = Cell::new(i, i);
                *a = Cell::new(i, 8 - i);
            }
            units.push(Unit::new(UnitKind::Diagonal, 0, main));
            units.push(Unit::new(UnitKind::Diagonal, 1, anti));
        }

        units
    }

    /// Returns the variant this topology was built for.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns every unit, rows first, then columns, boxes, and diagonals.
    #[must_use]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Returns the unit identified by `id`.
    #[must_use]
    pub fn unit(&self, id: UnitId) -> &Unit {
        &self.units[id.index()]
    }

    /// Returns the ids of the units containing `cell`.
    #[must_use]
    pub fn units_of(&self, cell: Cell) -> &[UnitId] {
        &self.units_of[cell.index()]
    }

    /// Returns the peers of `cell` in enumeration order.
    ///
    /// A peer is any other cell sharing at least one unit with `cell`.
    #[must_use]
    pub fn peers(&self, cell: Cell) -> &[Cell] {
        &self.peers[cell.index()]
    }

    /// Returns `true` if `grid` is fully solved and every unit holds the
    /// digits 1-9 exactly once.
    #[must_use]
    pub fn is_valid_solution(&self, grid: &Grid) -> bool {
        grid.is_solved()
            && self.units.iter().all(|unit| {
                unit.cells()
                    .iter()
                    .fold(DigitSet::EMPTY, |acc, &cell| acc | grid.candidates(cell))
                    == DigitSet::FULL
            })
    }
}
