//! Pieces and their placement geometry.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::cellmask::GridMask;
use crate::common::{CellStatus, PlacementError};
use crate::config::PieceKind;
use crate::position::{Direction, Position};

/// Orientation of a piece on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends right from the origin.
    Horizontal,
    /// Extends down from the origin.
    Vertical,
}

impl Orientation {
    pub const BOTH: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    /// Direction in which the piece extends from its origin.
    pub const fn direction(self) -> Direction {
        match self {
            Orientation::Horizontal => Direction::Right,
            Orientation::Vertical => Direction::Down,
        }
    }
}

/// Parses `h`/`v` (or the full word), ignoring case.
impl FromStr for Orientation {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("h") || s.eq_ignore_ascii_case("horizontal") {
            Ok(Orientation::Horizontal)
        } else if s.eq_ignore_ascii_case("v") || s.eq_ignore_ascii_case("vertical") {
            Ok(Orientation::Vertical)
        } else {
            Err(PlacementError::InvalidOrientation)
        }
    }
}

/// A piece placed on a board, with the status of each of its cells.
#[derive(Clone, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    origin: Position,
    orientation: Orientation,
    cells: Vec<(Position, CellStatus)>,
    footprint: GridMask,
}

impl Piece {
    /// Lays out `kind` from `origin` along `orientation`, all cells not hit.
    ///
    /// Fails with [`PlacementError::OutOfBounds`] when the origin is off the
    /// grid or the far end runs off it.
    pub fn new(
        kind: PieceKind,
        origin: Position,
        orientation: Orientation,
    ) -> Result<Self, PlacementError> {
        if !origin.in_bounds() {
            return Err(PlacementError::OutOfBounds);
        }
        let len = kind.length();
        let dir = orientation.direction();
        if !origin.offset(dir, len as i32 - 1).in_bounds() {
            return Err(PlacementError::OutOfBounds);
        }

        let cells: Vec<_> = (0..len as i32)
            .map(|i| (origin.offset(dir, i), CellStatus::NotHit))
            .collect();
        let footprint = GridMask::from_positions(cells.iter().map(|&(p, _)| p))
            .map_err(|_| PlacementError::OutOfBounds)?;

        Ok(Piece {
            kind,
            origin,
            orientation,
            cells,
            footprint,
        })
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Top-left cell.
    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Occupied cells from the origin outwards, with their status.
    pub fn cells(&self) -> impl Iterator<Item = (Position, CellStatus)> + '_ {
        self.cells.iter().copied()
    }

    /// Occupied cells as a mask.
    pub fn footprint(&self) -> GridMask {
        self.footprint
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.footprint.contains(pos)
    }

    pub fn status_at(&self, pos: Position) -> Option<CellStatus> {
        self.cells
            .iter()
            .find(|(p, _)| *p == pos)
            .map(|&(_, status)| status)
    }

    pub fn is_sunk(&self) -> bool {
        self.cells.iter().all(|(_, s)| *s == CellStatus::Sunk)
    }

    /// Registers a shot at `pos`. Returns `false` if the piece is not there.
    ///
    /// Once every cell has been hit, all of them flip to sunk. Striking a
    /// cell that is already hit or sunk changes nothing.
    pub fn strike(&mut self, pos: Position) -> bool {
        let Some(cell) = self.cells.iter_mut().find(|(p, _)| *p == pos) else {
            return false;
        };
        if cell.1 == CellStatus::NotHit {
            cell.1 = CellStatus::Hit;
            if self.cells.iter().all(|(_, s)| *s == CellStatus::Hit) {
                for (_, status) in self.cells.iter_mut() {
                    *status = CellStatus::Sunk;
                }
            }
        }
        true
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hits = self
            .cells
            .iter()
            .filter(|(_, s)| *s != CellStatus::NotHit)
            .count();
        write!(
            f,
            "Piece {{ kind: {}, origin: {}, orientation: {:?}, hits: {}/{}, sunk: {} }}",
            self.kind,
            self.origin,
            self.orientation,
            hits,
            self.cells.len(),
            self.is_sunk(),
        )
    }
}
