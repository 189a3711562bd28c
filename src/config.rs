//! The fixed ruleset: grid size and piece catalog.

use core::fmt;
use core::str::FromStr;

use crate::common::PlacementError;

pub const GRID_WIDTH: usize = 10;
pub const GRID_HEIGHT: usize = 10;
pub const NUM_PIECES: usize = 5;

/// Attempts per piece before automatic placement gives up.
pub const PLACEMENT_RETRY_CAP: usize = 10_000;

/// A piece type from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceKind {
    Carrier,
    Battleship,
    Cruiser,
    Submarine,
    Destroyer,
}

/// Catalog in placement order.
pub const CATALOG: [PieceKind; NUM_PIECES] = [
    PieceKind::Carrier,
    PieceKind::Battleship,
    PieceKind::Cruiser,
    PieceKind::Submarine,
    PieceKind::Destroyer,
];

/// Total number of piece cells in the standard configuration.
pub const TOTAL_PIECE_CELLS: usize = 5 + 4 + 3 + 3 + 2;

impl PieceKind {
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Carrier => "CARRIER",
            PieceKind::Battleship => "BATTLESHIP",
            PieceKind::Cruiser => "CRUISER",
            PieceKind::Submarine => "SUBMARINE",
            PieceKind::Destroyer => "DESTROYER",
        }
    }

    pub const fn length(self) -> usize {
        match self {
            PieceKind::Carrier => 5,
            PieceKind::Battleship => 4,
            PieceKind::Cruiser => 3,
            PieceKind::Submarine => 3,
            PieceKind::Destroyer => 2,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Case-insensitive lookup by catalog name.
impl FromStr for PieceKind {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        CATALOG
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or(PlacementError::UnknownType)
    }
}
