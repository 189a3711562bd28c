//! Shared result, status and error types.

use core::fmt;

use crate::config::PieceKind;

/// Status of a cell occupied by a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellStatus {
    NotHit,
    Hit,
    Sunk,
}

/// What an opponent may see of a cell it has fired at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    /// Hit on a piece that is still afloat.
    Hit,
    /// Part of a sunk piece.
    Sunk,
    /// Shot that found open water.
    Miss,
}

/// Result of firing at a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    Hit,
    Miss,
    /// Target was off the grid. Nothing was recorded.
    OutOfBounds,
}

/// Reasons a piece could not be added to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Orientation code was neither horizontal nor vertical.
    InvalidOrientation,
    /// Piece name not found in the catalog.
    UnknownType,
    /// The board already owns a piece of this type.
    DuplicateType,
    /// Origin or extent falls off the grid.
    OutOfBounds,
    /// Piece would share a cell with an existing piece.
    Overlap,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::InvalidOrientation => write!(f, "Unknown orientation"),
            PlacementError::UnknownType => write!(f, "Unknown ship type"),
            PlacementError::DuplicateType => write!(f, "Ship already added"),
            PlacementError::OutOfBounds => write!(f, "Ship out of bounds"),
            PlacementError::Overlap => write!(f, "Already a ship in that position"),
        }
    }
}

/// Fatal setup failure: the ruleset leaves no room for a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    PlacementExhausted { kind: PieceKind, attempts: usize },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::PlacementExhausted { kind, attempts } => write!(
                f,
                "could not place {} after {} attempts; grid and catalog are misconfigured",
                kind, attempts
            ),
        }
    }
}

/// The targeting engine has nothing left to shoot at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetingError {
    GridExhausted,
}

impl fmt::Display for TargetingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetingError::GridExhausted => write!(f, "every cell has already been targeted"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for SetupError {}
#[cfg(feature = "std")]
impl std::error::Error for TargetingError {}
