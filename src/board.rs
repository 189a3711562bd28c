//! Board state: placed pieces, missed shots and defeat tracking.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt;

use crate::cellmask::GridMask;
use crate::common::{CellStatus, Mark, PlacementError, ShotOutcome};
use crate::config::{PieceKind, CATALOG};
use crate::notifier::{ShotNotifier, SilentNotifier};
use crate::piece::{Orientation, Piece};
use crate::position::Position;

/// Owner's view: every piece cell with its status.
pub type FullView = BTreeMap<Position, CellStatus>;

/// Opponent's view: struck piece cells and misses, in row-major order.
pub type PublicView = BTreeMap<Position, Mark>;

pub struct Board {
    pieces: Vec<Piece>,
    misses: Vec<Position>,
    occupied: GridMask,
    defeated: bool,
    notifier: Box<dyn ShotNotifier>,
}

impl Board {
    /// Create an empty board with a silent notifier.
    pub fn new() -> Self {
        Self::with_notifier(Box::new(SilentNotifier))
    }

    pub fn with_notifier(notifier: Box<dyn ShotNotifier>) -> Self {
        Board {
            pieces: Vec::new(),
            misses: Vec::new(),
            occupied: GridMask::new(),
            defeated: false,
            notifier,
        }
    }

    /// Pieces in the order they were added.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Missed shots in firing order, duplicates included.
    pub fn misses(&self) -> &[Position] {
        &self.misses
    }

    /// Cells covered by any piece.
    pub fn occupied(&self) -> GridMask {
        self.occupied
    }

    pub fn has_piece(&self, kind: PieceKind) -> bool {
        self.pieces.iter().any(|p| p.kind() == kind)
    }

    /// Catalog types this board does not own yet, in catalog order.
    pub fn missing_kinds(&self) -> impl Iterator<Item = PieceKind> + '_ {
        CATALOG.iter().copied().filter(move |k| !self.has_piece(*k))
    }

    /// True once the board owns at least one piece and all of them are sunk.
    pub fn is_defeated(&self) -> bool {
        self.defeated
    }

    /// Place a piece, leaving the board untouched on failure.
    pub fn add_piece(
        &mut self,
        origin: Position,
        kind: PieceKind,
        orientation: Orientation,
    ) -> Result<(), PlacementError> {
        if self.has_piece(kind) {
            return Err(PlacementError::DuplicateType);
        }
        let piece = Piece::new(kind, origin, orientation)?;
        if self.occupied.intersects(&piece.footprint()) {
            return Err(PlacementError::Overlap);
        }
        log::trace!("placed {} at {} {:?}", kind, origin, orientation);
        self.occupied |= piece.footprint();
        self.pieces.push(piece);
        Ok(())
    }

    /// Place a piece from its catalog name and an orientation code
    /// (`h`/`v`), as typed at the console.
    pub fn place_by_name(
        &mut self,
        origin: Position,
        kind: &str,
        orientation: &str,
    ) -> Result<(), PlacementError> {
        let orientation: Orientation = orientation.parse()?;
        let kind: PieceKind = kind.parse()?;
        self.add_piece(origin, kind, orientation)
    }

    /// Fire at `target`.
    ///
    /// Re-firing at a struck cell reports `Hit` again without changing
    /// anything. Repeated misses are recorded again.
    pub fn fire(&mut self, target: Position) -> ShotOutcome {
        if !target.in_bounds() {
            log::debug!("shot at {} is off the grid", target);
            return ShotOutcome::OutOfBounds;
        }
        if !self.occupied.contains(target) {
            self.misses.push(target);
            self.notifier.on_miss(target);
            return ShotOutcome::Miss;
        }

        let mut sunk = None;
        let mut all_sunk = true;
        for piece in self.pieces.iter_mut() {
            if piece.occupies(target) {
                let was_sunk = piece.is_sunk();
                piece.strike(target);
                if !was_sunk && piece.is_sunk() {
                    sunk = Some(piece.kind());
                }
            }
            all_sunk &= piece.is_sunk();
        }

        self.notifier.on_hit(target);
        if let Some(kind) = sunk {
            log::debug!("{} sunk", kind);
            self.notifier.on_sunk(kind);
            if all_sunk {
                log::debug!("all pieces sunk");
                self.defeated = true;
            }
        }
        ShotOutcome::Hit
    }

    /// Every piece cell and its status.
    pub fn full_cell_view(&self) -> FullView {
        self.pieces.iter().flat_map(|p| p.cells()).collect()
    }

    /// Struck piece cells and misses; never reveals an intact cell.
    pub fn public_cell_view(&self) -> PublicView {
        let mut view: PublicView = self
            .pieces
            .iter()
            .flat_map(|p| p.cells())
            .filter_map(|(pos, status)| match status {
                CellStatus::NotHit => None,
                CellStatus::Hit => Some((pos, Mark::Hit)),
                CellStatus::Sunk => Some((pos, Mark::Sunk)),
            })
            .collect();
        for &pos in &self.misses {
            view.insert(pos, Mark::Miss);
        }
        view
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("pieces", &self.pieces)
            .field("misses", &self.misses)
            .field("defeated", &self.defeated)
            .finish()
    }
}
