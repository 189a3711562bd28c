//! Shot notifications, for sound effects and logging.

use crate::config::PieceKind;
use crate::position::Position;

/// Receives shot events from a [`Board`](crate::Board).
///
/// Every method defaults to doing nothing.
pub trait ShotNotifier {
    /// A shot struck a piece, including repeat shots on a hit cell.
    fn on_hit(&mut self, _target: Position) {}

    /// A shot landed in open water.
    fn on_miss(&mut self, _target: Position) {}

    /// The last intact cell of a piece was struck.
    fn on_sunk(&mut self, _kind: PieceKind) {}
}

/// Notifier that ignores every event. Boards start with one.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNotifier;

impl ShotNotifier for SilentNotifier {}

/// Writes shot events to the `log` facade at info level.
#[derive(Debug, Default, Clone)]
pub struct LogNotifier {
    label: &'static str,
}

impl LogNotifier {
    /// `label` names the board owner in each record.
    pub fn new(label: &'static str) -> Self {
        Self { label }
    }
}

impl ShotNotifier for LogNotifier {
    fn on_hit(&mut self, target: Position) {
        log::info!("{}: hit at {}", self.label, target);
    }

    fn on_miss(&mut self, target: Position) {
        log::info!("{}: miss at {}", self.label, target);
    }

    fn on_sunk(&mut self, kind: PieceKind) {
        log::info!("{}: {} sunk", self.label, kind);
    }
}

/// Rings the terminal bell: once on a hit, twice on a sinking.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct BellNotifier<W: std::io::Write> {
    out: W,
}

#[cfg(feature = "std")]
impl<W: std::io::Write> BellNotifier<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn ring(&mut self, times: usize) {
        for _ in 0..times {
            if let Err(e) = self.out.write_all(b"\x07") {
                log::warn!("bell: {}", e);
                return;
            }
        }
        let _ = self.out.flush();
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> ShotNotifier for BellNotifier<W> {
    fn on_hit(&mut self, _target: Position) {
        self.ring(1);
    }

    fn on_sunk(&mut self, _kind: PieceKind) {
        self.ring(2);
    }
}
