// Rule-based targeting for the computer player.
//
// The engine keeps no memory between turns: every decision is re-derived from
// the opponent's public view, so the same view always yields the same rule
// and, for the random fallback, the same candidate set.

use alloc::vec::Vec;

use rand::Rng;

use crate::{
    board::{Board, PublicView},
    cellmask::GridMask,
    common::{Mark, SetupError, ShotOutcome, TargetingError},
    config::{GRID_HEIGHT, GRID_WIDTH, PLACEMENT_RETRY_CAP},
    piece::Orientation,
    position::{Axis, Direction, Position},
};

/// Which rule produced a target. Reported for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Cell on the far side of a hit from its hit neighbour.
    Opposite,
    /// First open cell past a run of hits.
    ExtendLine,
    /// Open neighbour of a lone hit.
    Neighbour,
    /// Uniform choice among untargeted cells.
    Random,
}

/// Computer opponent: places pieces and picks where to fire.
#[derive(Debug, Clone)]
pub struct TargetingEngine<R: Rng> {
    rng: R,
}

impl<R: Rng> TargetingEngine<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Randomly place every catalog piece the board does not own yet.
    ///
    /// Each piece gets [`PLACEMENT_RETRY_CAP`] attempts; running out means the
    /// grid cannot hold the catalog and is reported as a setup error.
    pub fn place_pieces(&mut self, board: &mut Board) -> Result<(), SetupError> {
        let kinds: Vec<_> = board.missing_kinds().collect();
        for kind in kinds {
            let mut attempts = 0;
            loop {
                if attempts == PLACEMENT_RETRY_CAP {
                    log::error!("gave up placing {} after {} attempts", kind, attempts);
                    return Err(SetupError::PlacementExhausted { kind, attempts });
                }
                attempts += 1;
                let origin = Position::new(
                    self.rng.random_range(0..GRID_WIDTH as i32),
                    self.rng.random_range(0..GRID_HEIGHT as i32),
                );
                let orientation = if self.rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                if board.add_piece(origin, kind, orientation).is_ok() {
                    log::debug!("placed {} after {} attempt(s)", kind, attempts);
                    break;
                }
            }
        }
        Ok(())
    }

    /// Choose the next cell to fire at, or `None` if every cell is taken.
    pub fn select_target(&mut self, view: &PublicView) -> Option<(Position, Rule)> {
        let live_hits = view
            .iter()
            .filter(|(_, mark)| **mark == Mark::Hit)
            .map(|(pos, _)| *pos);
        for hit in live_hits {
            if let Some(found) = target_around(view, hit) {
                return Some(found);
            }
        }
        self.random_target(view).map(|pos| (pos, Rule::Random))
    }

    /// Fire exactly once at the opponent's board.
    pub fn take_turn(
        &mut self,
        opponent: &mut Board,
    ) -> Result<(Position, ShotOutcome), TargetingError> {
        let view = opponent.public_cell_view();
        let (target, rule) = self
            .select_target(&view)
            .ok_or(TargetingError::GridExhausted)?;
        let outcome = opponent.fire(target);
        log::debug!("fired at {} ({:?}): {:?}", target, rule, outcome);
        Ok((target, outcome))
    }

    fn random_target(&mut self, view: &PublicView) -> Option<Position> {
        let open: Vec<Position> = (!GridMask::new())
            .iter()
            .filter(|pos| !view.contains_key(pos))
            .collect();
        if open.is_empty() {
            return None;
        }
        Some(open[self.rng.random_range(0..open.len())])
    }
}

/// In bounds and never fired at.
fn is_open(view: &PublicView, pos: Position) -> bool {
    pos.in_bounds() && !view.contains_key(&pos)
}

/// Pick a target around the live hit `hit`, trying a discovered line first
/// and then any open neighbour in left, right, up, down order.
fn target_around(view: &PublicView, hit: Position) -> Option<(Position, Rule)> {
    for axis in Axis::BOTH {
        let (neg, pos) = axis.directions();
        for (toward, away) in [(neg, pos), (pos, neg)] {
            if view.get(&hit.step(toward)) != Some(&Mark::Hit) {
                continue;
            }
            let opposite = hit.step(away);
            if is_open(view, opposite) {
                return Some((opposite, Rule::Opposite));
            }
            if let Some(t) = probe(view, hit.step(toward), toward) {
                return Some((t, Rule::ExtendLine));
            }
            if let Some(t) = probe(view, hit, away) {
                return Some((t, Rule::ExtendLine));
            }
        }
    }
    Direction::ALL
        .iter()
        .map(|&dir| hit.step(dir))
        .find(|&n| is_open(view, n))
        .map(|n| (n, Rule::Neighbour))
}

/// Walk from `from` in `dir` through consecutive live hits and return the
/// first open cell. A miss, a sunk cell or the grid edge ends the line.
fn probe(view: &PublicView, from: Position, dir: Direction) -> Option<Position> {
    let mut cur = from.step(dir);
    loop {
        if !cur.in_bounds() {
            return None;
        }
        match view.get(&cur) {
            None => return Some(cur),
            Some(Mark::Hit) => cur = cur.step(dir),
            Some(Mark::Miss) | Some(Mark::Sunk) => return None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(marks: &[((i32, i32), Mark)]) -> PublicView {
        marks
            .iter()
            .map(|&((x, y), m)| (Position::new(x, y), m))
            .collect()
    }

    #[test]
    fn probe_runs_through_hits() {
        let v = view(&[((3, 3), Mark::Hit), ((4, 3), Mark::Hit), ((5, 3), Mark::Hit)]);
        assert_eq!(
            probe(&v, Position::new(3, 3), Direction::Right),
            Some(Position::new(6, 3))
        );
    }

    #[test]
    fn probe_stops_at_miss_and_edge() {
        let v = view(&[((1, 0), Mark::Hit), ((2, 0), Mark::Miss)]);
        assert_eq!(probe(&v, Position::new(0, 0), Direction::Right), None);
        assert_eq!(probe(&v, Position::new(0, 0), Direction::Left), None);
    }

    #[test]
    fn probe_stops_at_sunk() {
        let v = view(&[((5, 5), Mark::Hit), ((5, 6), Mark::Sunk)]);
        assert_eq!(probe(&v, Position::new(5, 5), Direction::Down), None);
    }

    #[test]
    fn lone_hit_prefers_left() {
        let v = view(&[((4, 4), Mark::Hit)]);
        assert_eq!(
            target_around(&v, Position::new(4, 4)),
            Some((Position::new(3, 4), Rule::Neighbour))
        );
    }
}
