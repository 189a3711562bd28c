use rand::Rng;

use crate::{
    ai::TargetingEngine,
    board::Board,
    common::ShotOutcome,
    position::Position,
};

/// Interface implemented by the different kinds of player.
///
/// A player is responsible for:
/// - placing its pieces on its own board
/// - firing exactly one shot per turn at the opponent's board
pub trait Player {
    /// Name shown in prompts and results.
    fn name(&self) -> &str;

    /// Place every catalog piece onto the player's own board.
    fn place_pieces(&mut self, board: &mut Board) -> anyhow::Result<()>;

    /// Fire one shot at `opponent`. `own` is the player's board, for display.
    fn take_turn(
        &mut self,
        own: &Board,
        opponent: &mut Board,
    ) -> anyhow::Result<(Position, ShotOutcome)>;
}

impl<R: Rng> Player for TargetingEngine<R> {
    fn name(&self) -> &str {
        "Computer"
    }

    fn place_pieces(&mut self, board: &mut Board) -> anyhow::Result<()> {
        TargetingEngine::place_pieces(self, board)?;
        Ok(())
    }

    fn take_turn(
        &mut self,
        _own: &Board,
        opponent: &mut Board,
    ) -> anyhow::Result<(Position, ShotOutcome)> {
        Ok(TargetingEngine::take_turn(self, opponent)?)
    }
}
