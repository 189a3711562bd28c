//! Turn sequencing for a match between two players.

use anyhow::bail;

use crate::{board::Board, common::ShotOutcome, player::Player, position::Position};

/// One of the two seats at the table. `First` moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Side),
}

/// Both boards plus whose turn it is.
#[derive(Debug)]
pub struct Match {
    boards: [Board; 2],
    to_move: Side,
    shots: [usize; 2],
}

impl Match {
    pub fn new(first: Board, second: Board) -> Self {
        Self {
            boards: [first, second],
            to_move: Side::First,
            shots: [0, 0],
        }
    }

    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    pub fn board_mut(&mut self, side: Side) -> &mut Board {
        &mut self.boards[side.index()]
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Shots fired so far by `side`.
    pub fn shots(&self, side: Side) -> usize {
        self.shots[side.index()]
    }

    /// A side wins as soon as the opponent's board is defeated.
    pub fn status(&self) -> GameStatus {
        if self.board(Side::Second).is_defeated() {
            GameStatus::Won(Side::First)
        } else if self.board(Side::First).is_defeated() {
            GameStatus::Won(Side::Second)
        } else {
            GameStatus::InProgress
        }
    }

    /// Let `player` place its pieces on the board of `side`.
    pub fn setup(&mut self, side: Side, player: &mut dyn Player) -> anyhow::Result<()> {
        player.place_pieces(self.board_mut(side))?;
        log::info!("{} placed {} pieces", player.name(), self.board(side).pieces().len());
        Ok(())
    }

    /// Let the side to move fire once, then hand the turn over unless the
    /// shot ended the match.
    pub fn play_turn(&mut self, player: &mut dyn Player) -> anyhow::Result<(Position, ShotOutcome)> {
        if self.status() != GameStatus::InProgress {
            bail!("the match is already over");
        }
        let side = self.to_move;
        let (first, second) = self.boards.split_at_mut(1);
        let (own, opponent) = match side {
            Side::First => (&first[0], &mut second[0]),
            Side::Second => (&second[0], &mut first[0]),
        };
        let shot = player.take_turn(own, opponent)?;
        self.shots[side.index()] += 1;
        log::debug!("{} fired at {}: {:?}", player.name(), shot.0, shot.1);
        if self.status() == GameStatus::InProgress {
            self.to_move = side.other();
        }
        Ok(shot)
    }

    /// Alternate turns until someone wins.
    pub fn run(
        &mut self,
        first: &mut dyn Player,
        second: &mut dyn Player,
    ) -> anyhow::Result<Side> {
        loop {
            if let GameStatus::Won(side) = self.status() {
                return Ok(side);
            }
            match self.to_move {
                Side::First => self.play_turn(first)?,
                Side::Second => self.play_turn(second)?,
            };
        }
    }
}
