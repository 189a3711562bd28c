use std::io::{BufRead, Write};

use anyhow::{bail, Context};
use rand::rngs::SmallRng;

use crate::{
    ai::TargetingEngine,
    board::Board,
    common::ShotOutcome,
    config::{PieceKind, GRID_HEIGHT, GRID_WIDTH},
    player::Player,
    position::Position,
    ui,
};

/// Parse console coordinates such as `A1`, `a,1` or `(J,10)`.
///
/// The letter is the column and the number the 1-based row.
pub fn parse_coord(input: &str) -> Option<Position> {
    let cleaned: String = input
        .chars()
        .filter(|c| !matches!(c, '(' | ')' | ',') && !c.is_whitespace())
        .collect();
    let mut chars = cleaned.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row: usize = chars.as_str().parse().ok()?;
    if col >= GRID_WIDTH || row == 0 || row > GRID_HEIGHT {
        return None;
    }
    Some(Position::new(col as i32, row as i32 - 1))
}

/// A human at the console, reading from `input` and writing to `output`.
pub struct CliPlayer<I: BufRead, O: Write> {
    name: String,
    input: I,
    output: O,
    rng: SmallRng,
    auto_place: bool,
}

impl<I: BufRead, O: Write> CliPlayer<I, O> {
    /// `rng` is only used when the player asks for automatic placement.
    pub fn new(name: impl Into<String>, input: I, output: O, rng: SmallRng) -> Self {
        Self {
            name: name.into(),
            input,
            output,
            rng,
            auto_place: false,
        }
    }

    /// Skip the placement prompts and place everything randomly.
    pub fn with_auto_place(mut self, auto_place: bool) -> Self {
        self.auto_place = auto_place;
        self
    }

    /// Everything written to the player so far.
    pub fn output(&self) -> &O {
        &self.output
    }

    fn prompt(&mut self, msg: &str) -> anyhow::Result<String> {
        write!(self.output, "{}", msg)?;
        self.output.flush()?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("reading input")?;
        if read == 0 {
            bail!("input closed");
        }
        Ok(line.trim().to_string())
    }

    fn prompt_coord(&mut self, msg: &str) -> anyhow::Result<Position> {
        loop {
            let line = self.prompt(msg)?;
            match parse_coord(&line) {
                Some(pos) => return Ok(pos),
                None => writeln!(self.output, "Please enter a coordinate of the form A1")?,
            }
        }
    }

    fn place_randomly(&mut self, board: &mut Board) -> anyhow::Result<()> {
        TargetingEngine::new(&mut self.rng).place_pieces(board)?;
        write!(self.output, "{}", ui::render_owner(board))?;
        Ok(())
    }
}

impl<I: BufRead, O: Write> Player for CliPlayer<I, O> {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_pieces(&mut self, board: &mut Board) -> anyhow::Result<()> {
        writeln!(self.output, "{}, place your ships", self.name)?;
        if self.auto_place {
            return self.place_randomly(board);
        }
        let answer = self.prompt("Auto place ships? (y,n) ")?;
        if answer.eq_ignore_ascii_case("y") {
            return self.place_randomly(board);
        }

        loop {
            write!(self.output, "{}", ui::render_owner(board))?;
            let available: Vec<PieceKind> = board.missing_kinds().collect();
            if available.is_empty() {
                return Ok(());
            }
            writeln!(self.output, "{:<12}Length", "")?;
            for kind in &available {
                writeln!(self.output, "{:<12}{}", kind.name(), kind.length())?;
            }

            let choice = self.prompt("Choose a ship to place: ")?;
            let origin = self.prompt_coord(
                "Where would you like to put it? Enter the top left coordinate like A1: ",
            )?;
            let orientation = self.prompt("Vertical (v) or Horizontal (h): ")?;
            match board.place_by_name(origin, &choice, &orientation) {
                Ok(()) => log::debug!("{} placed {} at {}", self.name, choice, origin),
                Err(e) => writeln!(self.output, "{}, try again.", e)?,
            }
        }
    }

    fn take_turn(
        &mut self,
        own: &Board,
        opponent: &mut Board,
    ) -> anyhow::Result<(Position, ShotOutcome)> {
        writeln!(self.output, "\n{}'s turn.", self.name)?;
        write!(self.output, "{}", ui::legend())?;
        writeln!(self.output, "\nYour ships, {}:", self.name)?;
        write!(self.output, "{}", ui::render_owner(own))?;
        writeln!(self.output, "Ships still alive:")?;
        write!(self.output, "{}", ui::render_roster(own, false))?;
        writeln!(self.output, "\nThe enemy ships:")?;
        write!(self.output, "{}", ui::render_public(opponent))?;
        writeln!(self.output, "Enemy ships sunk:")?;
        write!(self.output, "{}", ui::render_roster(opponent, true))?;

        let target = self.prompt_coord("Choose a target (e.g. A1): ")?;
        let struck = opponent
            .pieces()
            .iter()
            .find(|p| p.occupies(target) && !p.is_sunk())
            .map(|p| p.kind());
        let outcome = opponent.fire(target);
        match outcome {
            ShotOutcome::Hit => {
                writeln!(self.output, "Hit!")?;
                let sank = struck.filter(|kind| {
                    opponent
                        .pieces()
                        .iter()
                        .any(|p| p.kind() == *kind && p.is_sunk())
                });
                if let Some(kind) = sank {
                    writeln!(self.output, "{} sunk!", kind)?;
                }
            }
            ShotOutcome::Miss => writeln!(self.output, "Miss!")?,
            ShotOutcome::OutOfBounds => writeln!(self.output, "Shot out of boundaries")?,
        }
        Ok((target, outcome))
    }
}
