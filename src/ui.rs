//! Text rendering of boards for the console.

use std::fmt::Write;

use crate::{
    board::Board,
    common::{CellStatus, Mark},
    config::{GRID_HEIGHT, GRID_WIDTH},
    position::Position,
};

const NOT_HIT: char = 'S';
const HIT: char = 'X';
const SUNK: char = '#';
const MISS: char = 'o';
const EMPTY: char = '.';

/// Key to the symbols used by the renderers.
pub fn legend() -> String {
    format!(
        "{} = not yet hit\n{} = hit\n{} = ship sunk\n{} = miss\n",
        NOT_HIT, HIT, SUNK, MISS
    )
}

fn header() -> String {
    let mut s = String::from("   ");
    for c in 0..GRID_WIDTH {
        s.push((b'A' + c as u8) as char);
        s.push(' ');
    }
    s.truncate(s.trim_end().len());
    s.push('\n');
    s
}

fn render_grid(cell: impl Fn(Position) -> char) -> String {
    let mut out = header();
    for y in 0..GRID_HEIGHT {
        let _ = write!(out, "{:>2}|", y + 1);
        for x in 0..GRID_WIDTH {
            out.push(cell(Position::new(x as i32, y as i32)));
            out.push('|');
        }
        out.push('\n');
    }
    out
}

/// The owner's view: intact pieces are shown.
pub fn render_owner(board: &Board) -> String {
    let cells = board.full_cell_view();
    let misses = board.misses();
    render_grid(|pos| match cells.get(&pos) {
        Some(CellStatus::NotHit) => NOT_HIT,
        Some(CellStatus::Hit) => HIT,
        Some(CellStatus::Sunk) => SUNK,
        None if misses.contains(&pos) => MISS,
        None => EMPTY,
    })
}

/// The opponent's view: only hits, sinkings and misses.
pub fn render_public(board: &Board) -> String {
    let view = board.public_cell_view();
    render_grid(|pos| match view.get(&pos) {
        Some(Mark::Hit) => HIT,
        Some(Mark::Sunk) => SUNK,
        Some(Mark::Miss) => MISS,
        None => EMPTY,
    })
}

/// Table of pieces still afloat (`sunk == false`) or already sunk.
pub fn render_roster(board: &Board, sunk: bool) -> String {
    let mut out = format!("{:<12}Length\n", "");
    for piece in board.pieces().iter().filter(|p| p.is_sunk() == sunk) {
        let _ = writeln!(out, "{:<12}{}", piece.kind().name(), piece.len());
    }
    out
}
