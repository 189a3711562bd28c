//! Grid coordinates and the four cardinal directions.

use core::cmp::Ordering;
use core::fmt;

use crate::config::{GRID_HEIGHT, GRID_WIDTH};

/// A cell on the grid, `x` being the column and `y` the row.
///
/// Rows grow downwards, so [`Direction::Up`] decrements `y`. Positions order
/// row-major (row first, then column), which is the scan order used by the
/// public view and the targeting engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    x: i32,
    y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Column.
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Row.
    pub const fn y(&self) -> i32 {
        self.y
    }

    pub const fn left(self) -> Self {
        Self::new(self.x - 1, self.y)
    }

    pub const fn right(self) -> Self {
        Self::new(self.x + 1, self.y)
    }

    pub const fn above(self) -> Self {
        Self::new(self.x, self.y - 1)
    }

    pub const fn below(self) -> Self {
        Self::new(self.x, self.y + 1)
    }

    /// One cell over in `dir`.
    pub const fn step(self, dir: Direction) -> Self {
        match dir {
            Direction::Left => self.left(),
            Direction::Right => self.right(),
            Direction::Up => self.above(),
            Direction::Down => self.below(),
        }
    }

    /// `n` cells over in `dir`.
    pub const fn offset(self, dir: Direction, n: i32) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx * n, self.y + dy * n)
    }

    /// Whether the position lies on the configured grid.
    pub const fn in_bounds(&self) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < GRID_WIDTH as i32 && self.y < GRID_HEIGHT as i32
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Displays as the console notation: column letter followed by the 1-based
/// row, e.g. `(2, 0)` is `C1`. Off-grid positions fall back to `(x,y)`.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.in_bounds() {
            let col = (b'A' + self.x as u8) as char;
            write!(f, "{}{}", col, self.y + 1)
        } else {
            write!(f, "({},{})", self.x, self.y)
        }
    }
}

/// One of the four cardinal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Fallback probe order around a lone hit.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// A line through the grid, as traversed by a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub const BOTH: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    /// The (negative, positive) directions along this axis.
    pub const fn directions(self) -> (Direction, Direction) {
        match self {
            Axis::Horizontal => (Direction::Left, Direction::Right),
            Axis::Vertical => (Direction::Up, Direction::Down),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbours_step_one_cell() {
        let p = Position::new(4, 4);
        assert_eq!(p.left(), Position::new(3, 4));
        assert_eq!(p.right(), Position::new(5, 4));
        assert_eq!(p.above(), Position::new(4, 3));
        assert_eq!(p.below(), Position::new(4, 5));
        for dir in Direction::ALL {
            assert_eq!(p.step(dir).step(dir.opposite()), p);
            assert_eq!(p.offset(dir, 1), p.step(dir));
        }
    }

    #[test]
    fn ordering_is_row_major() {
        assert!(Position::new(9, 0) < Position::new(0, 1));
        assert!(Position::new(2, 3) < Position::new(3, 3));
    }
}
