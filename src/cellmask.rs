//! A fixed-size set of grid cells packed into an unsigned integer.
//!
//! The mask is `no_std` friendly and avoids heap allocations. Cells are
//! addressed by [`Position`] and stored row-major, so iteration yields
//! positions in the same order the public view is scanned.

use core::ops::{BitAnd, BitOr, BitOrAssign, Not};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::config::{GRID_HEIGHT, GRID_WIDTH};
use crate::position::Position;

/// Mask over the configured grid.
pub type GridMask = CellMask<u128, GRID_WIDTH, GRID_HEIGHT>;

/// Errors returned by mask operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// Requested `W*H` exceeds the capacity of `T`.
    SizeTooLarge { cells: usize, capacity: usize },
    /// Position lies outside `0..W` × `0..H`.
    OutOfBounds { x: i32, y: i32 },
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskError::SizeTooLarge { cells, capacity } => {
                write!(f, "SizeTooLarge: W*H={} exceeds T::BITS={}", cells, capacity)
            }
            MaskError::OutOfBounds { x, y } => write!(f, "OutOfBounds: x={}, y={}", x, y),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MaskError {}

/// A `W`×`H` set of cells stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CellMask<T, const W: usize, const H: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const W: usize, const H: usize> CellMask<T, W, H>
where
    T: PrimInt + Unsigned + Zero,
{
    const CELLS: usize = W * H;

    #[inline]
    fn full() -> T {
        if Self::CELLS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::CELLS) - T::one()
        }
    }

    #[inline]
    fn bit(pos: Position) -> Option<usize> {
        let (x, y) = (pos.x(), pos.y());
        if x < 0 || y < 0 || x as usize >= W || y as usize >= H {
            None
        } else {
            Some(y as usize * W + x as usize)
        }
    }

    /// Empty mask without a capacity check.
    #[inline]
    pub fn new() -> Self {
        CellMask { bits: T::zero() }
    }

    /// Fallible constructor: `Err(SizeTooLarge)` if `W*H` exceeds `T::BITS`.
    pub fn try_new() -> Result<Self, MaskError> {
        let capacity = mem::size_of::<T>() * 8;
        if Self::CELLS > capacity {
            Err(MaskError::SizeTooLarge {
                cells: Self::CELLS,
                capacity,
            })
        } else {
            Ok(Self::new())
        }
    }

    /// Number of cells in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Membership test. Off-grid positions are never members.
    pub fn contains(&self, pos: Position) -> bool {
        match Self::bit(pos) {
            Some(idx) => ((self.bits >> idx) & T::one()) != T::zero(),
            None => false,
        }
    }

    /// Adds `pos`, returning whether it was newly inserted.
    pub fn insert(&mut self, pos: Position) -> Result<bool, MaskError> {
        let idx = Self::bit(pos).ok_or(MaskError::OutOfBounds {
            x: pos.x(),
            y: pos.y(),
        })?;
        let flag = T::one() << idx;
        let fresh = (self.bits & flag).is_zero();
        self.bits = self.bits | flag;
        Ok(fresh)
    }

    /// Whether the two masks share any cell.
    pub fn intersects(&self, other: &Self) -> bool {
        !(self.bits & other.bits).is_zero()
    }

    /// Builds a mask from positions, failing on the first off-grid one.
    pub fn from_positions<I>(iter: I) -> Result<Self, MaskError>
    where
        I: IntoIterator<Item = Position>,
    {
        let mut mask = Self::new();
        for pos in iter {
            mask.insert(pos)?;
        }
        Ok(mask)
    }

    /// Member positions in row-major order.
    pub fn iter(&self) -> Cells<'_, T, W, H> {
        Cells { mask: self, idx: 0 }
    }
}

impl<T, const W: usize, const H: usize> Default for CellMask<T, W, H>
where
    T: PrimInt + Unsigned + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const W: usize, const H: usize> fmt::Debug for CellMask<T, W, H>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CellMask<{}x{}>:", W, H)?;
        for y in 0..H {
            for x in 0..W {
                let c = if self.contains(Position::new(x as i32, y as i32)) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the members of a [`CellMask`].
#[derive(Clone, Copy)]
pub struct Cells<'a, T, const W: usize, const H: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    mask: &'a CellMask<T, W, H>,
    idx: usize,
}

impl<T, const W: usize, const H: usize> Iterator for Cells<'_, T, W, H>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        while self.idx < W * H {
            let idx = self.idx;
            self.idx += 1;
            if ((self.mask.bits >> idx) & T::one()) != T::zero() {
                return Some(Position::new((idx % W) as i32, (idx / W) as i32));
            }
        }
        None
    }
}

impl<T, const W: usize, const H: usize> BitAnd for CellMask<T, W, H>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        CellMask {
            bits: self.bits & rhs.bits,
        }
    }
}

impl<T, const W: usize, const H: usize> BitOr for CellMask<T, W, H>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        CellMask {
            bits: self.bits | rhs.bits,
        }
    }
}

impl<T, const W: usize, const H: usize> BitOrAssign for CellMask<T, W, H>
where
    T: PrimInt + Unsigned + Zero,
{
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}

/// Complement within the grid.
impl<T, const W: usize, const H: usize> Not for CellMask<T, W, H>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn not(self) -> Self {
        CellMask {
            bits: !self.bits & Self::full(),
        }
    }
}
