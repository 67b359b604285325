//! Move representation.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

use super::square::Square;

/// A disc placement. Flips are implied by the position the move is
/// applied to, so a move is just its destination square.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move(Square);

impl Move {
    /// Create a move placing a disc on the given square
    #[inline]
    #[must_use]
    pub const fn new(square: Square) -> Self {
        Move(square)
    }

    /// Create a move from (row, col) coordinates with bounds checking
    #[must_use]
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        Square::new(row, col).map(Move)
    }

    /// The destination square
    #[inline]
    #[must_use]
    pub const fn square(self) -> Square {
        self.0
    }

    /// Row of the destination square (0-7)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0.row()
    }

    /// Column of the destination square (0-7)
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.0.col()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Move {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Square>().map(Move)
    }
}
