use std::fmt;

use super::{Bitboard, Side, Square};

/// An 8x8 Othello position: one disc set per side.
///
/// The board is sixteen bytes and `Copy`, so search and the opening
/// precompute pass snapshots around by value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    pub(crate) discs: [Bitboard; 2],
}

impl Board {
    /// The standard starting position: white on d4 and e5, black on
    /// d5 and e4.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.place(Square(3, 4), Side::Black);
        board.place(Square(4, 3), Side::Black);
        board.place(Square(3, 3), Side::White);
        board.place(Square(4, 4), Side::White);
        board
    }

    /// A board with no discs on it
    #[must_use]
    pub fn empty() -> Self {
        Board {
            discs: [Bitboard::EMPTY; 2],
        }
    }

    /// The disc set of one side
    #[inline]
    #[must_use]
    pub fn discs(&self, side: Side) -> Bitboard {
        self.discs[side.index()]
    }

    /// All occupied squares
    #[inline]
    #[must_use]
    pub fn occupied(&self) -> Bitboard {
        Bitboard(self.discs[0].0 | self.discs[1].0)
    }

    /// Number of discs one side has on the board
    #[inline]
    #[must_use]
    pub fn count(&self, side: Side) -> u32 {
        self.discs[side.index()].popcount()
    }

    /// The side occupying a square, if any
    #[must_use]
    pub fn disc_at(&self, sq: Square) -> Option<Side> {
        if self.discs[Side::Black.index()].contains(sq) {
            Some(Side::Black)
        } else if self.discs[Side::White.index()].contains(sq) {
            Some(Side::White)
        } else {
            None
        }
    }

    /// Put a disc on an empty square without flipping anything.
    /// Position setup only; play goes through `apply_move`.
    pub(crate) fn place(&mut self, sq: Square, side: Side) {
        debug_assert!(self.disc_at(sq).is_none(), "square {sq} already occupied");
        self.discs[side.index()].0 |= Bitboard::from_square(sq).0;
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            for col in 0..8 {
                let ch = match self.disc_at(Square(row, col)) {
                    Some(Side::Black) => 'b',
                    Some(Side::White) => 'w',
                    None => '-',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
