//! Square sets as 64-bit words.

use super::square::Square;

/// A 64-bit bitboard representing a set of squares.
///
/// Bit `row * 8 + col` corresponds to the square at that row and column,
/// so rank 1 occupies the low byte and rank 8 the high byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bitboard(pub u64);

// File, rank and region masks
impl Bitboard {
    pub const FILE_A: Bitboard = Bitboard(0x0101010101010101);
    pub const FILE_H: Bitboard = Bitboard(0x8080808080808080);

    pub const RANK_1: Bitboard = Bitboard(0x00000000000000FF);
    pub const RANK_8: Bitboard = Bitboard(0xFF00000000000000);

    pub const EMPTY: Bitboard = Bitboard(0);

    /// The boundary ring: every square on the first or last rank or file.
    /// Includes the four corners.
    pub const EDGE: Bitboard =
        Bitboard(Self::FILE_A.0 | Self::FILE_H.0 | Self::RANK_1.0 | Self::RANK_8.0);

    /// The four corner squares (a1, h1, a8, h8).
    pub const CORNERS: Bitboard =
        Bitboard((Self::FILE_A.0 | Self::FILE_H.0) & (Self::RANK_1.0 | Self::RANK_8.0));
}

impl Bitboard {
    /// The singleton set holding one square
    #[inline]
    #[must_use]
    pub const fn from_square(sq: Square) -> Self {
        Bitboard(1 << (sq.0 * 8 + sq.1))
    }

    /// Membership test for one square
    #[inline]
    #[must_use]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & Self::from_square(sq).0 != 0
    }

    /// True when no square is set
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of squares in the set
    #[inline]
    #[must_use]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns an iterator over the squares set in this bitboard,
    /// in ascending index order
    #[inline]
    #[must_use]
    pub fn iter(self) -> BitboardIter {
        BitboardIter(self)
    }

    /// One step toward rank 8
    #[inline]
    #[must_use]
    pub const fn shift_north(self) -> Self {
        Bitboard(self.0 << 8)
    }

    /// One step toward rank 1
    #[inline]
    #[must_use]
    pub const fn shift_south(self) -> Self {
        Bitboard(self.0 >> 8)
    }

    /// One step toward file h; bits on file h fall off instead of
    /// wrapping onto file a
    #[inline]
    #[must_use]
    pub const fn shift_east(self) -> Self {
        Bitboard((self.0 << 1) & !Self::FILE_A.0)
    }

    /// One step toward file a; bits on file a fall off instead of
    /// wrapping onto file h
    #[inline]
    #[must_use]
    pub const fn shift_west(self) -> Self {
        Bitboard((self.0 >> 1) & !Self::FILE_H.0)
    }

    /// One diagonal step toward h8
    #[inline]
    #[must_use]
    pub const fn shift_north_east(self) -> Self {
        Bitboard((self.0 << 9) & !Self::FILE_A.0)
    }

    /// One diagonal step toward a8
    #[inline]
    #[must_use]
    pub const fn shift_north_west(self) -> Self {
        Bitboard((self.0 << 7) & !Self::FILE_H.0)
    }

    /// One diagonal step toward h1
    #[inline]
    #[must_use]
    pub const fn shift_south_east(self) -> Self {
        Bitboard((self.0 >> 7) & !Self::FILE_A.0)
    }

    /// One diagonal step toward a1
    #[inline]
    #[must_use]
    pub const fn shift_south_west(self) -> Self {
        Bitboard((self.0 >> 9) & !Self::FILE_H.0)
    }
}

fn pop_lsb(bb: &mut Bitboard) -> Square {
    let idx = bb.0.trailing_zeros() as usize;
    bb.0 &= bb.0 - 1;
    Square::from_index(idx)
}

/// Yields the squares of a bitboard from a1 upward.
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        (!self.0.is_empty()).then(|| pop_lsb(&mut self.0))
    }
}
