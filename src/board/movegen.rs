//! Legal move generation and move application.
//!
//! Legal destinations are found with directional shift fills over the
//! opponent's discs; flips are recomputed per direction when a move is
//! applied. Move lists come back in ascending square-index order.

use super::{Bitboard, Board, Move, Side};

/// The eight flip directions as bitboard shifts
const SHIFTS: [fn(Bitboard) -> Bitboard; 8] = [
    Bitboard::shift_north,
    Bitboard::shift_south,
    Bitboard::shift_east,
    Bitboard::shift_west,
    Bitboard::shift_north_east,
    Bitboard::shift_north_west,
    Bitboard::shift_south_east,
    Bitboard::shift_south_west,
];

impl Board {
    /// Bitboard of every square where `side` can legally place a disc
    #[must_use]
    pub fn legal_move_mask(&self, side: Side) -> Bitboard {
        let own = self.discs(side).0;
        let opp = self.discs(side.opponent()).0;
        let empty = !(own | opp);

        let mut moves = 0u64;
        for shift in SHIFTS {
            // Runs of opponent discs reachable from an own disc, then
            // one more step onto an empty square.
            let mut run = shift(Bitboard(own)).0 & opp;
            for _ in 0..5 {
                run |= shift(Bitboard(run)).0 & opp;
            }
            moves |= shift(Bitboard(run)).0 & empty;
        }
        Bitboard(moves)
    }

    /// All legal moves for `side`, in ascending square-index order
    #[must_use]
    pub fn legal_moves(&self, side: Side) -> Vec<Move> {
        self.legal_move_mask(side).iter().map(Move::new).collect()
    }

    /// Returns true if `side` has at least one legal move
    #[inline]
    #[must_use]
    pub fn has_legal_move(&self, side: Side) -> bool {
        !self.legal_move_mask(side).is_empty()
    }

    /// Returns true if `mv` is a legal placement for `side`
    #[must_use]
    pub fn is_legal_move(&self, mv: Move, side: Side) -> bool {
        let bit = Bitboard::from_square(mv.square());
        (bit.0 & self.occupied().0) == 0 && !self.flips_for(mv, side).is_empty()
    }

    /// Every disc flipped by placing `side`'s disc on `mv`'s square
    fn flips_for(&self, mv: Move, side: Side) -> Bitboard {
        let own = self.discs(side).0;
        let opp = self.discs(side.opponent()).0;
        let bit = Bitboard::from_square(mv.square());

        let mut flips = 0u64;
        for shift in SHIFTS {
            let mut run = 0u64;
            let mut cur = shift(bit).0;
            while cur & opp != 0 {
                run |= cur;
                cur = shift(Bitboard(cur)).0;
            }
            // A run only flips when bracketed by an own disc
            if cur & own != 0 {
                flips |= run;
            }
        }
        Bitboard(flips)
    }

    /// Place a disc for `side` and flip every bracketed run.
    ///
    /// # Panics
    ///
    /// Panics if the move is not legal for `side`. Callers are expected
    /// to choose from `legal_moves`; an illegal placement here is a
    /// programming error, not a recoverable condition.
    pub fn apply_move(&mut self, mv: Move, side: Side) {
        let bit = Bitboard::from_square(mv.square());
        assert!(
            bit.0 & self.occupied().0 == 0,
            "apply_move: square {mv} is already occupied"
        );
        let flips = self.flips_for(mv, side);
        assert!(
            !flips.is_empty(),
            "apply_move: {mv} flips nothing for {side}"
        );

        self.discs[side.index()].0 |= bit.0 | flips.0;
        self.discs[side.opponent().index()].0 &= !flips.0;
    }

    /// Count move sequences of exactly `depth` placements from this
    /// position with `side` to move. A side with no legal move passes;
    /// a position where neither side can move counts as one finished
    /// sequence. Used to validate move generation against published
    /// Reversi node counts.
    #[must_use]
    pub fn perft(&self, side: Side, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let mask = self.legal_move_mask(side);
        if mask.is_empty() {
            if self.legal_move_mask(side.opponent()).is_empty() {
                return 1;
            }
            return self.perft(side.opponent(), depth);
        }

        let mut nodes = 0;
        for sq in mask.iter() {
            let mut child = *self;
            child.apply_move(Move::new(sq), side);
            nodes += child.perft(side.opponent(), depth - 1);
        }
        nodes
    }
}
