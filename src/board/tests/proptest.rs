//! Property-based tests using proptest.

use crate::board::{Board, Move, Side, Square};
use proptest::prelude::*;

/// Strategy to generate a random playout length
fn ply_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play `plies` random legal moves from the start, passing when a side
/// is stuck. Returns the resulting position and the side to move.
fn random_position(seed: u64, plies: usize) -> (Board, Side) {
    use rand::prelude::*;

    let mut board = Board::new();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut to_move = Side::Black;

    for _ in 0..plies {
        let moves = board.legal_moves(to_move);
        if moves.is_empty() {
            to_move = to_move.opponent();
            if board.legal_moves(to_move).is_empty() {
                break;
            }
            continue;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        board.apply_move(mv, to_move);
        to_move = to_move.opponent();
    }
    (board, to_move)
}

proptest! {
    /// Property: applying a legal move adds exactly one disc, flips at
    /// least one, and keeps the disc sets disjoint
    #[test]
    fn prop_apply_invariants(seed in seed_strategy(), plies in ply_count_strategy()) {
        use rand::prelude::*;

        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut to_move = Side::Black;

        for _ in 0..plies {
            let moves = board.legal_moves(to_move);
            if moves.is_empty() {
                to_move = to_move.opponent();
                if board.legal_moves(to_move).is_empty() {
                    break;
                }
                continue;
            }
            let mv = moves[rng.gen_range(0..moves.len())];

            let own_before = board.count(to_move);
            let opp_before = board.count(to_move.opponent());
            board.apply_move(mv, to_move);

            // One disc placed plus at least one flip gained
            prop_assert!(board.count(to_move) >= own_before + 2);
            prop_assert!(board.count(to_move.opponent()) < opp_before);
            prop_assert_eq!(
                board.count(to_move) + board.count(to_move.opponent()),
                own_before + opp_before + 1
            );
            prop_assert_eq!(
                board.discs(Side::Black).0 & board.discs(Side::White).0,
                0
            );

            to_move = to_move.opponent();
        }
    }

    /// Property: the bulk legal-move mask agrees with per-square
    /// legality checks on every square
    #[test]
    fn prop_mask_matches_per_square(seed in seed_strategy(), plies in ply_count_strategy()) {
        let (board, _) = random_position(seed, plies);

        for side in Side::BOTH {
            let mask = board.legal_move_mask(side);
            for idx in 0..64 {
                let sq = Square::from_index(idx);
                prop_assert_eq!(
                    mask.contains(sq),
                    board.is_legal_move(Move::new(sq), side),
                    "disagreement on {} for {}", sq, side
                );
            }
        }
    }

    /// Property: legal move lists are sorted by square index
    #[test]
    fn prop_legal_moves_sorted(seed in seed_strategy(), plies in ply_count_strategy()) {
        let (board, to_move) = random_position(seed, plies);

        let moves = board.legal_moves(to_move);
        for pair in moves.windows(2) {
            prop_assert!(pair[0].square() < pair[1].square());
        }
    }

    /// Property: grid formatting round-trips through the parser
    #[test]
    fn prop_grid_round_trip(seed in seed_strategy(), plies in ply_count_strategy()) {
        let (board, _) = random_position(seed, plies);

        let reparsed = Board::from_grid(&board.to_grid()).unwrap();
        prop_assert_eq!(reparsed, board);
    }
}
