//! Depth-limited minimax with alpha-beta cutoffs.
//!
//! The agent is always the maximizing player and the opponent always
//! minimizes, with strict alternation. A node whose side to move has
//! no legal move is scored where it stands; there is no pass handling
//! inside the tree. Interior nodes restart their own bound from the
//! sentinel and rely on the inherited opposite bound for cutoffs, so
//! with a full window at the top the returned value is the exact
//! minimax value.

use crate::board::{Board, Move, Side};

use super::eval::Evaluator;

/// Search context borrowing the evaluator for one decision
pub struct SearchContext<'a> {
    evaluator: &'a mut Evaluator,
}

impl<'a> SearchContext<'a> {
    #[must_use]
    pub fn new(evaluator: &'a mut Evaluator) -> Self {
        SearchContext { evaluator }
    }

    /// Choose the agent's move by a fixed-depth search.
    ///
    /// Root moves are tried in ascending square order and a move
    /// scoring at least as well as the running best replaces it, so
    /// ties go to the later move. Returns `None` when the agent has
    /// no legal move.
    ///
    /// # Panics
    ///
    /// Panics if `depth` is zero; callers always search at least one
    /// ply ahead.
    pub fn best_move(&mut self, board: &Board, depth: u32) -> Option<Move> {
        assert!(depth > 0, "search depth must be positive");
        let side = self.evaluator.side();

        let mut alpha = i32::MIN;
        let mut best = None;
        for mv in board.legal_moves(side) {
            let mut child = *board;
            child.apply_move(mv, side);
            let score = self.minimax(&child, side.opponent(), depth - 1, alpha, i32::MAX);
            if score >= alpha {
                alpha = score;
                best = Some(mv);
            }
        }
        best
    }

    /// Minimax value of `board` with `to_move` to play and `depth`
    /// plies left, from the agent's point of view.
    fn minimax(&mut self, board: &Board, to_move: Side, depth: u32, alpha: i32, beta: i32) -> i32 {
        if depth == 0 {
            return self.evaluator.evaluate(board);
        }
        let moves = board.legal_moves(to_move);
        if moves.is_empty() {
            return self.evaluator.evaluate(board);
        }

        if to_move == self.evaluator.side() {
            // Maximizing. The bound restarts here; cutoffs come from
            // the caller's beta.
            let mut alpha = i32::MIN;
            for mv in moves {
                let mut child = *board;
                child.apply_move(mv, to_move);
                let score = self.minimax(&child, to_move.opponent(), depth - 1, alpha, beta);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            alpha
        } else {
            let mut beta = i32::MAX;
            for mv in moves {
                let mut child = *board;
                child.apply_move(mv, to_move);
                let score = self.minimax(&child, to_move.opponent(), depth - 1, alpha, beta);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            beta
        }
    }
}

/// Convenience wrapper for a single fixed-depth decision
pub fn find_best_move(board: &Board, evaluator: &mut Evaluator, depth: u32) -> Option<Move> {
    SearchContext::new(evaluator).best_move(board, depth)
}
