//! Static position evaluation.
//!
//! The heuristic score is computed for Black and negated for a White
//! agent: disc differential, plus weighted differentials of edge and
//! corner discs. Heuristic scores are memoized in the transposition
//! cache; a cache hit skips scoring entirely.

use crate::board::{Bitboard, Board, Side};
use crate::tt::{Fingerprint, TranspositionCache};

use super::config::EngineConfig;

/// Scoring mode for the evaluator
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EvalMode {
    /// Positional heuristic backed by the transposition cache
    Heuristic,
    /// Raw disc differential with no caching. Keeps shallow searches
    /// exactly predictable for tests.
    MaterialOnly,
}

/// Static evaluator for one agent side, owning the score cache.
pub struct Evaluator {
    side: Side,
    mode: EvalMode,
    cache: TranspositionCache,
    edge_weight: i32,
    corner_weight: i32,
}

impl Evaluator {
    #[must_use]
    pub fn new(side: Side, mode: EvalMode, config: &EngineConfig) -> Self {
        Evaluator {
            side,
            mode,
            cache: TranspositionCache::new(config.cache_capacity),
            edge_weight: config.edge_weight,
            corner_weight: config.corner_weight,
        }
    }

    /// The side this evaluator scores for
    #[inline]
    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    #[must_use]
    pub fn mode(&self) -> EvalMode {
        self.mode
    }

    /// The score cache
    #[must_use]
    pub fn cache(&self) -> &TranspositionCache {
        &self.cache
    }

    /// Score a position from the agent side's point of view.
    /// Higher is better for the agent.
    pub fn evaluate(&mut self, board: &Board) -> i32 {
        match self.mode {
            EvalMode::MaterialOnly => self.material(board),
            EvalMode::Heuristic => {
                let key = Fingerprint::of(board, self.side);
                if let Some(score) = self.cache.get(key) {
                    return score;
                }
                let score = self.heuristic(board);
                self.cache.put(key, score);
                score
            }
        }
    }

    /// Raw disc differential for the agent side
    fn material(&self, board: &Board) -> i32 {
        board.count(self.side) as i32 - board.count(self.side.opponent()) as i32
    }

    /// Weighted positional score, oriented by the agent's sign
    fn heuristic(&self, board: &Board) -> i32 {
        let black = board.discs(Side::Black).0;
        let white = board.discs(Side::White).0;

        let discs = black.count_ones() as i32 - white.count_ones() as i32;
        let edges = (black & Bitboard::EDGE.0).count_ones() as i32
            - (white & Bitboard::EDGE.0).count_ones() as i32;
        let corners = (black & Bitboard::CORNERS.0).count_ones() as i32
            - (white & Bitboard::CORNERS.0).count_ones() as i32;

        let score = discs + self.edge_weight * edges + self.corner_weight * corners;
        score * self.side.sign()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::{CORNER_WEIGHT, EDGE_WEIGHT};

    fn heuristic_evaluator(side: Side) -> Evaluator {
        Evaluator::new(side, EvalMode::Heuristic, &EngineConfig::default())
    }

    fn material_evaluator(side: Side) -> Evaluator {
        Evaluator::new(side, EvalMode::MaterialOnly, &EngineConfig::default())
    }

    #[test]
    fn test_material_start_is_even() {
        let board = Board::new();
        assert_eq!(material_evaluator(Side::Black).evaluate(&board), 0);
        assert_eq!(material_evaluator(Side::White).evaluate(&board), 0);
    }

    #[test]
    fn test_material_after_first_move() {
        let mut board = Board::new();
        board.apply_move("d3".parse().unwrap(), Side::Black);

        assert_eq!(material_evaluator(Side::Black).evaluate(&board), 3);
        assert_eq!(material_evaluator(Side::White).evaluate(&board), -3);
    }

    #[test]
    fn test_material_mode_never_caches() {
        let board = Board::new();
        let mut eval = material_evaluator(Side::Black);
        eval.evaluate(&board);
        eval.evaluate(&board);
        assert!(eval.cache().is_empty());
    }

    #[test]
    fn test_interior_disc_scores_one() {
        let board = Board::from_grid(&format!("{}b{}", "-".repeat(27), "-".repeat(36))).unwrap();
        assert_eq!(heuristic_evaluator(Side::Black).evaluate(&board), 1);
    }

    #[test]
    fn test_edge_disc_scores_disc_plus_edge_weight() {
        // Single black disc on a4: one disc, one edge square, no corner.
        let grid = format!("{}b{}", "-".repeat(24), "-".repeat(39));
        let board = Board::from_grid(&grid).unwrap();
        assert_eq!(
            heuristic_evaluator(Side::Black).evaluate(&board),
            1 + EDGE_WEIGHT
        );
    }

    #[test]
    fn test_corner_disc_scores_under_both_weights() {
        // Single black disc on a1: disc + edge + corner.
        let grid = format!("b{}", "-".repeat(63));
        let board = Board::from_grid(&grid).unwrap();
        assert_eq!(
            heuristic_evaluator(Side::Black).evaluate(&board),
            1 + EDGE_WEIGHT + CORNER_WEIGHT
        );
    }

    #[test]
    fn test_white_agent_negates_black_score() {
        let grid = format!("b{}", "-".repeat(63));
        let board = Board::from_grid(&grid).unwrap();
        let black_view = heuristic_evaluator(Side::Black).evaluate(&board);
        let white_view = heuristic_evaluator(Side::White).evaluate(&board);
        assert_eq!(black_view, -white_view);
    }

    #[test]
    fn test_evaluate_is_idempotent_and_caches_once() {
        let board = Board::new();
        let mut eval = heuristic_evaluator(Side::Black);

        let first = eval.evaluate(&board);
        assert_eq!(eval.cache().len(), 1);
        let second = eval.evaluate(&board);
        assert_eq!(first, second);
        assert_eq!(eval.cache().len(), 1);
    }
}
