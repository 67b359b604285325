//! The playing agent.

use std::time::Instant;

use log::{debug, info};

use crate::board::{Board, Move, Side};

use super::config::EngineConfig;
use super::eval::{EvalMode, Evaluator};
use super::opening;
use super::search::SearchContext;

/// A game-playing agent for one side.
///
/// The agent owns the evolving game position and the evaluator with
/// its score cache; both live as long as the game. Each turn it folds
/// in the opponent's move, searches, and plays its reply.
pub struct Player {
    board: Board,
    evaluator: Evaluator,
    config: EngineConfig,
}

impl Player {
    /// Create an agent playing `side`, precomputing the opening book
    #[must_use]
    pub fn new(side: Side) -> Self {
        Player::with_config(side, EvalMode::Heuristic, EngineConfig::default())
    }

    /// Create a material-only agent for tests: fixed shallow depth,
    /// untouched cache, no opening precompute, fully predictable
    #[must_use]
    pub fn new_testing(side: Side) -> Self {
        Player::with_config(side, EvalMode::MaterialOnly, EngineConfig::default())
    }

    /// Create an agent with an explicit mode and configuration
    #[must_use]
    pub fn with_config(side: Side, mode: EvalMode, config: EngineConfig) -> Self {
        let board = Board::new();
        let mut evaluator = Evaluator::new(side, mode, &config);

        if mode == EvalMode::Heuristic {
            let start = Instant::now();
            opening::warm_cache(&mut evaluator, &board, side, config.opening_book_target);
            info!(
                "{side} agent ready: {} opening positions cached in {}ms",
                evaluator.cache().len(),
                start.elapsed().as_millis()
            );
        }

        Player {
            board,
            evaluator,
            config,
        }
    }

    /// The side this agent plays
    #[must_use]
    pub fn side(&self) -> Side {
        self.evaluator.side()
    }

    /// The agent's view of the game position
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of positions currently in the score cache
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.evaluator.cache().len()
    }

    /// Advance the game one turn and choose the agent's reply.
    ///
    /// `opponent_move` is the opponent's latest placement, or `None`
    /// on the agent's first turn as Black or after an opponent pass.
    /// `budget_ms` is the remaining game clock in milliseconds; zero
    /// or negative means untimed, which runs exactly one search at
    /// the base depth.
    ///
    /// The chosen move is applied to the held board before returning.
    /// Returns `None` when the agent has no legal move, leaving the
    /// board untouched by the agent's side.
    pub fn select_move(&mut self, opponent_move: Option<Move>, budget_ms: i64) -> Option<Move> {
        if let Some(mv) = opponent_move {
            self.board.apply_move(mv, self.side().opponent());
        }

        let base_depth = match self.evaluator.mode() {
            EvalMode::Heuristic => self.config.base_depth,
            EvalMode::MaterialOnly => self.config.material_test_depth,
        };

        let start = Instant::now();
        let chosen = if budget_ms > 0 {
            self.deepening_search(base_depth, budget_ms as u64, start)
        } else {
            SearchContext::new(&mut self.evaluator).best_move(&self.board, base_depth)
        };

        if let Some(mv) = chosen {
            self.board.apply_move(mv, self.side());
            debug!("played {mv} in {}ms", start.elapsed().as_millis());
        } else {
            debug!("no legal move ({}ms)", start.elapsed().as_millis());
        }
        chosen
    }

    /// Iterative deepening under the per-move allowance.
    ///
    /// The allowance is `budget_ms / divisor`, checked only between
    /// iterations; the iteration in flight always completes, so the
    /// overshoot is bounded by one search. The first iteration always
    /// runs.
    fn deepening_search(
        &mut self,
        base_depth: u32,
        budget_ms: u64,
        start: Instant,
    ) -> Option<Move> {
        let mut best = None;
        let mut depth = base_depth;

        while (start.elapsed().as_millis() as u64)
            .saturating_mul(self.config.time_allowance_divisor)
            < budget_ms
        {
            best = SearchContext::new(&mut self.evaluator).best_move(&self.board, depth);
            debug!(
                "depth {depth} done in {}ms total",
                start.elapsed().as_millis()
            );
            depth += 1;
        }
        best
    }
}
