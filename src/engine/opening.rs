//! Opening book precomputation.
//!
//! Walks the opening tree breadth-first from a root position, scoring
//! every visited position into the evaluator's cache. By the time the
//! game starts, the first few plies of search hit precomputed scores.

use std::collections::VecDeque;

use log::debug;

use crate::board::{Board, Side};

use super::eval::{EvalMode, Evaluator};

/// Score opening-tree positions into the evaluator's cache until it
/// holds `target` entries or the frontier runs dry.
///
/// Successors alternate sides strictly, the way search visits them; a
/// position whose mover is stuck contributes no children. Duplicate
/// frontier entries are harmless: re-evaluating a cached position is
/// a lookup, not a rescore. Does nothing in material-only mode, where
/// the cache is never consulted.
pub fn warm_cache(evaluator: &mut Evaluator, root: &Board, to_move: Side, target: usize) {
    if evaluator.mode() != EvalMode::Heuristic {
        return;
    }

    let mut frontier: VecDeque<(Side, Board)> = VecDeque::new();
    frontier.push_back((to_move, *root));

    while evaluator.cache().len() < target {
        let Some((side, position)) = frontier.pop_front() else {
            break;
        };
        evaluator.evaluate(&position);
        for mv in position.legal_moves(side) {
            let mut child = position;
            child.apply_move(mv, side);
            frontier.push_back((side.opponent(), child));
        }
    }

    debug!(
        "opening precompute cached {} positions",
        evaluator.cache().len()
    );
}
