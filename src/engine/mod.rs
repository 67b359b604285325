//! The game-playing engine.
//!
//! This module implements:
//! - Cache-backed positional evaluation (discs, edges, corners)
//! - Depth-limited minimax with alpha-beta cutoffs
//! - Iterative deepening under a per-move time allowance
//! - Breadth-first opening precomputation
//! - The `Player` facade that holds the game state for one side

mod config;
mod eval;
mod opening;
mod player;
mod search;

pub use config::EngineConfig;
pub use eval::{EvalMode, Evaluator};
pub use opening::warm_cache;
pub use player::Player;
pub use search::{find_best_move, SearchContext};
