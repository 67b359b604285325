pub mod board;
pub mod engine;
pub mod protocol;
pub mod tt;

pub use board::{Bitboard, Board, Move, Side, Square};
pub use engine::{EngineConfig, EvalMode, Player};
pub use tt::{Fingerprint, TranspositionCache};
