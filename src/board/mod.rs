//! Othello board representation and game logic.
//!
//! Uses bitboards for the disc sets and directional shift fills for
//! move generation. Implements the full flipping rules in all eight
//! directions.
//!
//! # Example
//! ```
//! use othello_engine::board::{Board, Side};
//!
//! let board = Board::new();
//! assert_eq!(board.legal_moves(Side::Black).len(), 4);
//! ```

mod error;
mod grid;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{GridError, ParseSideError, SquareError};
pub use state::Board;
pub use types::{Bitboard, Move, Side, Square};
