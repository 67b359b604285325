//! Core board types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Side` - disc colors
//! - `Square` - board square as (row, col)
//! - `Bitboard` - 64-bit set-of-squares representation
//! - `Move` - a disc placement

mod bitboard;
mod moves;
mod side;
mod square;

pub use bitboard::Bitboard;
pub use moves::Move;
pub use side::Side;
pub use square::Square;
