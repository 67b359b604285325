//! Board tests, split by subject:
//! - `movegen.rs` - Legal move generation and masks
//! - `apply.rs` - Move application and flipping
//! - `grid.rs` - Text diagram parsing and formatting
//! - `perft.rs` - Move generation node counts
//! - `proptest.rs` - Randomized invariant checks

mod proptest;
