//! Error types for board operations.

use std::fmt;

/// Error type for text-grid parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Invalid cell character (must be 'b', 'w' or '-')
    InvalidCell { char: char },
    /// Grid does not contain exactly 64 cells
    WrongCellCount { found: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidCell { char } => {
                write!(f, "Invalid cell character '{char}' in grid")
            }
            GridError::WrongCellCount { found } => {
                write!(f, "Grid must have exactly 64 cells, found {found}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Failure to build or parse a square
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Notation that is not a file letter followed by a rank digit
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Cannot parse '{notation}' as a square")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for side parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSideError {
    /// The string that failed to parse
    pub found: String,
}

impl fmt::Display for ParseSideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid side '{}', expected 'Black' or 'White'",
            self.found
        )
    }
}

impl std::error::Error for ParseSideError {}
