use super::error::GridError;
use super::{Board, Side, Square};

impl Board {
    /// Parse a board position from an 8x8 text diagram.
    ///
    /// Cells are `b` (black disc), `w` (white disc) or `-` (empty),
    /// read row by row starting at rank 1. Whitespace is ignored, so
    /// diagrams can be laid out one rank per line. Exactly 64 cells
    /// are required.
    ///
    /// Returns an error if the diagram is invalid.
    pub fn from_grid(grid: &str) -> Result<Self, GridError> {
        let mut board = Board::empty();
        let mut cells = 0usize;

        for c in grid.chars() {
            if c.is_whitespace() {
                continue;
            }
            let side = match c {
                'b' => Some(Side::Black),
                'w' => Some(Side::White),
                '-' => None,
                other => return Err(GridError::InvalidCell { char: other }),
            };
            if cells < 64 {
                if let Some(side) = side {
                    board.place(Square(cells / 8, cells % 8), side);
                }
            }
            cells += 1;
        }

        if cells != 64 {
            return Err(GridError::WrongCellCount { found: cells });
        }
        Ok(board)
    }

    /// Render the position as an 8x8 text diagram, one rank per line.
    /// Inverse of `from_grid`.
    #[must_use]
    pub fn to_grid(&self) -> String {
        self.to_string()
    }
}
