//! Referee wire protocol.
//!
//! The agent talks to a referee over stdin/stdout, one line per turn.
//! On startup it prints `Init done` once the opening precompute has
//! finished, then loops: each incoming line carries
//! `<col> <row> <ms_left>`, where a negative column or row means the
//! opponent had no move. The agent answers `<col> <row>` for a
//! placement or `pass` when it has no legal move. Logging goes to
//! stderr so stdout stays clean for the referee.

use std::fmt;
use std::io::{self, BufRead, Write};

use log::{info, warn};

use crate::board::{Move, Side};
use crate::engine::Player;

/// One parsed referee line: the opponent's move (if any) and the
/// remaining clock in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub opponent_move: Option<Move>,
    pub ms_left: i64,
}

/// Error type for referee line parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnParseError {
    /// Line does not have exactly three whitespace-separated fields
    WrongFieldCount { found: usize },
    /// A field is not a decimal integer
    InvalidInteger { field: String },
    /// Coordinates are on neither the board nor the no-move sentinel
    InvalidCoordinates { col: i64, row: i64 },
}

impl fmt::Display for TurnParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnParseError::WrongFieldCount { found } => {
                write!(f, "expected 3 fields, found {found}")
            }
            TurnParseError::InvalidInteger { field } => {
                write!(f, "invalid integer: '{field}'")
            }
            TurnParseError::InvalidCoordinates { col, row } => {
                write!(f, "coordinates ({col}, {row}) are off the board")
            }
        }
    }
}

impl std::error::Error for TurnParseError {}

/// Parses one referee line of the form `<col> <row> <ms_left>`.
///
/// The column comes first on the wire. A negative column or row is the
/// referee's way of saying the opponent passed (or that this is the
/// opening turn), so both map to `None`.
pub fn parse_turn(line: &str) -> Result<Turn, TurnParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(TurnParseError::WrongFieldCount {
            found: fields.len(),
        });
    }

    let mut numbers = [0i64; 3];
    for (slot, field) in numbers.iter_mut().zip(&fields) {
        *slot = field
            .parse()
            .map_err(|_| TurnParseError::InvalidInteger {
                field: (*field).to_string(),
            })?;
    }
    let [col, row, ms_left] = numbers;

    let opponent_move = if col < 0 || row < 0 {
        None
    } else {
        let mv = Move::from_coords(row as usize, col as usize)
            .ok_or(TurnParseError::InvalidCoordinates { col, row })?;
        Some(mv)
    };

    Ok(Turn {
        opponent_move,
        ms_left,
    })
}

/// Runs the referee loop for an agent playing `side` until stdin
/// closes.
///
/// Malformed lines are logged and skipped rather than ending the game,
/// since the referee treats silence as a forfeit.
pub fn run_loop(side: Side) -> io::Result<()> {
    let mut player = Player::new(side);
    let stdout = io::stdout();

    // The referee waits for this handshake before sending turns.
    {
        let mut out = stdout.lock();
        writeln!(out, "Init done")?;
        out.flush()?;
    }
    info!("{side} agent ready for referee input");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let turn = match parse_turn(&line) {
            Ok(turn) => turn,
            Err(err) => {
                warn!("skipping malformed referee line {line:?}: {err}");
                continue;
            }
        };

        let reply = player.select_move(turn.opponent_move, turn.ms_left);
        let mut out = stdout.lock();
        match reply {
            Some(mv) => writeln!(out, "{} {}", mv.col(), mv.row())?,
            None => writeln!(out, "pass")?,
        }
        out.flush()?;
    }

    Ok(())
}
