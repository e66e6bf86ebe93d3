//! Common types shared across the game core: guess results and errors.

use std::fmt;

/// Result of firing at a single cell of an opposing fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// No ship segment occupies the cell.
    Miss,
    /// A ship segment was struck but the ship still floats.
    Hit,
    /// The strike removed the ship's last segment; carries its build length.
    Sunk { length: usize },
}

/// Errors returned by core and orchestration operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// `record_hit` was called on a cell with no ship segment.
    NotOccupied { row: i32, col: i32 },
    /// The occupancy index named a cell that no live ship owns.
    UnindexedHit { row: i32, col: i32 },
    /// Ship placement reaches outside the board.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Random placement gave up after exhausting its retry budget.
    PlacementExhausted { length: usize },
    /// Every cell on the board has already been guessed.
    GuessesExhausted,
    /// Target lies outside the board.
    OutOfBounds { row: i32, col: i32 },
    /// The same cell was targeted twice by the same side.
    AlreadyGuessed { row: i32, col: i32 },
    /// Board size and ship lengths cannot form a playable game.
    InvalidConfig { reason: &'static str },
    /// Standard input closed before a target was read.
    InputClosed,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NotOccupied { row, col } => {
                write!(f, "no ship segment at ({}, {})", row, col)
            }
            GameError::UnindexedHit { row, col } => {
                write!(f, "occupancy index out of sync at ({}, {})", row, col)
            }
            GameError::ShipOutOfBounds => write!(f, "ship placement is out of bounds"),
            GameError::ShipOverlaps => write!(f, "ship placement overlaps another ship"),
            GameError::PlacementExhausted { length } => {
                write!(f, "unable to place a ship of length {}", length)
            }
            GameError::GuessesExhausted => write!(f, "every cell has already been guessed"),
            GameError::OutOfBounds { row, col } => {
                write!(f, "({}, {}) is outside the board", row, col)
            }
            GameError::AlreadyGuessed { row, col } => {
                write!(f, "({}, {}) was already targeted", row, col)
            }
            GameError::InvalidConfig { reason } => write!(f, "invalid configuration: {}", reason),
            GameError::InputClosed => write!(f, "standard input closed"),
        }
    }
}

impl std::error::Error for GameError {}
