//! Non-repeating random guess generation for the automated player.

use std::collections::{HashMap, HashSet};

use rand::seq::IteratorRandom;
use rand::Rng;

use crate::common::GameError;
use crate::coord::Coord;

/// Tracks which cells one automated player has fired at, by keeping the
/// columns still unguessed per row. A fully guessed row leaves the map so
/// row sampling skips it automatically.
pub struct GuessTracker {
    board_size: i32,
    remaining: HashMap<i32, HashSet<i32>>,
}

impl GuessTracker {
    /// Create a tracker with every cell of a `board_size` square board
    /// still available.
    pub fn new(board_size: i32) -> Self {
        let remaining = (0..board_size)
            .map(|row| (row, (0..board_size).collect()))
            .collect();
        GuessTracker {
            board_size,
            remaining,
        }
    }

    pub fn board_size(&self) -> i32 {
        self.board_size
    }

    /// True when `(row, col)` has already been returned by `generate_guess`.
    pub fn already_guessed(&self, row: i32, col: i32) -> bool {
        if !Coord::new(row, col).in_bounds(self.board_size) {
            return false;
        }
        !self
            .remaining
            .get(&row)
            .is_some_and(|cols| cols.contains(&col))
    }

    /// Number of cells not yet guessed.
    pub fn cells_remaining(&self) -> usize {
        self.remaining.values().map(|cols| cols.len()).sum()
    }

    /// True once the whole board has been guessed.
    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Produce a fresh random guess, never repeating an earlier one.
    ///
    /// Picks a random row that still has unguessed columns, then a random
    /// column among them, and marks the cell guessed before returning it.
    /// Fails with `GuessesExhausted` once the board is used up.
    pub fn generate_guess<R: Rng>(&mut self, rng: &mut R) -> Result<Coord, GameError> {
        let row = *self
            .remaining
            .keys()
            .choose(rng)
            .ok_or(GameError::GuessesExhausted)?;
        let col = match self.remaining.get(&row) {
            Some(cols) => *cols.iter().choose(rng).ok_or(GameError::GuessesExhausted)?,
            None => return Err(GameError::GuessesExhausted),
        };
        if let Some(cols) = self.remaining.get_mut(&row) {
            cols.remove(&col);
            if cols.is_empty() {
                self.remaining.remove(&row);
            }
        }
        Ok(Coord::new(row, col))
    }
}
