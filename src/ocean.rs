//! One side's fleet plus the row -> columns index answering occupancy
//! queries in O(1).

use std::collections::{HashMap, HashSet};

use log::debug;
use rand::seq::{IteratorRandom, SliceRandom};
use rand::Rng;

use crate::common::{GameError, GuessResult};
use crate::coord::{Coord, Direction};
use crate::ship::Ship;

/// Origin samples tried before random placement reports exhaustion.
const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// A fleet of ships on a square board.
///
/// Invariant: `occupied` is exactly the union of the live ships' cells
/// after every placement and every hit.
pub struct Ocean {
    board_size: i32,
    ships: Vec<Ship>,
    occupied: HashMap<i32, HashSet<i32>>,
}

impl Ocean {
    /// Create an empty ocean for a `board_size` square board.
    pub fn new(board_size: i32) -> Self {
        Ocean {
            board_size,
            ships: Vec::new(),
            occupied: HashMap::new(),
        }
    }

    pub fn board_size(&self) -> i32 {
        self.board_size
    }

    /// Ships still afloat.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    /// Total live cells across the fleet.
    pub fn cell_count(&self) -> usize {
        self.occupied.values().map(|cols| cols.len()).sum()
    }

    /// O(1) occupancy query via the row index.
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        self.occupied
            .get(&row)
            .is_some_and(|cols| cols.contains(&col))
    }

    /// Every occupied cell, for rendering and invariant checks.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.occupied
            .iter()
            .flat_map(|(&row, cols)| cols.iter().map(move |&col| Coord::new(row, col)))
    }

    /// Insert a pre-built ship, rejecting out-of-bounds or overlapping cells.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), GameError> {
        if !ship.in_bounds(self.board_size) {
            return Err(GameError::ShipOutOfBounds);
        }
        if ship.cells().any(|c| self.is_occupied(c.row, c.col)) {
            return Err(GameError::ShipOverlaps);
        }
        self.index_ship(&ship);
        self.ships.push(ship);
        Ok(())
    }

    /// Place a ship of `length` at a random position.
    ///
    /// Samples an open origin (a random row, then a uniform pick among that
    /// row's free columns), then tries the four directions in shuffled
    /// order, committing the first candidate that fits the board without
    /// touching another ship. Origins that lead nowhere are discarded and
    /// resampled, up to a fixed attempt budget.
    pub fn place_ship<R: Rng>(&mut self, rng: &mut R, length: usize) -> Result<(), GameError> {
        let mut directions = Direction::ALL;
        for attempt in 0..MAX_PLACEMENT_ATTEMPTS {
            let row = rng.random_range(0..self.board_size);
            let Some(col) = self.random_free_col(rng, row) else {
                // row fully occupied, resample
                continue;
            };
            let origin = Coord::new(row, col);
            directions.shuffle(rng);
            for direction in directions {
                let candidate = Ship::build(origin, length, direction);
                if candidate.in_bounds(self.board_size)
                    && !candidate.cells().any(|c| self.is_occupied(c.row, c.col))
                {
                    debug!(
                        "placed length-{} ship at {} {:?} after {} attempt(s)",
                        length,
                        origin,
                        direction,
                        attempt + 1
                    );
                    self.index_ship(&candidate);
                    self.ships.push(candidate);
                    return Ok(());
                }
            }
        }
        Err(GameError::PlacementExhausted { length })
    }

    /// Record a hit on an occupied cell.
    ///
    /// Callers must check `is_occupied` first; firing at a free cell is a
    /// contract violation, not a miss. The owning ship loses the segment,
    /// the cell leaves the index, and a ship that sinks leaves the fleet.
    pub fn record_hit(&mut self, row: i32, col: i32) -> Result<GuessResult, GameError> {
        if !self.is_occupied(row, col) {
            return Err(GameError::NotOccupied { row, col });
        }
        let target = Coord::new(row, col);
        // ships never share a cell, so at most one can own the target
        let Some(index) = self
            .ships
            .iter_mut()
            .position(|ship| ship.register_hit(target))
        else {
            return Err(GameError::UnindexedHit { row, col });
        };
        if let Some(cols) = self.occupied.get_mut(&row) {
            cols.remove(&col);
            if cols.is_empty() {
                self.occupied.remove(&row);
            }
        }
        if self.ships[index].is_sunk() {
            let ship = self.ships.swap_remove(index);
            Ok(GuessResult::Sunk {
                length: ship.length(),
            })
        } else {
            Ok(GuessResult::Hit)
        }
    }

    /// Resolve a guess: a free cell is a `Miss` and leaves the fleet
    /// untouched, anything else routes through `record_hit`.
    pub fn apply_guess(&mut self, row: i32, col: i32) -> Result<GuessResult, GameError> {
        if !self.is_occupied(row, col) {
            return Ok(GuessResult::Miss);
        }
        self.record_hit(row, col)
    }

    /// True once every ship has been sunk and removed.
    pub fn is_destroyed(&self) -> bool {
        self.ships.is_empty()
    }

    fn index_ship(&mut self, ship: &Ship) {
        for cell in ship.cells() {
            self.occupied.entry(cell.row).or_default().insert(cell.col);
        }
    }

    /// Uniform pick among the row's unoccupied columns, `None` if it has
    /// none.
    fn random_free_col<R: Rng>(&self, rng: &mut R, row: i32) -> Option<i32> {
        match self.occupied.get(&row) {
            None => Some(rng.random_range(0..self.board_size)),
            Some(taken) => (0..self.board_size)
                .filter(|col| !taken.contains(col))
                .choose(rng),
        }
    }
}
