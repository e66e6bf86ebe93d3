//! A single ship: a set of contiguous cells depleted by hits.

use std::collections::HashSet;

use crate::coord::{Coord, Direction};

/// A ship's live cells, keyed by coordinate for O(1) hit lookup and removal.
///
/// Cells are only ever removed after construction; a ship whose set runs
/// empty is sunk and stays sunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    cells: HashSet<Coord>,
    length: usize,
}

impl Ship {
    /// Build a ship of `length` cells extending from `origin` in `direction`.
    ///
    /// Deterministic given its inputs. Cells may lie off-board until the
    /// candidate is checked with `in_bounds`.
    pub fn build(origin: Coord, length: usize, direction: Direction) -> Self {
        let cells = (0..length as i32)
            .map(|i| origin.offset(direction, i))
            .collect();
        Ship { cells, length }
    }

    /// The length the ship was built with.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of cells not yet hit.
    pub fn cells_remaining(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Iterator over the ship's live cells, in no particular order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }

    /// True when every cell lies within a `board_size` square board.
    pub fn in_bounds(&self, board_size: i32) -> bool {
        self.cells.iter().all(|c| c.in_bounds(board_size))
    }

    /// Remove `coord` from the live cells.
    ///
    /// Returns `true` only when that exact cell was present; every other
    /// cell is left untouched.
    pub fn register_hit(&mut self, coord: Coord) -> bool {
        self.cells.remove(&coord)
    }

    /// A ship with no live cells is sunk.
    pub fn is_sunk(&self) -> bool {
        self.cells.is_empty()
    }
}
