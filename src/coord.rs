use std::fmt;

/// A (row, column) pair on or off the board.
///
/// Fields are signed so a candidate ship may extend past the board edge
/// before the bounds check rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The coordinate `steps` cells away in `direction`.
    pub fn offset(self, direction: Direction, steps: i32) -> Self {
        let (dr, dc) = direction.unit();
        Coord::new(self.row + dr * steps, self.col + dc * steps)
    }

    /// True when both components lie within `[0, board_size)`.
    pub fn in_bounds(self, board_size: i32) -> bool {
        self.row >= 0 && self.row < board_size && self.col >= 0 && self.col < board_size
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Direction a ship extends from its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All four directions, for shuffled iteration during placement.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Unit (row, col) step for this direction.
    pub fn unit(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }
}
