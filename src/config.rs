use crate::common::GameError;

pub const DEFAULT_BOARD_SIZE: i32 = 10;
pub const DEFAULT_MAX_SHIP_LENGTH: usize = 5;
/// Shortest ship in every fleet; lengths run from here up to the maximum.
pub const MIN_SHIP_LENGTH: usize = 2;

/// Validated game parameters shared by both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    board_size: i32,
    max_ship_length: usize,
    show_boards: bool,
}

impl GameConfig {
    /// Validate a (board size, maximum ship length) pair.
    ///
    /// One ship of every length from `MIN_SHIP_LENGTH..=max_ship_length` is
    /// placed per side, so the longest ship must fit the board and the
    /// fleet must leave the board sparse enough for random placement to
    /// terminate.
    pub fn new(
        board_size: i32,
        max_ship_length: usize,
        show_boards: bool,
    ) -> Result<Self, GameError> {
        if board_size < 1 {
            return Err(GameError::InvalidConfig {
                reason: "board size must be at least 1",
            });
        }
        if board_size > 26 {
            return Err(GameError::InvalidConfig {
                reason: "column labels only cover boards up to 26",
            });
        }
        if max_ship_length < MIN_SHIP_LENGTH {
            return Err(GameError::InvalidConfig {
                reason: "maximum ship length must be at least 2",
            });
        }
        if max_ship_length > board_size as usize {
            return Err(GameError::InvalidConfig {
                reason: "longest ship does not fit on the board",
            });
        }
        let config = GameConfig {
            board_size,
            max_ship_length,
            show_boards,
        };
        let area = (board_size as usize) * (board_size as usize);
        if config.total_ship_cells() * 2 > area {
            return Err(GameError::InvalidConfig {
                reason: "fleet would occupy more than half the board",
            });
        }
        Ok(config)
    }

    pub fn board_size(&self) -> i32 {
        self.board_size
    }

    pub fn max_ship_length(&self) -> usize {
        self.max_ship_length
    }

    pub fn show_boards(&self) -> bool {
        self.show_boards
    }

    /// Lengths of the ships each side places, shortest first.
    pub fn ship_lengths(&self) -> impl Iterator<Item = usize> {
        MIN_SHIP_LENGTH..=self.max_ship_length
    }

    /// Total cells a freshly placed fleet occupies.
    pub fn total_ship_cells(&self) -> usize {
        self.ship_lengths().sum()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: DEFAULT_BOARD_SIZE,
            max_ship_length: DEFAULT_MAX_SHIP_LENGTH,
            show_boards: false,
        }
    }
}
