use std::collections::HashSet;

use log::{debug, info};
use rand::Rng;

use crate::common::{GameError, GuessResult};
use crate::config::GameConfig;
use crate::coord::Coord;
use crate::guess::GuessTracker;
use crate::ocean::Ocean;

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// One side's record of where its shots landed, for rendering and
/// duplicate detection.
#[derive(Debug, Default)]
pub struct ShotLog {
    hits: HashSet<Coord>,
    misses: HashSet<Coord>,
}

impl ShotLog {
    pub fn hits(&self) -> &HashSet<Coord> {
        &self.hits
    }

    pub fn misses(&self) -> &HashSet<Coord> {
        &self.misses
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.hits.contains(&coord) || self.misses.contains(&coord)
    }

    pub fn record(&mut self, coord: Coord, result: GuessResult) {
        match result {
            GuessResult::Miss => {
                self.misses.insert(coord);
            }
            GuessResult::Hit | GuessResult::Sunk { .. } => {
                self.hits.insert(coord);
            }
        }
    }
}

/// One match: the player's fleet against an automated opponent's.
///
/// Misses are recorded only on the guessing side (the opponent through its
/// `GuessTracker` and both sides' `ShotLog`s); the target ocean mutates
/// only on hits.
pub struct Game {
    config: GameConfig,
    player_ocean: Ocean,
    foe_ocean: Ocean,
    foe_tracker: GuessTracker,
    player_shots: ShotLog,
    foe_shots: ShotLog,
}

impl Game {
    /// Set up both fleets with the configured ship lengths.
    pub fn new<R: Rng>(rng: &mut R, config: GameConfig) -> Result<Self, GameError> {
        let mut player_ocean = Ocean::new(config.board_size());
        let mut foe_ocean = Ocean::new(config.board_size());
        for length in config.ship_lengths() {
            player_ocean.place_ship(rng, length)?;
            foe_ocean.place_ship(rng, length)?;
        }
        info!(
            "fleets placed: {} cells per side on a {}x{} board",
            config.total_ship_cells(),
            config.board_size(),
            config.board_size()
        );
        Ok(Game {
            foe_tracker: GuessTracker::new(config.board_size()),
            config,
            player_ocean,
            foe_ocean,
            player_shots: ShotLog::default(),
            foe_shots: ShotLog::default(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player_ocean(&self) -> &Ocean {
        &self.player_ocean
    }

    pub fn foe_ocean(&self) -> &Ocean {
        &self.foe_ocean
    }

    /// The player's shots at the opponent's waters.
    pub fn player_shots(&self) -> &ShotLog {
        &self.player_shots
    }

    /// The opponent's shots at the player's waters.
    pub fn foe_shots(&self) -> &ShotLog {
        &self.foe_shots
    }

    /// Resolve the player's guess against the opposing fleet.
    pub fn player_guess(&mut self, row: i32, col: i32) -> Result<GuessResult, GameError> {
        let coord = Coord::new(row, col);
        if !coord.in_bounds(self.config.board_size()) {
            return Err(GameError::OutOfBounds { row, col });
        }
        if self.player_shots.contains(coord) {
            return Err(GameError::AlreadyGuessed { row, col });
        }
        let result = self.foe_ocean.apply_guess(row, col)?;
        self.player_shots.record(coord, result);
        debug!("player fired at {}: {:?}", coord, result);
        Ok(result)
    }

    /// Let the automated opponent fire a fresh guess at the player's fleet.
    pub fn automated_turn<R: Rng>(
        &mut self,
        rng: &mut R,
    ) -> Result<(Coord, GuessResult), GameError> {
        let coord = self.foe_tracker.generate_guess(rng)?;
        let result = self.player_ocean.apply_guess(coord.row, coord.col)?;
        self.foe_shots.record(coord, result);
        debug!("opponent fired at {}: {:?}", coord, result);
        Ok((coord, result))
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if self.foe_ocean.is_destroyed() {
            GameStatus::Won
        } else if self.player_ocean.is_destroyed() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }
}
