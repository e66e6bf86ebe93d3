use rand::rngs::SmallRng;

use crate::common::GameError;
use crate::coord::Coord;
use crate::guess::GuessTracker;

/// Supplies target coordinates for one side of a match.
pub trait Player {
    /// Choose the next cell to fire at.
    fn select_target(&mut self, rng: &mut SmallRng) -> Result<Coord, GameError>;
}

/// Automated player firing fresh random guesses.
pub struct AutoPlayer {
    tracker: GuessTracker,
}

impl AutoPlayer {
    pub fn new(board_size: i32) -> Self {
        AutoPlayer {
            tracker: GuessTracker::new(board_size),
        }
    }
}

impl Player for AutoPlayer {
    fn select_target(&mut self, rng: &mut SmallRng) -> Result<Coord, GameError> {
        self.tracker.generate_guess(rng)
    }
}
