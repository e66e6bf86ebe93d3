mod common;
mod config;
mod coord;
mod game;
mod guess;
mod logging;
mod ocean;
mod player;
mod player_cli;
mod render;
mod ship;

pub use common::*;
pub use config::*;
pub use coord::*;
pub use game::*;
pub use guess::*;
pub use logging::init_logging;
pub use ocean::*;
pub use player::*;
pub use player_cli::*;
pub use render::*;
pub use ship::*;
