//! Interactive player reading targets from stdin.

use std::io::{self, Write};

use rand::rngs::SmallRng;

use crate::common::GameError;
use crate::coord::Coord;
use crate::player::Player;

pub struct CliPlayer {
    board_size: i32,
}

impl CliPlayer {
    pub fn new(board_size: i32) -> Self {
        Self { board_size }
    }
}

/// Parse a coordinate like `B4`: column letter, then 1-based row.
fn parse_coord(input: &str, board_size: i32) -> Option<Coord> {
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as i32;
    let row: i32 = chars.as_str().trim().parse().ok()?;
    if row < 1 {
        return None;
    }
    let coord = Coord::new(row - 1, col);
    coord.in_bounds(board_size).then_some(coord)
}

impl Player for CliPlayer {
    fn select_target(&mut self, _rng: &mut SmallRng) -> Result<Coord, GameError> {
        loop {
            print!("Enter target (e.g. B4): ");
            io::stdout().flush().unwrap();
            let mut line = String::new();
            let read = io::stdin().read_line(&mut line).unwrap();
            if read == 0 {
                return Err(GameError::InputClosed);
            }
            match parse_coord(line.trim(), self.board_size) {
                Some(coord) => return Ok(coord),
                None => println!("Invalid coordinate"),
            }
        }
    }
}
