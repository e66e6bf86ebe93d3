//! Text rendering of fleet and target boards.

use crate::coord::Coord;
use crate::game::ShotLog;
use crate::ocean::Ocean;

/// Human-readable label for a coordinate, column letter first (`B4`).
pub fn coord_label(coord: Coord) -> String {
    let col = (b'A' + coord.col as u8) as char;
    format!("{}{}", col, coord.row + 1)
}

/// The player's own waters: ships revealed, opponent shots overlaid.
pub fn fleet_board(ocean: &Ocean, incoming: &ShotLog) -> String {
    grid(ocean.board_size(), |coord| {
        if incoming.hits().contains(&coord) {
            'X'
        } else if incoming.misses().contains(&coord) {
            'o'
        } else if ocean.is_occupied(coord.row, coord.col) {
            'S'
        } else {
            '.'
        }
    })
}

/// The opponent's waters as known from the player's own shots.
pub fn target_board(board_size: i32, shots: &ShotLog) -> String {
    grid(board_size, |coord| {
        if shots.hits().contains(&coord) {
            'X'
        } else if shots.misses().contains(&coord) {
            'o'
        } else {
            '.'
        }
    })
}

fn grid(board_size: i32, cell: impl Fn(Coord) -> char) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for c in 0..board_size {
        out.push(' ');
        out.push((b'A' + c as u8) as char);
    }
    out.push('\n');
    for r in 0..board_size {
        out.push_str(&format!("{:2} ", r + 1));
        for c in 0..board_size {
            out.push(' ');
            out.push(cell(Coord::new(r, c)));
        }
        out.push('\n');
    }
    out
}
