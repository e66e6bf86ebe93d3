use flotilla::{
    coord_label, fleet_board, target_board, Coord, Direction, GuessResult, Ocean, Ship, ShotLog,
};

#[test]
fn test_coord_labels() {
    assert_eq!(coord_label(Coord::new(0, 0)), "A1");
    assert_eq!(coord_label(Coord::new(3, 1)), "B4");
    assert_eq!(coord_label(Coord::new(9, 9)), "J10");
}

#[test]
fn test_fleet_board_marks_ships_hits_and_misses() {
    let mut ocean = Ocean::new(3);
    ocean
        .add_ship(Ship::build(Coord::new(0, 0), 2, Direction::East))
        .unwrap();

    let mut incoming = ShotLog::default();
    incoming.record(Coord::new(2, 2), GuessResult::Miss);

    let rendered = fleet_board(&ocean, &incoming);
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], "    A B C");
    assert_eq!(lines[1], " 1  S S .");
    assert_eq!(lines[2], " 2  . . .");
    assert_eq!(lines[3], " 3  . . o");

    // a hit replaces the ship marker
    ocean.record_hit(0, 0).unwrap();
    incoming.record(Coord::new(0, 0), GuessResult::Hit);
    let rendered = fleet_board(&ocean, &incoming);
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[1], " 1  X S .");
}

#[test]
fn test_target_board_shows_only_own_shots() {
    let mut shots = ShotLog::default();
    shots.record(Coord::new(0, 1), GuessResult::Hit);
    shots.record(Coord::new(1, 0), GuessResult::Miss);
    shots.record(Coord::new(2, 2), GuessResult::Sunk { length: 2 });

    let rendered = target_board(3, &shots);
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], "    A B C");
    assert_eq!(lines[1], " 1  . X .");
    assert_eq!(lines[2], " 2  o . .");
    assert_eq!(lines[3], " 3  . . X");
}
