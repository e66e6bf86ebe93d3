use std::collections::HashSet;

use flotilla::{Coord, Direction, GameError, GuessResult, Ocean, Ship};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_manual_placement_and_occupancy() {
    let mut ocean = Ocean::new(4);
    ocean
        .add_ship(Ship::build(Coord::new(1, 1), 3, Direction::East))
        .unwrap();

    assert!(ocean.is_occupied(1, 1));
    assert!(ocean.is_occupied(1, 2));
    assert!(ocean.is_occupied(1, 3));
    assert!(!ocean.is_occupied(2, 1));
    assert_eq!(ocean.cell_count(), 3);
    assert_eq!(ocean.ship_count(), 1);
}

#[test]
fn test_add_ship_rejects_bad_placements() {
    let mut ocean = Ocean::new(4);
    // columns 2..=4 run off a 4-wide board
    assert_eq!(
        ocean
            .add_ship(Ship::build(Coord::new(1, 2), 3, Direction::East))
            .unwrap_err(),
        GameError::ShipOutOfBounds
    );

    ocean
        .add_ship(Ship::build(Coord::new(1, 1), 3, Direction::East))
        .unwrap();
    assert_eq!(
        ocean
            .add_ship(Ship::build(Coord::new(0, 2), 2, Direction::South))
            .unwrap_err(),
        GameError::ShipOverlaps
    );
    assert_eq!(ocean.cell_count(), 3);
}

#[test]
fn test_hits_sink_and_destroy() {
    let mut ocean = Ocean::new(4);
    ocean
        .add_ship(Ship::build(Coord::new(1, 1), 3, Direction::East))
        .unwrap();

    assert_eq!(ocean.record_hit(1, 1).unwrap(), GuessResult::Hit);
    assert_eq!(ocean.record_hit(1, 2).unwrap(), GuessResult::Hit);
    assert!(!ocean.is_destroyed());
    assert_eq!(
        ocean.record_hit(1, 3).unwrap(),
        GuessResult::Sunk { length: 3 }
    );
    assert!(ocean.is_destroyed());
    assert_eq!(ocean.ship_count(), 0);
    assert_eq!(ocean.cell_count(), 0);
}

#[test]
fn test_record_hit_requires_occupancy() {
    let mut ocean = Ocean::new(4);
    ocean
        .add_ship(Ship::build(Coord::new(0, 0), 2, Direction::East))
        .unwrap();

    assert_eq!(
        ocean.record_hit(3, 3).unwrap_err(),
        GameError::NotOccupied { row: 3, col: 3 }
    );

    // a cell already hit is no longer occupied
    ocean.record_hit(0, 0).unwrap();
    assert_eq!(
        ocean.record_hit(0, 0).unwrap_err(),
        GameError::NotOccupied { row: 0, col: 0 }
    );
}

#[test]
fn test_apply_guess_reports_misses_without_mutation() {
    let mut ocean = Ocean::new(4);
    ocean
        .add_ship(Ship::build(Coord::new(0, 0), 2, Direction::East))
        .unwrap();

    assert_eq!(ocean.apply_guess(3, 3).unwrap(), GuessResult::Miss);
    assert_eq!(ocean.cell_count(), 2);
    assert_eq!(ocean.apply_guess(0, 1).unwrap(), GuessResult::Hit);
    assert_eq!(ocean.cell_count(), 1);
}

#[test]
fn test_record_hit_updates_only_the_struck_ship() {
    let mut ocean = Ocean::new(6);
    ocean
        .add_ship(Ship::build(Coord::new(0, 0), 2, Direction::East))
        .unwrap();
    ocean
        .add_ship(Ship::build(Coord::new(3, 3), 3, Direction::South))
        .unwrap();

    ocean.record_hit(3, 3).unwrap();
    let remaining: Vec<usize> = ocean.ships().iter().map(|s| s.cells_remaining()).collect();
    let mut sorted = remaining.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, vec![2, 2]);
}

#[test]
fn test_random_fleet_is_in_bounds_and_disjoint() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut ocean = Ocean::new(10);
    for length in 2..=5 {
        ocean.place_ship(&mut rng, length).unwrap();
    }
    assert_eq!(ocean.ship_count(), 4);

    let mut seen = HashSet::new();
    for ship in ocean.ships() {
        assert!(ship.in_bounds(10));
        for cell in ship.cells() {
            assert!(seen.insert(cell), "ships share cell {}", cell);
        }
    }

    // the index must be exactly the union of ship cells
    let indexed: HashSet<_> = ocean.occupied_cells().collect();
    assert_eq!(indexed, seen);
    assert_eq!(ocean.cell_count(), 2 + 3 + 4 + 5);
}

#[test]
fn test_placement_surfaces_exhaustion() {
    // a length-3 ship cannot fit a 2x2 board in any direction
    let mut rng = SmallRng::seed_from_u64(7);
    let mut ocean = Ocean::new(2);
    assert_eq!(
        ocean.place_ship(&mut rng, 3).unwrap_err(),
        GameError::PlacementExhausted { length: 3 }
    );
    assert_eq!(ocean.ship_count(), 0);
    assert_eq!(ocean.cell_count(), 0);
}
