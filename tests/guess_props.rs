use std::collections::HashSet;

use flotilla::{GameError, GuessTracker};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn tracker_returns_every_cell_exactly_once(seed in any::<u64>(), size in 1i32..=8) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut tracker = GuessTracker::new(size);

        let mut seen = HashSet::new();
        for _ in 0..(size * size) {
            let coord = tracker.generate_guess(&mut rng).unwrap();
            prop_assert!(coord.in_bounds(size));
            prop_assert!(seen.insert((coord.row, coord.col)));
            prop_assert!(tracker.already_guessed(coord.row, coord.col));
        }

        prop_assert!(tracker.is_exhausted());
        prop_assert_eq!(
            tracker.generate_guess(&mut rng).unwrap_err(),
            GameError::GuessesExhausted
        );
    }

    #[test]
    fn partial_runs_stay_distinct_as_remaining_shrinks(seed in any::<u64>(), guesses in 0usize..20) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut tracker = GuessTracker::new(5);

        let mut seen = HashSet::new();
        for i in 0..guesses {
            prop_assert_eq!(tracker.cells_remaining(), 25 - i);
            let coord = tracker.generate_guess(&mut rng).unwrap();
            prop_assert!(
                seen.insert((coord.row, coord.col)),
                "repeated guess at {}",
                coord
            );
        }
        prop_assert_eq!(seen.len(), guesses);
        prop_assert_eq!(tracker.cells_remaining(), 25 - guesses);
    }
}
