//! Property tests for movement bounds, wander targets and villager walking.

use island_horizons::{
    pick_wander_target, resolve_step, step_villager, walk_toward, Direction, Personality, Position,
    StepRules, Villager, WalkStep, WanderSettings,
};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn direction() -> impl Strategy<Value = Direction> {
    (-1i32..=1, -1i32..=1)
        .prop_filter("zero vector", |(dx, dy)| *dx != 0 || *dy != 0)
        .prop_map(|(dx, dy)| Direction::from_delta(dx, dy).unwrap())
}

fn position() -> impl Strategy<Value = Position> {
    (0.0f32..=30.0, 0.0f32..=30.0).prop_map(|(x, y)| Position::new(x, y))
}

proptest! {
    #[test]
    fn player_never_leaves_grid(start in position(), moves in prop::collection::vec(direction(), 0..200)) {
        let rules = StepRules::default();
        let mut pos = start;
        for direction in moves {
            if let Some(next) = resolve_step(pos, direction, &rules) {
                pos = next;
            }
            prop_assert!(pos.x >= 0.0 && pos.x <= 30.0);
            prop_assert!(pos.y >= 0.0 && pos.y <= 30.0);
        }
    }

    #[test]
    fn diagonal_steps_cover_more_ground(start in (5.0f32..25.0, 5.0f32..25.0), dx in prop::sample::select(vec![-1, 1]), dy in prop::sample::select(vec![-1, 1])) {
        let from = Position::new(start.0, start.1);
        let rules = StepRules::default();
        let diagonal = resolve_step(from, Direction::from_delta(dx, dy).unwrap(), &rules).unwrap();
        let straight = resolve_step(from, Direction::from_delta(dx, 0).unwrap(), &rules).unwrap();

        prop_assert!((from.distance(diagonal) - 0.7 * std::f32::consts::SQRT_2).abs() < 1e-4);
        prop_assert!((from.distance(straight) - 0.7).abs() < 1e-4);

        let normalized = StepRules { normalize_diagonal: true, ..rules };
        let even = resolve_step(from, Direction::from_delta(dx, dy).unwrap(), &normalized).unwrap();
        prop_assert!((from.distance(even) - 0.7).abs() < 1e-4);
    }

    #[test]
    fn wander_targets_stay_off_the_shore(origin in position(), seed in any::<u64>()) {
        let tuning = WanderSettings::default();
        let mut rng = StdRng::seed_from_u64(seed);
        let target = pick_wander_target(origin, &tuning, &mut rng);
        prop_assert!(target.x >= 2.0 && target.x <= 28.0);
        prop_assert!(target.y >= 2.0 && target.y <= 28.0);
    }

    #[test]
    fn walking_strictly_closes_distance(from in position(), to in position(), speed in 0.01f32..2.0) {
        match walk_toward(from, to, speed) {
            WalkStep::Arrived(pos) => {
                prop_assert_eq!(pos, to);
                prop_assert!(from.distance(to) < speed || from.distance(to) == 0.0);
            }
            WalkStep::Advanced(pos) => {
                prop_assert!(from.distance(to) >= speed);
                prop_assert!(pos.distance(to) < from.distance(to));
            }
        }
    }

    #[test]
    fn villagers_always_arrive(start in (2.0f32..28.0, 2.0f32..28.0), target in (2.0f32..28.0, 2.0f32..28.0), seed in any::<u64>()) {
        let tuning = WanderSettings { chance: 0.0, ..WanderSettings::default() };
        let mut rng = StdRng::seed_from_u64(seed);
        let mut villager = Villager::new("p", "Prop", "Cat", Personality::Lazy, Position::new(start.0, start.1));
        let goal = Position::new(target.0, target.1);
        villager.target_position = Some(goal);

        let speed = 0.025;
        let mut last = villager.position.distance(goal);
        let mut frames = 0;
        while villager.is_wandering() {
            step_villager(&mut villager, speed, &tuning, &mut rng);
            let now = villager.position.distance(goal);
            prop_assert!(now < last || !villager.is_wandering());
            last = now;
            frames += 1;
            prop_assert!(frames < 2000);
        }
        prop_assert_eq!(villager.position, goal);
    }
}
