//! Performance tests for the simulation tick

use island_horizons::{GameState, IslandResult, Personality, Position, Session, Settings, Villager};
use std::time::{Duration, Instant};

#[test]
fn test_tick_performance() -> IslandResult<()> {
    let settings = Settings {
        seed: Some(12345),
        ..Settings::default()
    };

    // A crowded island: the eight residents plus a few hundred visitors
    let mut state = GameState::new();
    for i in 0..400 {
        let x = 2.0 + (i % 26) as f32;
        let y = 2.0 + (i / 26 % 26) as f32;
        state.villagers.push(Villager::new(
            format!("guest{}", i),
            "Guest",
            "Sheep",
            Personality::Normal,
            Position::new(x, y),
        ));
    }
    let mut session = Session::with_state(state, &settings);

    let start = Instant::now();
    let iterations = 1000;
    for _ in 0..iterations {
        session.tick(Duration::from_millis(16));
    }

    let elapsed = start.elapsed();
    let avg_frame_time = elapsed / iterations;

    println!("Average tick time: {:?}", avg_frame_time);

    // Should be well under a 60 FPS frame budget
    assert!(
        avg_frame_time.as_millis() < 5,
        "Tick too slow: {:?}",
        avg_frame_time
    );

    session.state.check_invariants()?;
    Ok(())
}
