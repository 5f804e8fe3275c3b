use criterion::{criterion_group, criterion_main, Criterion};
use island_horizons::{resolve_interaction, GameState, Position, Session, Settings};
use std::time::Duration;

fn seeded_session() -> Session {
    let settings = Settings {
        seed: Some(42),
        ..Settings::default()
    };
    let mut session = Session::new(&settings);
    session.start_game();
    session
}

fn bench_tick(c: &mut Criterion) {
    let mut session = seeded_session();
    c.bench_function("session_tick", |b| {
        b.iter(|| session.tick(Duration::from_millis(16)));
    });
}

fn bench_interaction(c: &mut Criterion) {
    let mut state = GameState::new();
    state.player_pos = Position::new(12.0, 16.0);
    c.bench_function("resolve_interaction_miss", |b| {
        b.iter(|| resolve_interaction(&state));
    });
}

criterion_group!(benches, bench_tick, bench_interaction);
criterion_main!(benches);
