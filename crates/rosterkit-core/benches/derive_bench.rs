//! Benchmarks for the per-render hot path.
//!
//! Display state is recomputed on every render without memoization, so the
//! derivation has to stay trivially cheap.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rosterkit_core::{ActionKind, DisplayState, Roster, SchedulerState};

fn bench_derive(c: &mut Criterion) {
    let actions = vec![ActionKind::CloseOnHover, ActionKind::More, ActionKind::Mute];

    c.bench_function("display_state_derive", |b| {
        b.iter(|| {
            DisplayState::derive(
                black_box(SchedulerState::Available),
                black_box(Some(&actions)),
                black_box(true),
            )
        })
    });
}

fn bench_roster_parse(c: &mut Criterion) {
    let raw = serde_json::to_string(&Roster::sample()).unwrap();

    c.bench_function("roster_parse", |b| {
        b.iter(|| Roster::from_json_str(black_box(&raw)).unwrap())
    });
}

criterion_group!(benches, bench_derive, bench_roster_parse);
criterion_main!(benches);
