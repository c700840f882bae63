use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_life::core::{lookup, place, snapshot, step, GridState, Session};
use tui_life::types::Orientation;

fn random_session() -> Session {
    let mut session = Session::default();
    session.randomize();
    session
}

fn bench_step(c: &mut Criterion) {
    let grid = random_session().grid().clone();

    c.bench_function("step_100x75", |b| {
        b.iter(|| step(black_box(&grid)));
    });
}

fn bench_tick(c: &mut Criterion) {
    let mut session = random_session();
    session.start();

    c.bench_function("session_tick", |b| {
        b.iter(|| {
            session.tick();
        })
    });
}

fn bench_place_gun(c: &mut Criterion) {
    let gun = lookup("glider_gun").unwrap();

    c.bench_function("place_glider_gun", |b| {
        b.iter(|| {
            let mut grid = GridState::default();
            place(gun, black_box(Orientation::Up), (50, 20), &mut grid)
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let grid = random_session().grid().clone();
    let bytes = snapshot::encode(&grid);

    c.bench_function("snapshot_encode", |b| {
        let mut out = Vec::with_capacity(bytes.len());
        b.iter(|| {
            out.clear();
            snapshot::encode_into(black_box(&grid), &mut out);
        })
    });

    c.bench_function("snapshot_decode", |b| {
        b.iter(|| snapshot::decode(black_box(&bytes)))
    });
}

criterion_group!(benches, bench_step, bench_tick, bench_place_gun, bench_snapshot);
criterion_main!(benches);
