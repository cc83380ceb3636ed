use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};

use blockfall::core::surface::NullSurface;
use blockfall::core::{Board, ClassicFactory, Flow, Game, Landing, Mode, Session, SessionConfig};
use blockfall::types::{GameEvent, Vector, BLUE, DOWN, EMPTY, RIGHT};

fn session() -> Session<ClassicFactory<StdRng>> {
    Session::new(
        SessionConfig::default(),
        ClassicFactory::new(StdRng::seed_from_u64(12345)),
    )
}

fn bench_tick(c: &mut Criterion) {
    let mut game = Game::new(
        SessionConfig::default(),
        ClassicFactory::new(StdRng::seed_from_u64(12345)),
    );
    let mut surface = NullSurface;

    c.bench_function("game_tick_drop", |b| {
        b.iter(|| {
            let _ = game.tick(&mut surface, black_box(&[GameEvent::DropTick]));
            if game.mode() != Mode::Playing {
                game.session_mut().reset();
                game.apply(Flow::Transition(Mode::Playing));
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new(16, 10, EMPTY);
            // Fill bottom 4 rows
            for row in 12..16 {
                for col in 0..10 {
                    board.set(Vector::new(row, col), BLUE);
                }
            }
            board.clear_full_rows()
        })
    });
}

fn bench_settle(c: &mut Criterion) {
    let mut s = session();

    c.bench_function("drop_and_settle", |b| {
        b.iter(|| {
            while s.attempt_move(black_box(DOWN)) {}
            if s.settle() == Landing::ToppedOut {
                s.reset();
            }
            s.clear_full_rows()
        })
    });
}

fn bench_attempt_move(c: &mut Criterion) {
    let mut s = session();

    c.bench_function("attempt_move", |b| {
        b.iter(|| {
            s.attempt_move(black_box(RIGHT));
        })
    });
}

fn bench_attempt_rotate(c: &mut Criterion) {
    let mut s = session();

    c.bench_function("attempt_rotate", |b| {
        b.iter(|| {
            s.attempt_rotate();
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_settle,
    bench_attempt_move,
    bench_attempt_rotate
);
criterion_main!(benches);
