use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::{stamps, Board, GameEngine, MoveSource, PieceKind};

fn bench_collision_probe(c: &mut Criterion) {
    let mut board = Board::new(20, 10).unwrap();
    for x in 0..9 {
        board.set(x, 19, Some(PieceKind::I));
    }
    let stamp = &stamps(PieceKind::T)[0];

    c.bench_function("collision_probe", |b| {
        b.iter(|| board.collides(black_box(stamp), black_box(3), black_box(17)))
    });
}

fn bench_move_down(c: &mut Criterion) {
    let mut engine = GameEngine::new(20, 10, 12345).unwrap();
    engine.new_game();

    c.bench_function("move_down", |b| {
        b.iter(|| {
            if !engine.move_down(black_box(MoveSource::Gravity)) {
                engine.merge_active();
                engine.clear_rows();
                if engine.spawn().game_over {
                    engine.new_game();
                }
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut engine = GameEngine::new(20, 10, 12345).unwrap();
    engine.new_game();
    engine.move_down(MoveSource::Gravity);

    c.bench_function("rotate", |b| b.iter(|| engine.rotate()));
}

fn bench_clear_four_rows(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new(20, 10).unwrap();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            board.clear_full_rows()
        })
    });
}

fn bench_garbage_line(c: &mut Criterion) {
    let mut engine = GameEngine::new(20, 10, 12345).unwrap();
    engine.new_game();

    c.bench_function("add_garbage_line", |b| {
        b.iter(|| {
            engine.add_garbage_line();
            // Keep the board from saturating between iterations.
            engine.clear_rows();
            if engine.grid().occupied_cells() > 150 {
                engine.new_game();
            }
        })
    });
}

fn bench_full_drop_cycle(c: &mut Criterion) {
    let mut engine = GameEngine::new(20, 10, 12345).unwrap();
    engine.new_game();

    c.bench_function("drop_merge_clear_spawn", |b| {
        b.iter(|| {
            engine.hard_drop();
            engine.merge_active();
            let cleared = engine.clear_rows();
            if engine.spawn().game_over {
                engine.new_game();
            }
            black_box(cleared.lines_removed)
        })
    });
}

fn bench_view_data(c: &mut Criterion) {
    let mut engine = GameEngine::new(20, 10, 12345).unwrap();
    engine.new_game();

    c.bench_function("view_data", |b| b.iter(|| black_box(engine.view_data())));
}

criterion_group!(
    benches,
    bench_collision_probe,
    bench_move_down,
    bench_rotate,
    bench_clear_four_rows,
    bench_garbage_line,
    bench_full_drop_cycle,
    bench_view_data
);
criterion_main!(benches);
