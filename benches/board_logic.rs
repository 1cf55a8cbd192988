use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetris_board::core::{Board, SimpleRng, J_PIECE};
use tetris_board::term::{BoardView, FrameBuffer, GameView, Viewport};
use tetris_board::types::SPAWN_POSITION;

fn bench_gravity_shift(c: &mut Criterion) {
    c.bench_function("gravity_shift", |b| {
        b.iter(|| {
            let mut board = Board::new();
            board.spawn_piece(J_PIECE, SPAWN_POSITION);
            while board.position().1 > 0 {
                black_box(board.shift_piece(0, -1));
            }
        })
    });
}

fn bench_side_to_side(c: &mut Criterion) {
    let mut board = Board::new();
    board.spawn_piece(J_PIECE, (4, 10));
    board.shift_piece(0, 0);
    let mut dx = 1;

    c.bench_function("side_to_side_shift", |b| {
        b.iter(|| {
            black_box(board.shift_piece(black_box(dx), 0));
            dx = -dx;
        })
    });
}

fn bench_random_repaint(c: &mut Criterion) {
    let mut board = Board::new();
    let mut rng = SimpleRng::new(12345);

    c.bench_function("random_repaint", |b| {
        b.iter(|| black_box(board.repaint_with(|_, _| rng.next_cell())))
    });
}

fn bench_view_apply_and_render(c: &mut Criterion) {
    let mut board = Board::new();
    let mut rng = SimpleRng::new(7);
    let batch = board.repaint_with(|_, _| rng.next_cell());
    let mut view = BoardView::from_board(&Board::new());
    let game_view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("view_apply_and_render", |b| {
        b.iter(|| {
            view.apply(black_box(&batch));
            game_view.render_into(&view, None, viewport, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_gravity_shift,
    bench_side_to_side,
    bench_random_repaint,
    bench_view_apply_and_render
);
criterion_main!(benches);
